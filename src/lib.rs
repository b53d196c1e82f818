//! # brandcheck
//!
//! Card brand classification and Luhn checksum validation.
//!
//! Given a raw, possibly human-typed card number, `brandcheck` identifies
//! the issuing network from a fixed, ordered catalog of prefix/length rules
//! and reports whether the number's Luhn checksum holds. It is a format
//! validator only: no network calls, no persistence, no statement about
//! whether a card is real or active.
//!
//! The whole API is infallible. Empty input, unmatched digits, and failed
//! checksums are all ordinary [`ValidationResult`] values, never errors, so
//! front ends (a GUI, a terminal loop) can render every outcome the same
//! way.
//!
//! ## Quick Start
//!
//! ```rust
//! use brandcheck::{validate, Brand};
//!
//! let result = validate("4532 0151 1283 0366");
//! assert_eq!(result.brand(), Brand::Known("visa"));
//! assert_eq!(result.image_ref(), "assets/visa.webp");
//! assert!(result.is_valid());
//!
//! // Digits that match no brand are "unknown", not an error.
//! assert_eq!(validate("123").brand(), Brand::Unknown);
//!
//! // Input with no digits at all is "invalid".
//! assert_eq!(validate("abcd").brand(), Brand::Invalid);
//! ```
//!
//! ## Match priority
//!
//! The catalog is an ordered table and the first matching rule wins. Some
//! prefixes overlap across brands ("6304" is listed for both maestro and
//! laser, "6759" for both maestro and switch); table order resolves those
//! overlaps deterministically. See [`catalog::CATALOG`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for [`ValidationResult`] |
//! | `cli`   | `brandcheck` command-line tool |
//!
//! ## Concurrency
//!
//! [`validate`] is a pure function over an immutable static catalog: safe to
//! call concurrently from any number of threads without synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod luhn;
pub mod normalize;
pub mod report;
pub mod validate;

// Re-export main types at crate root
pub use catalog::{classify, BrandRule, CATALOG, DEFAULT_ASSET};
pub use report::{Brand, ValidationResult};
pub use validate::{is_valid, passes_luhn, validate};
