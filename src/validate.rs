//! Main validation orchestration.
//!
//! `validate` combines normalization, catalog matching, and the Luhn
//! checksum into a single operation. It is a pure function of its input:
//! no I/O, no shared mutable state, safe to call from any number of threads
//! without synchronization.

use zeroize::Zeroize;

use crate::catalog;
use crate::luhn;
use crate::normalize::normalize;
use crate::report::ValidationResult;

/// Classifies a raw, possibly human-typed card number.
///
/// Steps, in order:
/// 1. Strip every non-digit character, preserving digit order.
/// 2. No digits left: brand `invalid`, default asset, not valid.
/// 3. Walk the catalog in priority order; the first rule whose length set
///    and prefix set both match wins.
/// 4. No rule matched: brand `unknown`, default asset, not valid.
/// 5. Rule matched: that brand and image, valid iff Luhn passes.
///
/// This function never fails; every outcome is a [`ValidationResult`].
/// The normalized digit buffer is scrubbed before it is dropped.
///
/// # Example
///
/// ```
/// use brandcheck::validate;
///
/// let result = validate("4532 0151 1283 0366");
/// assert_eq!(result.brand().name(), "visa");
/// assert!(result.is_valid());
///
/// let result = validate("abcd");
/// assert_eq!(result.brand().name(), "invalid");
/// ```
pub fn validate(raw: &str) -> ValidationResult {
    let mut digits = normalize(raw);

    let result = if digits.is_empty() {
        ValidationResult::invalid()
    } else {
        match catalog::classify(&digits) {
            Some(rule) => ValidationResult::matched(rule, luhn::validate(&digits)),
            None => ValidationResult::unknown(),
        }
    };

    // Don't leave the PAN lingering in freed memory.
    digits.zeroize();
    result
}

/// Quick boolean check: brand matched and checksum passed.
///
/// # Example
///
/// ```
/// use brandcheck::is_valid;
///
/// assert!(is_valid("4532-0151-1283-0366"));
/// assert!(!is_valid("4532015112830367"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_valid()
}

/// Checks the Luhn checksum only, ignoring brand and length.
///
/// # Example
///
/// ```
/// use brandcheck::passes_luhn;
///
/// assert!(passes_luhn("4532015112830366"));
/// assert!(!passes_luhn("4532015112830367"));
/// ```
#[inline]
pub fn passes_luhn(raw: &str) -> bool {
    let mut digits = normalize(raw);
    let result = luhn::validate(&digits);
    digits.zeroize();
    result
}
