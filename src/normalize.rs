//! Input normalization for human-typed card numbers.
//!
//! People paste card numbers with spaces, dashes, dots, or stray text.
//! Normalization keeps the decimal digits, in order, and discards everything
//! else. It never fails; the worst outcome is an empty string.

/// Strips every non-digit character from `raw`, preserving digit order.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
///
/// # Example
///
/// ```
/// use brandcheck::normalize::normalize;
///
/// assert_eq!(normalize("4532 0151 1283 0366"), "4532015112830366");
/// assert_eq!(normalize("4532-0151-1283-0366"), "4532015112830366");
/// assert_eq!(normalize("card: 4532x0366"), "45320366");
/// assert_eq!(normalize("abcd"), "");
/// ```
#[inline]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
