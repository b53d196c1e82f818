//! Luhn checksum over normalized digit strings.
//!
//! The Luhn algorithm (the "modulus 10" check) catches single-digit entry
//! errors in card numbers. It does not say anything about whether a card is
//! real or active.
//!
//! Callers pass digit strings only. A non-digit byte is treated as a
//! recoverable not-a-number outcome: the affected function reports the input
//! as not valid instead of panicking or raising an error, so a checksum
//! failure and a malformed digit are indistinguishable to the caller.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a digit string against the Luhn checksum.
///
/// Traverses from the rightmost digit leftwards. The rightmost digit is not
/// doubled; the flag flips after every digit. Doubled digits greater than 9
/// have 9 subtracted. The string is valid iff the running sum is divisible
/// by 10.
///
/// Returns `false` for an empty string or any string containing a non-digit
/// byte.
///
/// # Example
///
/// ```
/// use brandcheck::luhn;
///
/// assert!(luhn::validate("4532015112830366"));
/// assert!(!luhn::validate("4532015112830367"));
/// ```
#[inline]
pub fn validate(digits: &str) -> bool {
    match checksum(digits) {
        Some(sum) => !digits.is_empty() && sum % 10 == 0,
        None => false,
    }
}

/// Computes the raw Luhn sum (not reduced modulo 10).
///
/// Returns `None` if the string contains a non-digit byte.
#[inline]
pub fn checksum(digits: &str) -> Option<u32> {
    let mut sum: u32 = 0;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let d = (b - b'0') as usize;
        if i % 2 == 1 {
            // Every second digit, counted from the right, is doubled.
            sum += DOUBLE_TABLE[d] as u32;
        } else {
            sum += d as u32;
        }
    }
    Some(sum)
}

/// Computes the check digit that would make `digits` plus that digit pass
/// Luhn validation.
///
/// Returns `None` if the string contains a non-digit byte. Used by tests and
/// fuzz targets to construct valid numbers.
///
/// # Example
///
/// ```
/// use brandcheck::luhn;
///
/// let check = luhn::check_digit("453201511283036").unwrap();
/// assert_eq!(check, 6);
/// ```
#[inline]
pub fn check_digit(digits: &str) -> Option<u8> {
    // With the check digit appended, every current position shifts one to
    // the left, so the doubling parity is inverted relative to checksum().
    let mut sum: u32 = 0;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let d = (b - b'0') as usize;
        if i % 2 == 0 {
            sum += DOUBLE_TABLE[d] as u32;
        } else {
            sum += d as u32;
        }
    }
    Some(((10 - (sum % 10)) % 10) as u8)
}
