//! Fuzz target for the Luhn checksum.
//!
//! Tests that luhn functions never panic and keep their invariants.

#![no_main]

use brandcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp bytes to digit characters
    let digits: String = data.iter().map(|&b| char::from(b'0' + b % 10)).collect();

    let _ = luhn::validate(&digits);
    let sum = luhn::checksum(&digits).expect("digit string must have a checksum");
    assert!(sum <= 9 * digits.len() as u32);

    if !digits.is_empty() && digits.len() <= 18 {
        let check = luhn::check_digit(&digits).expect("digit string must have a check digit");
        assert!(check <= 9);

        let full = format!("{digits}{check}");
        assert!(luhn::validate(&full), "appending check digit must validate");
    }

    // Raw (possibly non-digit) input must fold to a recoverable outcome
    if let Ok(raw) = std::str::from_utf8(data) {
        if raw.bytes().any(|b| !b.is_ascii_digit()) {
            assert!(!luhn::validate(raw));
            assert_eq!(luhn::checksum(raw), None);
        }
    }
});
