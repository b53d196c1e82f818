//! Fuzz target for input normalization.

#![no_main]

use brandcheck::normalize::normalize;
use brandcheck::validate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = normalize(data);

    // Output is digits only, order preserved, and idempotent
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(normalize(&digits), digits);
    assert_eq!(
        digits.len(),
        data.chars().filter(char::is_ascii_digit).count()
    );

    // Validation is invariant under normalization
    assert_eq!(validate(data), validate(&digits));
});
