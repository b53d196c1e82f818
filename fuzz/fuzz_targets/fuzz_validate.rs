//! Fuzz target for the full validation pipeline.
//!
//! Tests that validate() never panics and only ever reports contract brands.

#![no_main]

use brandcheck::{is_valid, passes_luhn, validate, Brand, CATALOG, DEFAULT_ASSET};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let result = validate(data);
    let _ = is_valid(data);
    let _ = passes_luhn(data);

    // The brand is always a catalog name or a sentinel
    match result.brand() {
        Brand::Known(name) => {
            assert!(CATALOG.iter().any(|r| r.name == name));
            assert_ne!(result.image_ref(), DEFAULT_ASSET);
        }
        Brand::Unknown | Brand::Invalid => {
            assert_eq!(result.image_ref(), DEFAULT_ASSET);
            assert!(!result.is_valid());
        }
    }

    // A valid result always names a brand
    if result.is_valid() {
        assert!(result.brand().is_known());
    }
});
