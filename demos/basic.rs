//! Basic card classification walkthrough.
//!
//! Run with: `cargo run --example basic`

use brandcheck::{is_valid, validate, CATALOG};

fn main() {
    println!("=== Card Brand Classification ===\n");

    // Example 1: Classify a Visa number with formatting
    let number = "4532 0151 1283 0366";
    println!("Validating: {}", number);

    let result = validate(number);
    println!("  Brand: {}", result.brand().name());
    println!("  Valid: {}", if result.is_valid() { "yes" } else { "no" });
    println!("  Image: {}", result.image_ref());
    println!();

    // Example 2: Every outcome is a plain result, never an error
    let samples = [
        ("5500000000000004", "Mastercard"),
        ("340000000000009", "Amex"),
        ("6304000000000000", "Maestro (wins the 6304 overlap)"),
        ("4532015112830367", "Visa with a typo'd check digit"),
        ("123", "Too short for any brand"),
        ("abcd", "No digits at all"),
    ];

    println!("Classification samples:");
    for (number, description) in samples {
        let result = validate(number);
        println!(
            "  {:20} {:40} -> {} / {}",
            number,
            description,
            result.brand().name(),
            if result.is_valid() { "valid" } else { "not valid" }
        );
    }
    println!();

    // Example 3: Quick boolean check
    println!(
        "is_valid(\"4532-0151-1283-0366\") = {}",
        is_valid("4532-0151-1283-0366")
    );
    println!();

    // Example 4: The catalog, in match-priority order
    println!("Brand catalog:");
    for rule in CATALOG {
        let lengths: Vec<String> = rule.lengths.iter().map(|l| l.to_string()).collect();
        println!(
            "  {:14} prefixes: {:50} lengths: {}",
            rule.name,
            rule.prefixes.join(", "),
            lengths.join(", ")
        );
    }
}
