//! CLI front end for card brand classification.
//!
//! # Usage
//!
//! ```bash
//! # Classify a card number
//! brandcheck check "4532 0151 1283 0366"
//!
//! # Same, as JSON
//! brandcheck check 4532015112830366 --output json
//!
//! # Line loop: one number per line on stdin, "exit" to quit
//! brandcheck repl
//!
//! # Checksum only
//! brandcheck luhn 4532015112830366
//!
//! # List the catalog
//! brandcheck brands
//! ```

use std::io::{self, BufRead, Write};

use brandcheck::{passes_luhn, validate, ValidationResult, CATALOG};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "brandcheck")]
#[command(author, version, about = "Card brand classification and Luhn checksum validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a card number and check its Luhn checksum
    Check {
        /// Card number (spaces, dashes, and other junk are stripped)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Read one card number per line from stdin until "exit"
    Repl,

    /// Check the Luhn checksum only, ignoring brand and length
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// List the brand catalog in match-priority order
    Brands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Repl => cmd_repl(),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Brands => cmd_brands(),
    }
}

fn print_result(result: &ValidationResult) {
    println!("brand: {}", result.brand().name());
    println!("valid: {}", if result.is_valid() { "yes" } else { "no" });
    println!("image: {}", result.image_ref());
}

fn cmd_check(card_number: &str, output: OutputFormat) {
    let result = validate(card_number);

    match output {
        OutputFormat::Text => print_result(&result),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "brand": result.brand().name(),
                "valid": result.is_valid(),
                "image": result.image_ref(),
            });
            println!("{json}");
        }
    }

    std::process::exit(if result.is_valid() { 0 } else { 1 });
}

fn cmd_repl() {
    println!("Enter one card number per line ('exit' to quit).");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        };

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        print_result(&validate(input));
        println!("{}", "-".repeat(40));
        // Keep the prompt responsive when stdout is piped.
        let _ = io::stdout().flush();
    }
}

fn cmd_luhn(card_number: &str) {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_brands() {
    for rule in CATALOG {
        let lengths: Vec<String> = rule.lengths.iter().map(|l| l.to_string()).collect();
        println!(
            "{:14} prefixes: {:55} lengths: {:24} image: {}",
            rule.name,
            rule.prefixes.join(", "),
            lengths.join(", "),
            rule.image
        );
    }
}
