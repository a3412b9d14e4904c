//! Login Form Validation
//!
//! This example walks through the two moments a login page validates:
//!
//! - Loss of focus: one field is checked and its first message shown inline
//! - Submission: every field is checked and the submit is blocked on failure
//!
//! It also loads the same rules from a JSON document and escapes a message
//! before rendering it.
//!
//! Run with: cargo run --example login_form
//! Set RUST_LOG=debug to see validation events.

use fieldguard::core::DisplayMode;
use fieldguard::form::Validator;
use fieldguard::presets::{self, PASSWORD, USERNAME};
use fieldguard::sanitize::escape_html;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("=== Login Form Validation Example ===\n");

    let validator = presets::login()?;

    // Example 1: blur events
    println!("Example 1: Loss of focus");
    for (field, value) in [
        (USERNAME, ""),
        (USERNAME, "ab"),
        (USERNAME, "a b"),
        (USERNAME, "abc_123"),
        (PASSWORD, "12345"),
        (PASSWORD, "123456"),
    ] {
        let result = validator.validate(field, value)?;
        match result.display(DisplayMode::FirstOnly).first() {
            Some(message) => println!("  {field} = {value:?}: {message}"),
            None => println!("  {field} = {value:?}: ok"),
        }
    }
    println!();

    // Example 2: submission
    println!("Example 2: Submission");
    for values in [
        [(USERNAME, "a!"), (PASSWORD, "")],
        [(USERNAME, "admin"), (PASSWORD, "123456")],
    ] {
        let report = validator.validate_form(&values);
        if report.blocks_submission() {
            println!("  Blocked, focus {:?}", report.first_invalid());
            for (field, messages) in report.messages(DisplayMode::All) {
                for message in messages {
                    println!("    {field}: {message}");
                }
            }
        } else {
            println!("  Submitted {:?}", values[0].1);
        }
    }
    println!();

    // Example 3: rules from configuration
    println!("Example 3: Rules from JSON");
    let json = validator.to_json()?;
    let loaded = Validator::from_json(&json)?;
    println!("  Loaded {} fields: {:?}", loaded.len(), loaded.field_names().collect::<Vec<_>>());
    println!("  Same rules: {}\n", loaded == validator);

    // Example 4: escaping before rendering
    println!("Example 4: Escaping");
    let untrusted = "<script>alert('hi')</script>";
    println!("  {}", escape_html(untrusted));

    Ok(())
}
