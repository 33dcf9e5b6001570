//! Schema-from-file example.
//!
//! Loads an option schema from JSON (the same format the `argspec` binary
//! reads from disk), validates it, and parses an argument vector against it.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argspec-demos --example schema_from_json
//! ```

use argspec_core::{OptionSchema, validate_schema};
use argspec_parser::parse;

const SCHEMA_JSON: &str = r#"{
  "schema_version": "1.0.0",
  "command": "fetch",
  "description": "Download files over HTTP",
  "options": [
    {"short": "-q", "long": "--quiet", "takes_value": false,
     "description": "Suppress progress output"},
    {"short": "-u", "long": "--url", "takes_value": true, "required": true},
    {"long": "--retries", "takes_value": true}
  ],
  "groups": []
}"#;

fn main() {
    let schema: OptionSchema = serde_json::from_str(SCHEMA_JSON).unwrap();

    let violations = validate_schema(&schema);
    println!(
        "schema '{}': {} option(s), {} violation(s)",
        schema.command.as_deref().unwrap_or("?"),
        schema.options.len(),
        violations.len()
    );

    let matches = parse(
        &schema,
        ["-q", "--url", "https://example.com/a.tar.gz", "--retries=3"],
    )
    .unwrap();
    println!("quiet:   {}", matches.has("quiet"));
    println!("url:     {:?}", matches.value_of("url"));
    println!("retries: {:?}", matches.value_of("retries"));

    // The required --url makes an empty vector fail
    let err = parse(&schema, Vec::<String>::new()).unwrap_err();
    println!("missing: {err}");
}
