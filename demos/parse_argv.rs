//! Argument-vector parsing example.
//!
//! Builds an option schema in code, parses a few argument vectors against
//! it, and prints the matches, values, and leftovers each one produces.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argspec-demos --example parse_argv
//! ```

use argspec_core::{OptionSchema, OptionSpec};
use argspec_parser::{ArgParser, parse};

fn main() {
    let schema = OptionSchema::new()
        .for_command("copytool")
        .with_option(
            OptionSpec::flag(Some("-v"), Some("--verbose")).with_description("More output"),
        )
        .with_option(
            OptionSpec::with_value(Some("-o"), Some("--output")).with_description("Output path"),
        )
        .with_option(OptionSpec::with_value(None, Some("--exclude")));

    // Bundle, attached value, repeated option, positional
    let matches = parse(
        &schema,
        ["-vo", "out.txt", "--exclude=*.tmp", "--exclude", "*.bak", "input.txt"],
    )
    .unwrap();
    println!("verbose:   {}", matches.has("verbose"));
    println!("output:    {:?}", matches.value_of("output"));
    println!("exclude:   {:?}", matches.values_of("exclude"));
    println!("leftovers: {:?}", matches.leftovers());
    println!();

    // An undeclared option aborts the parse with a descriptive error
    let err = parse(&schema, ["--frobnicate"]).unwrap_err();
    println!("undeclared: {err}");

    // `--` ends option scanning; later tokens stay verbatim
    let matches = parse(&schema, ["-v", "--", "--output", "ignored"]).unwrap();
    println!("after --:   leftovers = {:?}", matches.leftovers());

    // stop-at-first-positional halts at `build` instead of failing on `--whatever`
    let parser = ArgParser::builder().stop_at_first_positional(true).build();
    let matches = parser
        .parse(&schema, ["-v", "build", "--whatever"])
        .unwrap();
    println!("halted:     leftovers = {:?}", matches.leftovers());
}
