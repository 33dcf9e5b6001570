//! Schema-driven parsing of command-line argument vectors.
//!
//! This crate implements the parse half of `argspec`: take an
//! [`OptionSchema`] built with `argspec-core`, scan an argv-like token
//! vector against it, and get back an [`OptionMatches`] with the matched
//! options, their values, and the leftover positionals.
//!
//! # Main entry points
//!
//! - [`parse`] — parse with default settings.
//! - [`parse_with_defaults`] — same, filling in defaults for absent options.
//! - [`ArgParser`] — builder-configured parser (partial matching, quote
//!   stripping, stop-at-first-positional), reusable across calls.
//!
//! # Example
//!
//! ```
//! use argspec_core::{OptionSchema, OptionSpec};
//! use argspec_parser::parse;
//!
//! let schema = OptionSchema::new()
//!     .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")))
//!     .with_option(OptionSpec::with_value(Some("-o"), Some("--output")));
//!
//! let matches = parse(&schema, ["-v", "-o", "out.txt", "build"]).unwrap();
//! assert!(matches.has("verbose"));
//! assert_eq!(matches.value_of("output"), Some("out.txt"));
//! assert_eq!(matches.leftovers(), &["build"]);
//! ```
//!
//! # Scanning rules
//!
//! Tokens are scanned left to right: `--` ends option scanning, a lone `-`
//! is always a positional, `--name=value` and `-x=value` attach values, and
//! multi-character short tokens expand as concatenated bundles (`-vf out`).
//! The full rules are documented on [`ArgParser::parse`]. Parsing is a pure
//! function over its inputs: no I/O, no shared state across calls.
//!
//! [`OptionSchema`]: argspec_core::OptionSchema

mod defaults;
mod error;
mod matches;
mod scanner;
mod tokens;

pub use defaults::Defaults;
pub use error::{ParseError, Result};
pub use matches::{MatchedOption, OptionMatches};
pub use scanner::{ArgParser, ArgParserBuilder};

use argspec_core::OptionSchema;

/// Parses an argument vector with default parser settings.
///
/// This is the primary entry point for the common case: exact long-option
/// matching, values taken verbatim, the whole vector scanned. Use
/// [`ArgParser::builder`] when you need different settings.
///
/// # Examples
///
/// ```
/// use argspec_core::{OptionSchema, OptionSpec};
/// use argspec_parser::parse;
///
/// let schema = OptionSchema::new()
///     .with_option(OptionSpec::flag(Some("-a"), Some("--all")));
///
/// let matches = parse(&schema, ["-a", "src", "dest"]).unwrap();
/// assert!(matches.has("all"));
/// assert_eq!(matches.leftovers(), &["src", "dest"]);
/// ```
pub fn parse<I, T>(schema: &OptionSchema, args: I) -> Result<OptionMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    ArgParser::new().parse(schema, args)
}

/// Parses an argument vector, then applies defaults for absent options.
///
/// Defaults can satisfy required options; they never override a value the
/// vector supplied. Passing an empty [`Defaults`] behaves exactly like
/// [`parse`].
///
/// # Examples
///
/// ```
/// use argspec_core::{OptionSchema, OptionSpec};
/// use argspec_parser::{Defaults, parse_with_defaults};
///
/// let schema = OptionSchema::new()
///     .with_option(OptionSpec::with_value(Some("-o"), Some("--output")).required());
///
/// let mut defaults = Defaults::new();
/// defaults.set("--output", "a.out");
///
/// let matches = parse_with_defaults(&schema, Vec::<String>::new(), &defaults).unwrap();
/// assert_eq!(matches.value_of("output"), Some("a.out"));
/// ```
pub fn parse_with_defaults<I, T>(
    schema: &OptionSchema,
    args: I,
    defaults: &Defaults,
) -> Result<OptionMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    ArgParser::new().parse_with_defaults(schema, args, defaults)
}
