//! Core schema types and validation for declarative option parsing.
//!
//! This crate defines the foundational types a parse runs against:
//!
//! - [`OptionSchema`] — the collection of options and groups for one command.
//! - [`OptionSpec`] — a single option with short/long forms, a value flag,
//!   and required/deprecated markers.
//! - [`OptionGroup`] — a set of mutually exclusive options.
//!
//! Validation ([`validate_schema`]) catches structural errors such as
//! nameless options, malformed short/long forms, duplicate names, and groups
//! referencing undeclared options.
//!
//! The actual parsing lives in the `argspec-parser` crate; this crate stays
//! free of parsing state so schemas can be built, serialized, and shared.
//!
//! # Example
//!
//! ```
//! use argspec_core::*;
//!
//! // Build a schema for a fictional CLI
//! let schema = OptionSchema::new()
//!     .for_command("mytool")
//!     .with_option(
//!         OptionSpec::flag(Some("-v"), Some("--verbose"))
//!             .with_description("Enable verbose output"),
//!     )
//!     .with_option(OptionSpec::with_value(Some("-o"), Some("--output")).required())
//!     .with_group(OptionGroup::new().with_member("-v").with_member("--output"));
//!
//! assert!(schema.find("--verbose").is_some());
//! assert!(schema.find_short("-o").is_some());
//! assert!(validate_schema(&schema).is_empty());
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{SchemaError, validate_schema};
