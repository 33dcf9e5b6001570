//! Error types for argument parsing.
//!
//! Provides a unified error type covering every failure mode of a parse:
//! unknown and ambiguous tokens, missing values, group conflicts, unmet
//! required options, and defaults naming undeclared options.

use thiserror::Error;

/// Errors that can occur while parsing an argument vector.
///
/// Every variant is terminal for the parse that raised it: no partial result
/// is returned, and the caller must re-invoke with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A dash-prefixed token matched nothing in the schema. Carries the
    /// offending token verbatim.
    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// An abbreviated long option matched more than one declared option.
    #[error("Ambiguous option: '{token}' (could be: {})", .candidates.join(", "))]
    AmbiguousOption {
        token: String,
        candidates: Vec<String>,
    },

    /// A value-taking option ran out of tokens before receiving its value.
    #[error("Missing argument for option: {0}")]
    MissingArgument(String),

    /// A required option was never matched.
    #[error("Missing required option: {0}")]
    MissingRequiredOption(String),

    /// A required group had no member selected.
    #[error("Missing required option: one of {0}")]
    MissingRequiredGroup(String),

    /// A second member of a mutually exclusive group was matched.
    #[error("Option {option} conflicts with {selected} from the same mutually exclusive group")]
    AlreadySelected { option: String, selected: String },

    /// A defaults entry named an option the schema never declared.
    #[error("Default supplied for undeclared option: {0}")]
    UndefinedDefault(String),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
