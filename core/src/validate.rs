//! Schema validation.
//!
//! Validates structural invariants of option schemas before parsing begins,
//! catching errors such as nameless options, malformed short/long forms,
//! duplicate names, and groups referencing undeclared options.
//!
//! # Examples
//!
//! ```
//! use argspec_core::*;
//!
//! let schema = OptionSchema::new()
//!     .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")));
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: short form missing its leading dash
//! let bad = OptionSchema::new()
//!     .with_option(OptionSpec::flag(Some("v"), Some("--verbose")));
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{OptionSchema, OptionSpec};

/// Schema validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An option has neither a short nor a long form.
    #[error("option must define a short or long name")]
    MissingOptionName,
    /// Short form is not a dash plus a single character (e.g., `"v"` or `"-vv"`).
    #[error("invalid short option format: {0}")]
    InvalidShortName(String),
    /// Long form does not start with `--` or is too short.
    #[error("invalid long option format: {0}")]
    InvalidLongName(String),
    /// Two options in the schema share a name.
    #[error("duplicate option name in schema: {0}")]
    DuplicateName(String),
    /// A group member does not resolve to any declared option.
    #[error("group member is not a declared option: {0}")]
    UnknownGroupMember(String),
    /// A group has no members.
    #[error("group has no members")]
    EmptyGroup,
}

/// Validates an option schema.
///
/// Checks every declared option for a usable name and format, rejects
/// duplicate names, and checks that every group member resolves to a
/// declared option. Returns on the first violation found.
///
/// # Examples
///
/// ```
/// use argspec_core::*;
///
/// let schema = OptionSchema::new()
///     .with_option(OptionSpec::flag(Some("-a"), None))
///     .with_option(OptionSpec::flag(Some("-b"), None))
///     .with_group(OptionGroup::new().with_member("-a").with_member("-b"));
/// assert!(validate_schema(&schema).is_empty());
///
/// // Group referencing an option that was never declared
/// let bad = OptionSchema::new()
///     .with_option(OptionSpec::flag(Some("-a"), None))
///     .with_group(OptionGroup::new().with_member("-a").with_member("--missing"));
/// let errors = validate_schema(&bad);
/// assert!(errors.iter().any(|e| matches!(e, SchemaError::UnknownGroupMember(_))));
/// ```
pub fn validate_schema(schema: &OptionSchema) -> Vec<SchemaError> {
    let mut errors = validate_options(&schema.options);
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_groups(schema));
    errors
}

fn validate_options(options: &[OptionSpec]) -> Vec<SchemaError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for option in options {
        if option.short.is_none() && option.long.is_none() {
            errors.push(SchemaError::MissingOptionName);
            return errors;
        }

        if let Some(short) = &option.short {
            if !short.starts_with('-') || short.starts_with("--") || short.chars().count() != 2 {
                errors.push(SchemaError::InvalidShortName(short.clone()));
                return errors;
            }
            if !seen.insert(short.clone()) {
                errors.push(SchemaError::DuplicateName(short.clone()));
                return errors;
            }
        }

        if let Some(long) = &option.long {
            if !long.starts_with("--") || long.len() < 3 {
                errors.push(SchemaError::InvalidLongName(long.clone()));
                return errors;
            }
            if !seen.insert(long.clone()) {
                errors.push(SchemaError::DuplicateName(long.clone()));
                return errors;
            }
        }
    }

    errors
}

fn validate_groups(schema: &OptionSchema) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    for group in &schema.groups {
        if group.members.is_empty() {
            errors.push(SchemaError::EmptyGroup);
            return errors;
        }

        for member in &group.members {
            if !schema.options.iter().any(|o| o.matches(member)) {
                errors.push(SchemaError::UnknownGroupMember(member.clone()));
                return errors;
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::OptionGroup;

    use super::*;

    #[test]
    fn test_validate_schema_rejects_nameless_option() {
        let schema = OptionSchema::new().with_option(OptionSpec::flag(None, None));

        let errors = validate_schema(&schema);
        assert_eq!(errors, vec![SchemaError::MissingOptionName]);
    }

    #[test]
    fn test_validate_schema_rejects_bad_short_name() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(Some("v"), Some("--verbose")));

        let errors = validate_schema(&schema);
        assert_eq!(errors, vec![SchemaError::InvalidShortName("v".to_string())]);
    }

    #[test]
    fn test_validate_schema_rejects_multi_character_short_name() {
        let schema = OptionSchema::new().with_option(OptionSpec::flag(Some("-vv"), None));

        let errors = validate_schema(&schema);
        assert_eq!(
            errors,
            vec![SchemaError::InvalidShortName("-vv".to_string())]
        );
    }

    #[test]
    fn test_validate_schema_rejects_duplicate_names() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")))
            .with_option(OptionSpec::flag(Some("-v"), None));

        let errors = validate_schema(&schema);
        assert_eq!(errors, vec![SchemaError::DuplicateName("-v".to_string())]);
    }

    #[test]
    fn test_validate_schema_rejects_empty_group() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(Some("-v"), None))
            .with_group(OptionGroup::new());

        let errors = validate_schema(&schema);
        assert_eq!(errors, vec![SchemaError::EmptyGroup]);
    }

    #[test]
    fn test_validate_schema_rejects_unknown_group_member() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(Some("-v"), None))
            .with_group(OptionGroup::new().with_member("-v").with_member("--quiet"));

        let errors = validate_schema(&schema);
        assert_eq!(
            errors,
            vec![SchemaError::UnknownGroupMember("--quiet".to_string())]
        );
    }

    #[test]
    fn test_validate_schema_accepts_valid_schema() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")))
            .with_option(OptionSpec::with_value(Some("-o"), Some("--output")))
            .with_group(OptionGroup::new().with_member("-v").with_member("-o"));

        let errors = validate_schema(&schema);
        assert!(errors.is_empty());
    }
}
