//! Schema type definitions for declarative option parsing.
//!
//! This module defines the data model a parse runs against: options, their
//! mutually exclusive groups, and the schema that collects them. The types
//! are designed for serialization with [`serde`] and round-trip through JSON
//! and YAML schema files.

use serde::{Deserialize, Serialize};

/// Version of the schema file contract (semver).
///
/// Embedded in serialized [`OptionSchema`] files so readers can detect
/// layouts written by an incompatible release.
pub const SCHEMA_CONTRACT_VERSION: &str = "1.0.0";

/// Declaration of a single command-line option.
///
/// An option has an optional short form (e.g., `-v`) and/or long form
/// (e.g., `--verbose`), stored in token form with their dashes. Every option
/// must carry at least one of the two; short forms are a dash plus a single
/// character, long forms start with two dashes.
///
/// Use the constructor methods [`flag`](OptionSpec::flag) and
/// [`with_value`](OptionSpec::with_value) to create options, then chain
/// builder methods like [`required`](OptionSpec::required).
///
/// # Examples
///
/// ```
/// use argspec_core::OptionSpec;
///
/// // Boolean flag
/// let verbose = OptionSpec::flag(Some("-v"), Some("--verbose"))
///     .with_description("Enable verbose output");
/// assert_eq!(verbose.canonical_name(), "--verbose");
/// assert!(!verbose.takes_value);
///
/// // Option that consumes one value per occurrence
/// let output = OptionSpec::with_value(Some("-o"), Some("--output")).required();
/// assert!(output.takes_value);
/// assert!(output.required);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Short form (e.g., "-v")
    pub short: Option<String>,
    /// Long form (e.g., "--verbose")
    pub long: Option<String>,
    /// Whether this option consumes a value
    #[serde(default)]
    pub takes_value: bool,
    /// Whether a parse must match this option
    #[serde(default)]
    pub required: bool,
    /// Matching a deprecated option still succeeds but emits a warning
    #[serde(default)]
    pub deprecated: bool,
    /// Description shown in schema summaries
    pub description: Option<String>,
}

impl OptionSpec {
    /// Creates a boolean option (no value).
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag(Some("-v"), Some("--verbose"));
    /// assert!(!flag.takes_value);
    /// assert!(flag.matches("-v"));
    /// assert!(flag.matches("--verbose"));
    /// ```
    pub fn flag(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            short: short.map(String::from),
            long: long.map(String::from),
            takes_value: false,
            required: false,
            deprecated: false,
            description: None,
        }
    }

    /// Creates an option that consumes one value per occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::OptionSpec;
    ///
    /// let opt = OptionSpec::with_value(Some("-f"), Some("--file"));
    /// assert!(opt.takes_value);
    /// ```
    pub fn with_value(short: Option<&str>, long: Option<&str>) -> Self {
        Self {
            short: short.map(String::from),
            long: long.map(String::from),
            takes_value: true,
            required: false,
            deprecated: false,
            description: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the option as deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag(Some("-v"), Some("--verbose"));
    /// assert_eq!(flag.canonical_name(), "--verbose");
    ///
    /// let short_only = OptionSpec::flag(Some("-v"), None);
    /// assert_eq!(short_only.canonical_name(), "-v");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }

    /// Checks if this option matches a given token exactly (short or long form).
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag(Some("-v"), Some("--verbose"));
    /// assert!(flag.matches("-v"));
    /// assert!(flag.matches("--verbose"));
    /// assert!(!flag.matches("verbose"));
    /// ```
    pub fn matches(&self, s: &str) -> bool {
        self.short.as_deref() == Some(s) || self.long.as_deref() == Some(s)
    }

    /// Checks if this option answers to a name, with or without leading dashes.
    ///
    /// Lookup helper for result queries and defaults maps: `"v"`, `"-v"`,
    /// `"verbose"`, and `"--verbose"` all address the same option.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag(Some("-v"), Some("--verbose"));
    /// assert!(flag.answers_to("v"));
    /// assert!(flag.answers_to("--verbose"));
    /// assert!(!flag.answers_to("-x"));
    /// ```
    pub fn answers_to(&self, name: &str) -> bool {
        let bare = name.trim_start_matches('-');
        if bare.is_empty() {
            return false;
        }
        self.short.as_deref().map(|s| s.trim_start_matches('-')) == Some(bare)
            || self.long.as_deref().map(|l| l.trim_start_matches('-')) == Some(bare)
    }
}

/// A set of mutually exclusive options.
///
/// At most one member may be selected per parse; matching a second member is
/// a parse error. A group is not inherently required — mark it with
/// [`required`](OptionGroup::required) to demand that some member be present.
/// Members are referenced by short or long form and must resolve to options
/// declared on the same schema (see [`validate_schema`](crate::validate_schema)).
///
/// # Examples
///
/// ```
/// use argspec_core::OptionGroup;
///
/// let format = OptionGroup::new()
///     .with_member("--json")
///     .with_member("--yaml")
///     .required();
/// assert!(format.required);
/// assert_eq!(format.member_list(), "--json, --yaml");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Member options, by short or long form
    pub members: Vec<String>,
    /// Whether some member must be selected
    #[serde(default)]
    pub required: bool,
}

impl OptionGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member by short or long form.
    pub fn with_member(mut self, name: &str) -> Self {
        self.members.push(name.to_string());
        self
    }

    /// Marks the group as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Checks if the given option is a member of this group.
    pub fn contains(&self, spec: &OptionSpec) -> bool {
        self.members.iter().any(|m| spec.matches(m))
    }

    /// Renders the member names as a comma-separated list.
    pub fn member_list(&self) -> String {
        self.members.join(", ")
    }
}

/// Complete option schema for a parse.
///
/// This is the primary type in the crate: the collection of [`OptionSpec`]s
/// and [`OptionGroup`]s a parse runs against, plus optional metadata for
/// serialized schema files. Build it with the `with_*` methods before
/// parsing begins; the parser only ever borrows it, so a built schema is
/// never mutated by a parse.
///
/// # Examples
///
/// ```
/// use argspec_core::*;
///
/// let schema = OptionSchema::new()
///     .for_command("mytool")
///     .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")))
///     .with_option(OptionSpec::with_value(Some("-o"), Some("--output")));
///
/// assert!(schema.find("--verbose").is_some());
/// assert!(schema.find("output").is_some());
/// assert!(schema.find("-x").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Schema contract version (populated from [`SCHEMA_CONTRACT_VERSION`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Command this schema describes (e.g., "mytool")
    pub command: Option<String>,
    /// Short description of the command
    pub description: Option<String>,
    /// Declared options
    #[serde(default)]
    pub options: Vec<OptionSpec>,
    /// Mutually exclusive groups over the declared options
    #[serde(default)]
    pub groups: Vec<OptionGroup>,
}

impl OptionSchema {
    /// Creates an empty schema.
    ///
    /// The `schema_version` is automatically set from
    /// [`SCHEMA_CONTRACT_VERSION`].
    pub fn new() -> Self {
        Self {
            schema_version: Some(SCHEMA_CONTRACT_VERSION.to_string()),
            ..Self::default()
        }
    }

    /// Sets the command name.
    pub fn for_command(mut self, command: &str) -> Self {
        self.command = Some(command.to_string());
        self
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Adds a group.
    pub fn with_group(mut self, group: OptionGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Finds an option by name, with or without leading dashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::{OptionSchema, OptionSpec};
    ///
    /// let schema = OptionSchema::new()
    ///     .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")));
    ///
    /// assert!(schema.find("v").is_some());
    /// assert!(schema.find("--verbose").is_some());
    /// assert!(schema.find("--debug").is_none());
    /// ```
    pub fn find(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.answers_to(name))
    }

    /// Finds an option by its exact short form (e.g., `-v`).
    pub fn find_short(&self, token: &str) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|o| o.short.as_deref() == Some(token))
    }

    /// Collects the options whose long form matches a token.
    ///
    /// An exact match always wins outright. With `allow_partial`, a declared
    /// long form that merely starts with the token is a candidate, so
    /// `--verb` can match `--verbose`; callers decide what more than one
    /// candidate means.
    pub fn matching_long(&self, token: &str, allow_partial: bool) -> Vec<&OptionSpec> {
        let exact: Vec<&OptionSpec> = self
            .options
            .iter()
            .filter(|o| o.long.as_deref() == Some(token))
            .collect();
        if !exact.is_empty() || !allow_partial {
            return exact;
        }
        self.options
            .iter()
            .filter(|o| o.long.as_deref().is_some_and(|l| l.starts_with(token)))
            .collect()
    }

    /// Returns the index of the group containing the given option, if any.
    pub fn group_index_of(&self, spec: &OptionSpec) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_spec_creation() {
        let opt = OptionSpec::flag(Some("-v"), Some("--verbose"))
            .with_description("Enable verbose output");

        assert_eq!(opt.short, Some("-v".to_string()));
        assert_eq!(opt.long, Some("--verbose".to_string()));
        assert!(!opt.takes_value);
        assert_eq!(opt.canonical_name(), "--verbose");
    }

    #[test]
    fn test_option_spec_answers_to_ignores_dashes() {
        let opt = OptionSpec::with_value(Some("-o"), Some("--output"));

        assert!(opt.answers_to("o"));
        assert!(opt.answers_to("-o"));
        assert!(opt.answers_to("output"));
        assert!(opt.answers_to("--output"));
        assert!(!opt.answers_to("out"));
        assert!(!opt.answers_to("-"));
    }

    #[test]
    fn test_schema_find_short_is_exact() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")))
            .with_option(OptionSpec::flag(None, Some("--version")));

        assert!(schema.find_short("-v").is_some());
        assert!(schema.find_short("--verbose").is_none());
        assert!(schema.find_short("-x").is_none());
    }

    #[test]
    fn test_matching_long_prefers_exact_over_prefix() {
        let schema = OptionSchema::new()
            .with_option(OptionSpec::flag(None, Some("--verbose")))
            .with_option(OptionSpec::flag(None, Some("--verbosity")));

        let exact = schema.matching_long("--verbose", true);
        assert_eq!(exact.len(), 1);

        let partial = schema.matching_long("--verb", true);
        assert_eq!(partial.len(), 2);

        let strict = schema.matching_long("--verb", false);
        assert!(strict.is_empty());
    }

    #[test]
    fn test_group_membership_resolves_either_form() {
        let verbose = OptionSpec::flag(Some("-v"), Some("--verbose"));
        let quiet = OptionSpec::flag(Some("-q"), Some("--quiet"));
        let schema = OptionSchema::new()
            .with_option(verbose.clone())
            .with_option(quiet.clone())
            .with_group(OptionGroup::new().with_member("-v").with_member("--quiet"));

        assert_eq!(schema.group_index_of(&verbose), Some(0));
        assert_eq!(schema.group_index_of(&quiet), Some(0));
    }

    #[test]
    fn test_schema_serde_round_trip() {
        let schema = OptionSchema::new()
            .for_command("mytool")
            .with_option(OptionSpec::with_value(Some("-o"), Some("--output")).required())
            .with_group(OptionGroup::new().with_member("--output"));

        let json = serde_json::to_string(&schema).expect("serialize schema");
        let back: OptionSchema = serde_json::from_str(&json).expect("deserialize schema");

        assert_eq!(back.command, Some("mytool".to_string()));
        assert_eq!(back.options.len(), 1);
        assert!(back.options[0].required);
        assert_eq!(back.groups.len(), 1);
    }
}
