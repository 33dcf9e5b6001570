//! Parse results: matched options and leftover positionals.

use serde::Serialize;

use argspec_core::OptionSpec;

/// A single matched option with the values it accumulated.
///
/// Identity is carried as the option's short/long forms so lookups work by
/// either name; repeats of the same option extend `values` in match order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedOption {
    /// Short form of the matched option, if declared
    pub short: Option<String>,
    /// Long form of the matched option, if declared
    pub long: Option<String>,
    /// Values collected across every occurrence, in match order
    pub values: Vec<String>,
}

impl MatchedOption {
    fn for_spec(spec: &OptionSpec) -> Self {
        Self {
            short: spec.short.clone(),
            long: spec.long.clone(),
            values: Vec::new(),
        }
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }

    /// Checks if this match answers to a name, with or without leading dashes.
    pub fn answers_to(&self, name: &str) -> bool {
        let bare = name.trim_start_matches('-');
        if bare.is_empty() {
            return false;
        }
        self.short.as_deref().map(|s| s.trim_start_matches('-')) == Some(bare)
            || self.long.as_deref().map(|l| l.trim_start_matches('-')) == Some(bare)
    }
}

/// Result of parsing an argument vector against a schema.
///
/// Created fresh per parse call and handed out only once complete; the
/// parser never returns a partially filled result. Matched options keep
/// first-match order, leftovers keep argv order.
///
/// # Examples
///
/// ```
/// use argspec_core::{OptionSchema, OptionSpec};
/// use argspec_parser::parse;
///
/// let schema = OptionSchema::new()
///     .with_option(OptionSpec::with_value(Some("-f"), Some("--file")));
///
/// let matches = parse(&schema, ["-f", "a.txt", "--file", "b.txt", "run"]).unwrap();
/// assert!(matches.has("file"));
/// assert_eq!(matches.value_of("-f"), Some("a.txt"));
/// assert_eq!(matches.values_of("--file"), &["a.txt", "b.txt"]);
/// assert_eq!(matches.leftovers(), &["run"]);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptionMatches {
    entries: Vec<MatchedOption>,
    leftovers: Vec<String>,
}

impl OptionMatches {
    /// Checks whether an option was matched, by short or long name.
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.answers_to(name))
    }

    /// Returns the first value recorded for an option.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.entry(name)
            .and_then(|e| e.values.first())
            .map(String::as_str)
    }

    /// Returns every value recorded for an option, in match order.
    pub fn values_of(&self, name: &str) -> &[String] {
        self.entry(name).map(|e| e.values.as_slice()).unwrap_or(&[])
    }

    /// Returns the matched entry for a name, if any.
    pub fn entry(&self, name: &str) -> Option<&MatchedOption> {
        self.entries.iter().find(|e| e.answers_to(name))
    }

    /// All matched entries, in first-match order.
    pub fn entries(&self) -> &[MatchedOption] {
        &self.entries
    }

    /// Canonical names of every matched option, in first-match order.
    pub fn matched_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.canonical_name()).collect()
    }

    /// Positional arguments left over after option scanning, in argv order.
    pub fn leftovers(&self) -> &[String] {
        &self.leftovers
    }

    /// Number of distinct matched options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no option was matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds or inserts the entry for an option.
    pub(crate) fn record(&mut self, spec: &OptionSpec) -> &mut MatchedOption {
        if let Some(index) = self
            .entries
            .iter()
            .position(|e| e.answers_to(spec.canonical_name()))
        {
            return &mut self.entries[index];
        }
        self.entries.push(MatchedOption::for_spec(spec));
        self.entries.last_mut().expect("entry just pushed")
    }

    pub(crate) fn push_leftover(&mut self, token: String) {
        self.leftovers.push(token);
    }
}
