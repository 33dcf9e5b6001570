//! Default values applied after scanning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default values for options absent from the argument vector.
///
/// A strictly typed, ordered map from option name (short or long form, with
/// or without dashes) to a default string value; ordering makes application
/// deterministic. For a value-taking option the string becomes its value;
/// for a boolean option the string must be truthy (`true`/`yes`/`1`,
/// case-insensitive) to mark the option present. Every key must name a
/// declared option or the parse fails.
///
/// # Examples
///
/// ```
/// use argspec_parser::Defaults;
///
/// let mut defaults = Defaults::new();
/// defaults.set("--output", "out.txt");
/// defaults.set("verbose", "true");
///
/// assert_eq!(defaults.get("--output"), Some("out.txt"));
/// assert_eq!(defaults.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Defaults {
    values: BTreeMap<String, String>,
}

impl Defaults {
    /// Creates an empty defaults map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default value for an option name.
    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Returns the default value for an option name, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no defaults are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
