//! Argument-vector scanner.
//!
//! This module implements the parse itself: a single left-to-right pass over
//! the token vector resolving long options, short options, and concatenated
//! short bundles against an [`OptionSchema`], followed by defaults
//! application and the required-option check.
//!
//! # Architecture
//!
//! [`ArgParser`] holds per-parser settings and stays reusable across calls;
//! each call builds a private `Scan` with the in-flight state: the option
//! still awaiting its value, group selections, matched entries, and the halt
//! flag raised by `--`. The first fatal condition aborts the whole parse, so
//! callers never see a partially filled result.

use std::collections::HashMap;

use tracing::{debug, warn};

use argspec_core::{OptionSchema, OptionSpec};

use crate::Defaults;
use crate::error::{ParseError, Result};
use crate::matches::{MatchedOption, OptionMatches};
use crate::tokens;

/// Schema-driven parser for argument vectors.
///
/// Stateless across calls: all per-call state lives inside the parse.
/// Configure behavior through [`ArgParser::builder`]; the default parser
/// matches long options exactly, takes values verbatim, and scans the whole
/// vector.
///
/// # Examples
///
/// ```
/// use argspec_core::{OptionSchema, OptionSpec};
/// use argspec_parser::ArgParser;
///
/// let schema = OptionSchema::new()
///     .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")))
///     .with_option(OptionSpec::with_value(Some("-o"), Some("--output")));
///
/// let parser = ArgParser::new();
/// let matches = parser
///     .parse(&schema, ["-v", "--output", "out.txt", "input.txt"])
///     .unwrap();
/// assert!(matches.has("verbose"));
/// assert_eq!(matches.value_of("output"), Some("out.txt"));
/// assert_eq!(matches.leftovers(), &["input.txt"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    allow_partial_matching: bool,
    strip_quotes: bool,
    stop_at_first_positional: bool,
}

/// Builder for [`ArgParser`] settings.
///
/// # Examples
///
/// ```
/// use argspec_parser::ArgParser;
///
/// let parser = ArgParser::builder()
///     .allow_partial_matching(true)
///     .stop_at_first_positional(true)
///     .build();
/// let _ = parser;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgParserBuilder {
    parser: ArgParser,
}

impl ArgParserBuilder {
    /// Allows unambiguous abbreviations of long options (`--verb` for
    /// `--verbose`). An abbreviation matching several options is an error.
    pub fn allow_partial_matching(mut self, allow: bool) -> Self {
        self.parser.allow_partial_matching = allow;
        self
    }

    /// Strips one pair of surrounding double quotes from option values.
    pub fn strip_quotes(mut self, strip: bool) -> Self {
        self.parser.strip_quotes = strip;
        self
    }

    /// Halts option scanning at the first positional or unrecognized token,
    /// copying it and everything after it verbatim into leftovers.
    pub fn stop_at_first_positional(mut self, stop: bool) -> Self {
        self.parser.stop_at_first_positional = stop;
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> ArgParser {
        self.parser
    }
}

impl ArgParser {
    /// Creates a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts configuring a parser.
    pub fn builder() -> ArgParserBuilder {
        ArgParserBuilder::default()
    }

    /// Parses an argument vector against a schema.
    ///
    /// Tokens are scanned left to right:
    ///
    /// - `--` ends option scanning; every later token is a leftover verbatim.
    /// - A lone `-` is always a leftover (conventional stdin marker).
    /// - `--name` matches a long option; `--name=value` attaches its value.
    /// - `-x` matches a short option; `-x=value` attaches its value.
    /// - A multi-character short token is a concatenated bundle: `-vf out`
    ///   expands to `-v` plus `-f out`, and `-fout` gives `-f` the value
    ///   `out`.
    /// - A value-taking option consumes the next token unless that token is
    ///   itself a recognized option (negative numbers always pass).
    /// - A dash-prefixed token matching nothing fails with
    ///   [`ParseError::UnrecognizedOption`]; other tokens become leftovers.
    ///
    /// After scanning, required options and groups are checked in
    /// declaration order and the first unmet one aborts the parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::{OptionSchema, OptionSpec};
    /// use argspec_parser::{ArgParser, ParseError};
    ///
    /// let schema = OptionSchema::new()
    ///     .with_option(OptionSpec::flag(Some("-v"), Some("--verbose")));
    ///
    /// let err = ArgParser::new().parse(&schema, ["-x"]).unwrap_err();
    /// assert_eq!(err, ParseError::UnrecognizedOption("-x".to_string()));
    /// ```
    pub fn parse<I, T>(&self, schema: &OptionSchema, args: I) -> Result<OptionMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.parse_with_defaults(schema, args, &Defaults::new())
    }

    /// Parses an argument vector, then fills in defaults for absent options.
    ///
    /// Defaults are applied before the required check, so a default can
    /// satisfy a required option or select a group member. A defaults key
    /// naming an undeclared option fails with
    /// [`ParseError::UndefinedDefault`]; empty defaults behave exactly like
    /// [`parse`](ArgParser::parse).
    pub fn parse_with_defaults<I, T>(
        &self,
        schema: &OptionSchema,
        args: I,
        defaults: &Defaults,
    ) -> Result<OptionMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut scan = Scan {
            schema,
            settings: self,
            matches: OptionMatches::default(),
            pending: None,
            selected: HashMap::new(),
            halted: false,
        };
        for token in args {
            scan.handle_token(token.into())?;
        }
        scan.finish(defaults)
    }
}

/// In-flight state of a single parse call.
struct Scan<'a> {
    schema: &'a OptionSchema,
    settings: &'a ArgParser,
    matches: OptionMatches,
    /// Option still waiting for the next token to become its value.
    pending: Option<&'a OptionSpec>,
    /// Selected member per group index.
    selected: HashMap<usize, String>,
    /// Raised by `--` or a stop-at-first-positional halt.
    halted: bool,
}

impl<'a> Scan<'a> {
    fn handle_token(&mut self, token: String) -> Result<()> {
        if self.halted {
            self.matches.push_leftover(token);
            return Ok(());
        }
        if token == "--" {
            self.halted = true;
            return Ok(());
        }
        if let Some(spec) = self.pending {
            if self.accepts_as_value(&token) {
                self.pending = None;
                let value = self.clean_value(token);
                self.matches.record(spec).values.push(value);
                return Ok(());
            }
            // The next option arrived before the pending one got its value.
            return Err(ParseError::MissingArgument(
                spec.canonical_name().to_string(),
            ));
        }
        if token.starts_with("--") {
            self.handle_long(token)
        } else if token.starts_with('-') && token != "-" {
            self.handle_short(token)
        } else {
            self.handle_unknown(token)
        }
    }

    /// Resolves a `--name` or `--name=value` token.
    fn handle_long(&mut self, token: String) -> Result<()> {
        let schema = self.schema;
        let (name, attached) = tokens::split_attached(&token);
        let candidates = schema.matching_long(name, self.settings.allow_partial_matching);
        let spec = match candidates.len() {
            0 => return self.handle_unknown(token),
            1 => candidates[0],
            _ => {
                return Err(ParseError::AmbiguousOption {
                    token: name.to_string(),
                    candidates: candidates
                        .iter()
                        .map(|c| c.canonical_name().to_string())
                        .collect(),
                });
            }
        };
        if spec.long.as_deref() != Some(name) {
            debug!(
                token = %name,
                resolved = %spec.canonical_name(),
                "resolved abbreviated long option"
            );
        }
        match attached {
            Some(value) if spec.takes_value => {
                let value = self.clean_value(value.to_string());
                self.register(spec)?.values.push(value);
                Ok(())
            }
            // An attached value on an option that takes none.
            Some(_) => self.handle_unknown(token),
            None => {
                self.register(spec)?;
                if spec.takes_value {
                    self.pending = Some(spec);
                }
                Ok(())
            }
        }
    }

    /// Resolves a single-dash token: `-x`, `-x=value`, or a bundle.
    fn handle_short(&mut self, token: String) -> Result<()> {
        let schema = self.schema;
        let body = &token[1..];
        if let Some((name, value)) = body.split_once('=') {
            if name.chars().count() == 1 {
                if let Some(spec) = schema.find_short(&format!("-{name}"))
                    && spec.takes_value
                {
                    let value = self.clean_value(value.to_string());
                    self.register(spec)?.values.push(value);
                    return Ok(());
                }
            }
            return self.handle_unknown(token);
        }
        if body.chars().count() == 1 {
            return match schema.find_short(&token) {
                Some(spec) => {
                    self.register(spec)?;
                    if spec.takes_value {
                        self.pending = Some(spec);
                    }
                    Ok(())
                }
                None => self.handle_unknown(token),
            };
        }
        self.handle_bundle(token)
    }

    /// Expands a concatenated short bundle (`-abc`, `-vf out`, `-fout`).
    fn handle_bundle(&mut self, token: String) -> Result<()> {
        let schema = self.schema;
        let chars: Vec<char> = token.chars().collect();
        let mut i = 1;
        while i < chars.len() {
            let name = format!("-{}", chars[i]);
            let Some(spec) = schema.find_short(&name) else {
                // Once a constituent has matched, a halting parse keeps only
                // the unconsumed remainder as the leftover.
                let unknown = if self.settings.stop_at_first_positional && i > 1 {
                    chars[i..].iter().collect()
                } else {
                    token.clone()
                };
                return self.handle_unknown(unknown);
            };
            if spec.takes_value {
                if i + 1 < chars.len() {
                    let attached: String = chars[i + 1..].iter().collect();
                    let value = self.clean_value(attached);
                    self.register(spec)?.values.push(value);
                } else {
                    self.register(spec)?;
                    self.pending = Some(spec);
                }
                return Ok(());
            }
            self.register(spec)?;
            i += 1;
        }
        Ok(())
    }

    /// Handles a token the schema does not recognize.
    fn handle_unknown(&mut self, token: String) -> Result<()> {
        if token.starts_with('-') && token.len() > 1 && !self.settings.stop_at_first_positional {
            return Err(ParseError::UnrecognizedOption(token));
        }
        if self.settings.stop_at_first_positional {
            self.halted = true;
        }
        self.matches.push_leftover(token);
        Ok(())
    }

    /// Records a match, enforcing mutual exclusion within groups.
    fn register(&mut self, spec: &'a OptionSpec) -> Result<&mut MatchedOption> {
        if spec.deprecated {
            warn!(option = %spec.canonical_name(), "deprecated option supplied");
        }
        if let Some(index) = self.schema.group_index_of(spec) {
            let name = spec.canonical_name().to_string();
            if let Some(previous) = self.selected.get(&index) {
                if *previous != name {
                    return Err(ParseError::AlreadySelected {
                        option: name,
                        selected: previous.clone(),
                    });
                }
            } else {
                self.selected.insert(index, name);
            }
        }
        Ok(self.matches.record(spec))
    }

    /// A pending option takes the next token as its value unless that token
    /// is itself a recognized option; negative numbers always pass.
    fn accepts_as_value(&self, token: &str) -> bool {
        !self.is_option_token(token) || tokens::is_negative_number(token)
    }

    fn is_option_token(&self, token: &str) -> bool {
        if !token.starts_with('-') || token.len() == 1 {
            return false;
        }
        if token.starts_with("--") {
            let (name, _) = tokens::split_attached(token);
            return !self
                .schema
                .matching_long(name, self.settings.allow_partial_matching)
                .is_empty();
        }
        let (name, _) = tokens::split_attached(&token[1..]);
        match name.chars().next() {
            Some(first) => self.schema.find_short(&format!("-{first}")).is_some(),
            None => false,
        }
    }

    fn clean_value(&self, value: String) -> String {
        if self.settings.strip_quotes {
            tokens::strip_surrounding_quotes(&value).to_string()
        } else {
            value
        }
    }

    fn finish(mut self, defaults: &Defaults) -> Result<OptionMatches> {
        if let Some(spec) = self.pending {
            return Err(ParseError::MissingArgument(
                spec.canonical_name().to_string(),
            ));
        }
        self.apply_defaults(defaults)?;
        self.check_required()?;
        debug!(
            matched = self.matches.len(),
            leftovers = self.matches.leftovers().len(),
            "parse complete"
        );
        Ok(self.matches)
    }

    /// Applies defaults for options absent from the matched set.
    ///
    /// Runs before the required check, so a default can satisfy a required
    /// option. Entries whose group already has a selection are skipped;
    /// boolean options are only marked present by a truthy value.
    fn apply_defaults(&mut self, defaults: &Defaults) -> Result<()> {
        for (name, value) in defaults.iter() {
            let schema = self.schema;
            let Some(spec) = schema.find(name) else {
                return Err(ParseError::UndefinedDefault(name.to_string()));
            };
            let group_selected = schema
                .group_index_of(spec)
                .is_some_and(|index| self.selected.contains_key(&index));
            if self.matches.has(spec.canonical_name()) || group_selected {
                continue;
            }
            if spec.takes_value {
                self.register(spec)?.values.push(value.to_string());
            } else if tokens::is_truthy(value) {
                self.register(spec)?;
            }
        }
        Ok(())
    }

    /// Verifies required options and groups, in declaration order.
    fn check_required(&self) -> Result<()> {
        for spec in &self.schema.options {
            // Group membership overrides an individual required flag.
            if spec.required
                && self.schema.group_index_of(spec).is_none()
                && !self.matches.has(spec.canonical_name())
            {
                return Err(ParseError::MissingRequiredOption(
                    spec.canonical_name().to_string(),
                ));
            }
        }
        for (index, group) in self.schema.groups.iter().enumerate() {
            if group.required && !self.selected.contains_key(&index) {
                return Err(ParseError::MissingRequiredGroup(group.member_list()));
            }
        }
        Ok(())
    }
}
