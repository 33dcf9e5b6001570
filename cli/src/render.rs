//! Output formatting for parse results and schema summaries.

use argspec_core::{OptionSchema, OptionSpec};
use argspec_parser::OptionMatches;

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a parse result in the requested output format.
pub fn format_matches(matches: &OptionMatches, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(matches)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(matches).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(matches_to_table(matches)),
    }
}

/// Formats a schema summary in the requested output format.
pub fn format_schema(schema: &OptionSchema, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(schema)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(schema).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(schema_to_table(schema)),
    }
}

fn matches_to_table(matches: &OptionMatches) -> String {
    let mut out = String::new();

    if matches.entries().is_empty() {
        out.push_str("No options matched.\n");
    } else {
        out.push_str("Matched options:\n");
        let max_name = matches
            .entries()
            .iter()
            .map(|e| e.canonical_name().len())
            .max()
            .unwrap_or(4);

        for entry in matches.entries() {
            if entry.values.is_empty() {
                out.push_str(&format!("  {}\n", entry.canonical_name()));
            } else {
                out.push_str(&format!(
                    "  {:<width$}  {}\n",
                    entry.canonical_name(),
                    entry.values.join(", "),
                    width = max_name
                ));
            }
        }
    }

    if !matches.leftovers().is_empty() {
        out.push_str("\nLeftovers:\n");
        for token in matches.leftovers() {
            out.push_str(&format!("  {token}\n"));
        }
    }

    out
}

fn schema_to_table(schema: &OptionSchema) -> String {
    let mut out = String::new();

    if let Some(ref command) = schema.command {
        out.push_str(&format!("Command: {command}\n"));
    }
    if let Some(ref desc) = schema.description {
        out.push_str(&format!("  {desc}\n"));
    }

    if !schema.options.is_empty() {
        out.push_str("\nOptions:\n");
        let max_name = schema
            .options
            .iter()
            .map(|o| option_display_name(o).len())
            .max()
            .unwrap_or(4);

        for option in &schema.options {
            let attrs = option_attributes(option);
            let desc = option.description.as_deref().unwrap_or("");
            out.push_str(&format!(
                "  {:<width$}  {:<24}  {desc}\n",
                option_display_name(option),
                attrs,
                width = max_name
            ));
        }
    }

    if !schema.groups.is_empty() {
        out.push_str("\nGroups (mutually exclusive):\n");
        for group in &schema.groups {
            let marker = if group.required { "  (required)" } else { "" };
            out.push_str(&format!("  one of: {}{marker}\n", group.member_list()));
        }
    }

    out
}

fn option_display_name(option: &OptionSpec) -> String {
    match (&option.short, &option.long) {
        (Some(s), Some(l)) => format!("{s}, {l}"),
        (Some(s), None) => s.clone(),
        (None, Some(l)) => l.clone(),
        (None, None) => "?".to_string(),
    }
}

fn option_attributes(option: &OptionSpec) -> String {
    let mut attrs: Vec<&str> = Vec::new();
    if option.takes_value {
        attrs.push("takes value");
    }
    if option.required {
        attrs.push("required");
    }
    if option.deprecated {
        attrs.push("deprecated");
    }
    attrs.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use argspec_core::OptionGroup;
    use argspec_parser::parse;

    fn sample_schema() -> OptionSchema {
        OptionSchema::new()
            .for_command("demo")
            .with_option(
                OptionSpec::flag(Some("-v"), Some("--verbose")).with_description("More output"),
            )
            .with_option(OptionSpec::with_value(Some("-f"), Some("--file")).required())
            .with_option(OptionSpec::flag(None, Some("--json")))
            .with_option(OptionSpec::flag(None, Some("--yaml")))
            .with_group(OptionGroup::new().with_member("--json").with_member("--yaml"))
    }

    #[test]
    fn test_format_matches_json() {
        let matches = parse(&sample_schema(), ["-v", "-f", "a.txt", "rest"]).unwrap();
        let json = format_matches(&matches, OutputFormat::Json).unwrap();
        assert!(json.contains("\"long\": \"--file\""));
        assert!(json.contains("\"a.txt\""));
        assert!(json.contains("\"rest\""));
    }

    #[test]
    fn test_format_matches_yaml() {
        let matches = parse(&sample_schema(), ["-f", "a.txt"]).unwrap();
        let yaml = format_matches(&matches, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("--file"), "yaml output: {yaml}");
        assert!(yaml.contains("a.txt"), "yaml output: {yaml}");
    }

    #[test]
    fn test_format_matches_table() {
        let matches = parse(&sample_schema(), ["-v", "-f", "a.txt", "rest"]).unwrap();
        let table = format_matches(&matches, OutputFormat::Table).unwrap();
        assert!(table.contains("Matched options:"));
        assert!(table.contains("--verbose"));
        assert!(table.contains("--file"));
        assert!(table.contains("a.txt"));
        assert!(table.contains("Leftovers:"));
        assert!(table.contains("rest"));
    }

    #[test]
    fn test_format_matches_table_omits_empty_leftovers() {
        let matches = parse(&sample_schema(), ["-f", "x"]).unwrap();
        let table = format_matches(&matches, OutputFormat::Table).unwrap();
        assert!(!table.contains("Leftovers:"));
    }

    #[test]
    fn test_format_schema_table() {
        let table = format_schema(&sample_schema(), OutputFormat::Table).unwrap();
        assert!(table.contains("Command: demo"));
        assert!(table.contains("-v, --verbose"));
        assert!(table.contains("More output"));
        assert!(table.contains("takes value, required"));
        assert!(table.contains("one of: --json, --yaml"));
    }

    #[test]
    fn test_format_schema_json_round_trips() {
        let json = format_schema(&sample_schema(), OutputFormat::Json).unwrap();
        let back: OptionSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back.options.len(), 4);
        assert_eq!(back.groups.len(), 1);
    }
}
