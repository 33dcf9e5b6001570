use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use argspec_core::{OptionSchema, validate_schema};
use argspec_parser::{ArgParser, Defaults};

mod render;

use render::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "argspec")]
#[command(about = "Schema-driven command-line option parsing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an argument vector against a schema file.
    Parse(ParseArgs),
    /// Validate one or more schema files.
    Validate(ValidateArgs),
    /// Print a summary of a schema file.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
    /// Defaults file mapping option names to default values (JSON or YAML).
    #[arg(long)]
    defaults: Option<PathBuf>,
    /// Halt option scanning at the first positional or unknown token.
    #[arg(long)]
    stop_at_first_positional: bool,
    /// Allow unambiguous abbreviations of long options.
    #[arg(long)]
    partial_matching: bool,
    /// Strip one pair of surrounding double quotes from option values.
    #[arg(long)]
    strip_quotes: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Argument vector to parse (use `--` before dash-prefixed tokens).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema files to validate.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Validate(args) => run_validate(args),
        Command::Show(args) => run_show(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let schema: OptionSchema = load_file(&args.schema)?;

    let violations = validate_schema(&schema);
    if !violations.is_empty() {
        let rendered: Vec<String> = violations.iter().map(ToString::to_string).collect();
        return Err(format!(
            "Invalid schema '{}': {}",
            args.schema.display(),
            rendered.join("; ")
        ));
    }

    let parser = ArgParser::builder()
        .allow_partial_matching(args.partial_matching)
        .strip_quotes(args.strip_quotes)
        .stop_at_first_positional(args.stop_at_first_positional)
        .build();

    let matches = match args.defaults {
        Some(ref path) => {
            let defaults: Defaults = load_file(path)?;
            parser.parse_with_defaults(&schema, args.args, &defaults)
        }
        None => parser.parse(&schema, args.args),
    }
    .map_err(|e| e.to_string())?;

    let output = render::format_matches(&matches, args.format)?;
    match args.format {
        OutputFormat::Table => print!("{output}"),
        _ => println!("{output}"),
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut invalid = 0usize;

    for path in &args.files {
        let schema: OptionSchema = load_file(path)?;
        let violations = validate_schema(&schema);
        if violations.is_empty() {
            println!(
                "{}: ok ({} option(s), {} group(s))",
                path.display(),
                schema.options.len(),
                schema.groups.len()
            );
        } else {
            invalid += 1;
            println!("{}: {} violation(s)", path.display(), violations.len());
            for violation in &violations {
                println!("  {violation}");
            }
        }
    }

    if invalid > 0 {
        return Err(format!(
            "{invalid} of {} schema file(s) failed validation",
            args.files.len()
        ));
    }
    println!("Validated {} schema file(s).", args.files.len());
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), String> {
    let schema: OptionSchema = load_file(&args.schema)?;
    let output = render::format_schema(&schema, args.format)?;
    match args.format {
        OutputFormat::Table => print!("{output}"),
        _ => println!("{output}"),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Loads a JSON or YAML file, chosen by extension, into any Deserialize type.
fn load_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
    if is_yaml_path(path) {
        serde_yaml::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
    } else {
        serde_json::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
    }
}

fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yaml_path_matches_extensions() {
        assert!(is_yaml_path(Path::new("schema.yaml")));
        assert!(is_yaml_path(Path::new("schema.yml")));
        assert!(!is_yaml_path(Path::new("schema.json")));
        assert!(!is_yaml_path(Path::new("schema")));
    }

    #[test]
    fn test_cli_captures_hyphen_tokens_after_escape() {
        let cli = Cli::try_parse_from([
            "argspec", "parse", "--schema", "s.json", "--", "-v", "--file", "x",
        ])
        .expect("cli should parse");

        let Command::Parse(args) = cli.command else {
            panic!("expected parse subcommand");
        };
        assert_eq!(args.args, vec!["-v", "--file", "x"]);
        assert!(!args.stop_at_first_positional);
    }
}
