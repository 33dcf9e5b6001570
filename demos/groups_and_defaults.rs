//! Mutually exclusive groups and defaults example.
//!
//! Declares a schema with a required output-format group, then shows group
//! selection, the conflict error, and how a defaults map can select the
//! group and fill in absent values.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argspec-demos --example groups_and_defaults
//! ```

use argspec_core::{OptionGroup, OptionSchema, OptionSpec};
use argspec_parser::{Defaults, parse, parse_with_defaults};

fn main() {
    let schema = OptionSchema::new()
        .for_command("report")
        .with_option(OptionSpec::flag(None, Some("--json")).with_description("JSON output"))
        .with_option(OptionSpec::flag(None, Some("--yaml")).with_description("YAML output"))
        .with_option(OptionSpec::with_value(Some("-o"), Some("--output")))
        .with_group(
            OptionGroup::new()
                .with_member("--json")
                .with_member("--yaml")
                .required(),
        );

    // Selecting one member of the group
    let matches = parse(&schema, ["--json"]).unwrap();
    println!("json selected: {}", matches.has("json"));

    // Selecting a second member of the same group fails
    let err = parse(&schema, ["--json", "--yaml"]).unwrap_err();
    println!("conflict:      {err}");

    // The group is required, so an empty vector fails too
    let err = parse(&schema, Vec::<String>::new()).unwrap_err();
    println!("unselected:    {err}");

    // Defaults can select the group and fill absent values
    let mut defaults = Defaults::new();
    defaults.set("--yaml", "true");
    defaults.set("--output", "report.out");
    let matches = parse_with_defaults(&schema, Vec::<String>::new(), &defaults).unwrap();
    println!(
        "defaulted:     yaml={} output={:?}",
        matches.has("yaml"),
        matches.value_of("output")
    );
}
