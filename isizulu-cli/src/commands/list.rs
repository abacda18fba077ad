//! List command implementation

use anyhow::Result;
use isizulu_core::tables::loader;
use isizulu_core::RuleTables;
use isizulu_engine::FileKind;

use super::ListCommands;
use crate::output::OutputFormat;

pub fn execute(subcommand: ListCommands) -> Result<()> {
    let lines = match subcommand {
        ListCommands::Formats => formats(),
        ListCommands::Tables { toml: true } => {
            print!("{}", loader::builtin_source());
            return Ok(());
        }
        ListCommands::Tables { toml: false } => tables(),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn formats() -> Vec<String> {
    let mut lines = vec!["Output formats:".to_string()];
    for format in OutputFormat::ALL {
        lines.push(format!("  {:<10} {}", format.as_str(), format.description()));
    }

    lines.push(String::new());
    lines.push("Input file types:".to_string());
    for kind in FileKind::ALL {
        let status = if kind.is_available() {
            ""
        } else {
            " (not enabled in this build)"
        };
        lines.push(format!(
            "  {:<10} .{}{status}",
            kind.label(),
            kind.extensions().join(", .")
        ));
    }
    lines
}

/// Built-in tables, each collection in the order patterns are tried
fn tables() -> Vec<String> {
    let tables = RuleTables::builtin();
    let mut lines = vec![format!("{} ({})", tables.name(), tables.code())];

    lines.push("noun_prefixes:".to_string());
    for prefix in tables.noun_prefixes().iter() {
        lines.push(format!("  {:<8} {}", prefix.pattern, prefix.tag));
    }

    lines.push("basic_prefixes:".to_string());
    for (class, prefix) in tables.basic_prefixes().iter() {
        lines.push(format!("  {:<8} {}", prefix, class.basic_prefix_tag()));
    }

    let collections = [
        ("common_morphemes", tables.common_morphemes()),
        ("verb_extensions", tables.verb_extensions()),
        ("quantifiers", tables.quantifiers()),
        ("vocabulary", tables.vocabulary_table()),
    ];
    for (name, table) in collections {
        lines.push(format!("{name}:"));
        for entry in table.iter() {
            lines.push(format!("  {:<8} {}", entry.pattern, entry.tag));
        }
    }
    lines
}
