//! Validate command implementation

use anyhow::Result;
use clap::Args;
use isizulu_core::RuleTables;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule-table file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule tables: {}", self.rules.display());

        match RuleTables::from_file(&self.rules) {
            Ok(tables) => {
                println!("✓ Rule tables are valid!");
                for line in describe(&tables) {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule tables are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Summary lines for a set of tables
fn describe(tables: &RuleTables) -> Vec<String> {
    let mut lines = vec![
        format!("Language code: {}", tables.code()),
        format!("Language name: {}", tables.name()),
        format!("Noun prefixes: {}", tables.noun_prefixes().len()),
        format!("Basic prefixes: {}", tables.basic_prefixes().len()),
        format!("Common morphemes: {}", tables.common_morphemes().len()),
        format!("Verb extensions: {}", tables.verb_extensions().len()),
        format!("Quantifiers: {}", tables.quantifiers().len()),
        format!("Vocabulary: {}", tables.vocabulary_table().len()),
    ];
    for (collection, pattern) in tables.shadowed() {
        lines.push(format!(
            "Warning: '{pattern}' is declared more than once in {collection}; the last declaration wins"
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            rules: PathBuf::from("rules.toml"),
        };
        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("rules.toml"));
    }

    #[test]
    fn test_validate_valid_rules() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "zu"
name = "isiZulu"

[[noun_prefixes]]
pattern = "aba"
class = 2

[basic_prefixes]
2 = "ba"
"#
        )
        .unwrap();

        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_rules() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[metadata]\ncode = \"zu\"\n").unwrap();

        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed:"));
    }

    #[test]
    fn test_describe_builtin_reports_shadowing() {
        let lines = describe(&RuleTables::builtin());
        assert!(lines.contains(&"Language code: zu".to_string()));
        assert!(lines.contains(&"Noun prefixes: 14".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Warning: 'umu' is declared more than once in noun_prefixes")));
    }
}
