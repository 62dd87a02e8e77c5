//! Clean command - offline cleaning of a JSON records file.

use std::path::PathBuf;

use burnish::{Cleaner, Table};
use colored::Colorize;
use serde_json::{Map, Value};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let content = std::fs::read_to_string(&file)?;
    let objects: Vec<Map<String, Value>> = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not a JSON array of records: {}", file.display(), e))?;

    if !json {
        println!(
            "{} {} ({} records)",
            "Cleaning".cyan().bold(),
            file.display().to_string().white(),
            objects.len()
        );
    }

    let table = Table::from_json(&objects)?;
    let report = Cleaner::new().clean(&table, None)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if verbose {
            for suggestion in &report.suggestions {
                println!(
                    "  {} {}: {} ({} rows)",
                    suggestion.kind.label().yellow(),
                    suggestion.column.white().bold(),
                    suggestion.change,
                    suggestion.affected_rows
                );
            }
            if !report.suggestions.is_empty() {
                println!();
            }
        }

        println!(
            "Fixed {} issues, {} -> {} records",
            report.errors_found.to_string().white().bold(),
            report.original_count,
            report.cleaned_count.to_string().white().bold()
        );

        if report.suggestions.is_empty() {
            println!("{}", "No issues found - data looks clean!".green());
        }
    }

    if let Some(output_path) = output {
        let cleaned = serde_json::to_string_pretty(&report.cleaned_data)?;
        std::fs::write(&output_path, cleaned)?;
        if !json {
            println!(
                "{} {}",
                "Saved cleaned data to".green().bold(),
                output_path.display().to_string().white()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_cleans_file_and_writes_output() {
        let input = write_file(r#"[{"size": "10mm"}, {"size": "10mm"}]"#);
        let output = NamedTempFile::new().expect("Failed to create temp file");

        run(
            input.path().to_path_buf(),
            Some(output.path().to_path_buf()),
            false,
            false,
        )
        .expect("clean command failed");

        let cleaned: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
        assert_eq!(cleaned.as_array().unwrap().len(), 1);
        assert_eq!(cleaned[0]["size"], "10 Millimeter");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = run(PathBuf::from("/nonexistent/products.json"), None, false, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_array_input_is_an_error() {
        let input = write_file(r#"{"size": "10mm"}"#);
        let result = run(input.path().to_path_buf(), None, false, false);
        assert!(result.is_err());
    }
}
