//! Output renderers for CLI commands.

use std::io::Write;

use anyhow::anyhow;
use oryx_consts::ConstantEntry;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::validate::ValidationSummary;
use crate::error::{CliError, CliResult};

pub(crate) fn render_entry(
    entry: &ConstantEntry,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(entry, out),
        OutputFormat::Table => write_line(out, entry.value),
    }
}

pub(crate) fn render_entries(
    entries: &[&ConstantEntry],
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(entries, out),
        OutputFormat::Table => {
            let width = entries
                .iter()
                .map(|entry| entry.name.len())
                .max()
                .unwrap_or(0)
                .max("NAME".len());
            write_line(
                out,
                &format!("{:<width$} {:<12} {:<12} VALUE", "NAME", "CATEGORY", "COLLECTION"),
            )?;
            for entry in entries {
                write_line(
                    out,
                    &format!(
                        "{:<width$} {:<12} {:<12} {}",
                        entry.name, entry.category, entry.collection, entry.value
                    ),
                )?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_validation(
    summary: &ValidationSummary,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(summary, out),
        OutputFormat::Table => {
            write_line(out, &format!("source: {}", summary.source))?;
            write_line(out, &format!("digest: sha256:{}", summary.digest))?;
            for collection in &summary.collections {
                write_line(
                    out,
                    &format!(
                        "collection {}: {} constant(s), {} output(s)",
                        collection.name, collection.constants, collection.outputs
                    ),
                )?;
            }
            write_line(out, &format!("total: {} constant(s)", summary.constants))?;
            let compiled = if summary.matches_compiled_registry {
                "compiled registry: up to date"
            } else {
                "compiled registry: differs from source (rebuild oryx-consts)"
            };
            write_line(out, compiled)
        }
    }
}

pub(crate) fn write_line(out: &mut impl Write, line: &str) -> CliResult<()> {
    writeln!(out, "{line}")
        .map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::Value;

    use crate::commands::validate::CollectionSummary;

    fn entry() -> ConstantEntry {
        ConstantEntry {
            name: "FpmMaxChildrenSettingName",
            ident: "FPM_MAX_CHILDREN_SETTING_NAME",
            value: "pm.max_children",
            collection: "extVarNames",
            category: "Fpm",
        }
    }

    fn rendered(render: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> Result<String> {
        let mut buffer = Vec::new();
        render(&mut buffer).map_err(|err| anyhow!(err.display_message()))?;
        Ok(String::from_utf8(buffer)?)
    }

    #[test]
    fn entry_table_prints_bare_value() -> Result<()> {
        let text = rendered(|out| render_entry(&entry(), OutputFormat::Table, out))?;
        assert_eq!(text, "pm.max_children\n");
        Ok(())
    }

    #[test]
    fn entry_json_carries_every_field() -> Result<()> {
        let text = rendered(|out| render_entry(&entry(), OutputFormat::Json, out))?;
        let json: Value = serde_json::from_str(&text)?;
        assert_eq!(json["name"], "FpmMaxChildrenSettingName");
        assert_eq!(json["ident"], "FPM_MAX_CHILDREN_SETTING_NAME");
        assert_eq!(json["value"], "pm.max_children");
        assert_eq!(json["collection"], "extVarNames");
        assert_eq!(json["category"], "Fpm");
        Ok(())
    }

    #[test]
    fn entries_table_aligns_columns() -> Result<()> {
        let first = entry();
        let second = ConstantEntry {
            name: "PhpOrigin",
            ident: "PHP_ORIGIN",
            value: "PHP_ORIGIN",
            collection: "extVarNames",
            category: "Php",
        };
        let text = rendered(|out| render_entries(&[&first, &second], OutputFormat::Table, out))?;
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME "));
        assert!(lines[0].ends_with("VALUE"));
        let value_column = lines[0].find("VALUE").unwrap_or_default();
        assert_eq!(lines[1].find("pm.max_children"), Some(value_column));
        assert_eq!(lines[2].find("PHP_ORIGIN"), Some(value_column));
        Ok(())
    }

    #[test]
    fn validation_table_reports_stale_registry() -> Result<()> {
        let summary = ValidationSummary {
            source: "constants.yaml".to_string(),
            digest: "abc".to_string(),
            constants: 2,
            collections: vec![CollectionSummary {
                name: "extVarNames".to_string(),
                constants: 2,
                outputs: 1,
            }],
            matches_compiled_registry: false,
        };
        let text = rendered(|out| render_validation(&summary, OutputFormat::Table, out))?;
        assert!(text.contains("digest: sha256:abc\n"));
        assert!(text.contains("collection extVarNames: 2 constant(s), 1 output(s)\n"));
        assert!(text.contains("differs from source"));
        Ok(())
    }
}
