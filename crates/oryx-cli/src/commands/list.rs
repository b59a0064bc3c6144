use std::io::Write;

use oryx_consts::ConstantEntry;

use crate::cli::{ListArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::render_entries;

pub(crate) fn handle_list(
    args: &ListArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    if let Some(collection) = &args.collection
        && !oryx_consts::collections().contains(&collection.as_str())
    {
        return Err(CliError::validation(format!(
            "unknown collection '{collection}'"
        )));
    }
    let entries = select(args);
    tracing::debug!(matched = entries.len(), "listing constants");
    render_entries(&entries, format, out)
}

fn select(args: &ListArgs) -> Vec<&'static ConstantEntry> {
    oryx_consts::entries()
        .iter()
        .filter(|entry| {
            args.collection
                .as_deref()
                .is_none_or(|collection| entry.collection == collection)
        })
        .filter(|entry| {
            args.category
                .as_deref()
                .is_none_or(|category| entry.category == category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use serde_json::Value;

    fn list_args(collection: Option<&str>, category: Option<&str>) -> ListArgs {
        ListArgs {
            collection: collection.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn unfiltered_list_covers_registry() {
        assert_eq!(select(&list_args(None, None)).len(), oryx_consts::entries().len());
    }

    #[test]
    fn category_filter_keeps_declaration_order() -> Result<()> {
        let mut out = Vec::new();
        handle_list(&list_args(Some("extVarNames"), Some("Fpm")), OutputFormat::Json, &mut out)
            .map_err(|err| anyhow!(err.display_message()))?;
        let json: Vec<Value> = serde_json::from_slice(&out)?;
        assert_eq!(json.len(), 9);
        assert_eq!(json[0]["name"], "FpmConfigurationFile");
        assert!(json.iter().all(|entry| entry["category"] == "Fpm"));
        Ok(())
    }

    #[test]
    fn unknown_category_lists_nothing() {
        assert!(select(&list_args(None, Some("Nope"))).is_empty());
    }

    #[test]
    fn unknown_collection_is_rejected() -> Result<()> {
        let mut out = Vec::new();
        let err = handle_list(&list_args(Some("missing"), None), OutputFormat::Table, &mut out)
            .err()
            .ok_or_else(|| anyhow!("unknown collection should fail"))?;
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "unknown collection 'missing'");
        Ok(())
    }
}
