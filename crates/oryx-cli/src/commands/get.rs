use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::render_entry;

pub(crate) fn handle_get(name: &str, format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    let entry = oryx_consts::lookup(name).map_err(|err| CliError::validation(err.to_string()))?;
    render_entry(entry, format, out)
}
