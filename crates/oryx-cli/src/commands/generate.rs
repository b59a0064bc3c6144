use std::io::Write;
use std::path::{Path, PathBuf};

use oryx_codegen::{check_outputs, load_source, render_outputs, write_outputs};

use crate::cli::GenerateArgs;
use crate::error::{CliError, CliResult};
use crate::output::write_line;

pub(crate) fn handle_generate(
    source: &Path,
    args: &GenerateArgs,
    out: &mut impl Write,
) -> CliResult<()> {
    let registry = load_source(source).map_err(CliError::from_codegen)?;
    let out_root = args
        .out_root
        .clone()
        .unwrap_or_else(|| source_root(source));
    let files = render_outputs(&registry, &out_root).map_err(CliError::from_codegen)?;
    if files.is_empty() {
        return write_line(out, "no outputs declared");
    }

    if args.check {
        check_outputs(&files).map_err(CliError::from_codegen)?;
        write_line(
            out,
            &format!("{} generated file(s) up to date", files.len()),
        )
    } else {
        let written = write_outputs(&files).map_err(CliError::from_codegen)?;
        tracing::info!(
            out_root = %out_root.display(),
            written,
            total = files.len(),
            "generation finished"
        );
        write_line(
            out,
            &format!("wrote {written} of {} generated file(s)", files.len()),
        )
    }
}

/// Output directories resolve against the directory holding the source.
fn source_root(source: &Path) -> PathBuf {
    source
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
