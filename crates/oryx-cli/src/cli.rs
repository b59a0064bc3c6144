//! Argument parsing and command dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use oryx_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, TelemetryError};

use crate::commands::generate::handle_generate;
use crate::commands::get::handle_get;
use crate::commands::list::handle_list;
use crate::commands::validate::handle_validate;
use crate::error::CliResult;

/// Parses CLI arguments, installs logging, and executes the requested command.
/// Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format,
        registry_digest: oryx_consts::SOURCE_DIGEST,
    };
    if let Err(err) = oryx_telemetry::init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let command = cli.command.label();
    let stdout = io::stdout();
    match dispatch(cli, &mut stdout.lock()) {
        Ok(()) => {
            tracing::debug!(command, "command completed");
            0
        }
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(command, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

pub(crate) fn dispatch(cli: Cli, out: &mut impl Write) -> CliResult<()> {
    match cli.command {
        Command::Validate => handle_validate(&cli.source, cli.output, out),
        Command::Generate(args) => handle_generate(&cli.source, &args, out),
        Command::Get(args) => handle_get(&args.name, cli.output, out),
        Command::List(args) => handle_list(&args, cli.output, out),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "oryx-cli",
    version,
    about = "Validate, generate, and query the Oryx constant registry"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "ORYX_CONSTANTS_SOURCE",
        default_value = oryx_codegen::DEFAULT_SOURCE_NAME,
        help = "Path to the declarative constants document"
    )]
    source: PathBuf,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "ORYX_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter directive; RUST_LOG takes precedence"
    )]
    log_level: String,
    #[arg(
        long,
        global = true,
        env = "ORYX_LOG_FORMAT",
        value_parser = parse_log_format,
        default_value = "pretty",
        help = "Log output format (json or pretty)"
    )]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Load and validate the constants document.
    Validate,
    /// Write or verify the Go and C# constant files.
    Generate(GenerateArgs),
    /// Print the value of a compiled constant.
    Get(GetArgs),
    /// List compiled constants.
    List(ListArgs),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Generate(_) => "generate",
            Self::Get(_) => "get",
            Self::List(_) => "list",
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    #[arg(
        long,
        help = "Root that output directories resolve against (defaults to the source's directory)"
    )]
    pub(crate) out_root: Option<PathBuf>,
    #[arg(long, help = "Fail instead of writing when generated files are out of date")]
    pub(crate) check: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GetArgs {
    #[arg(help = "Declared constant name, e.g. EnvironmentType")]
    name: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    #[arg(long, help = "Only constants declared in this collection")]
    pub(crate) collection: Option<String>,
    #[arg(long, help = "Only constants whose name starts with this word, e.g. Fpm")]
    pub(crate) category: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value
        .parse()
        .map_err(|err: TelemetryError| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use clap::CommandFactory;
    use oryx_test_support::documents::VALID;
    use oryx_test_support::fixtures::Workspace;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Cli> {
        Ok(Cli::try_parse_from(
            std::iter::once("oryx-cli").chain(args.iter().copied()),
        )?)
    }

    fn dispatch_to_string(cli: Cli) -> std::result::Result<String, crate::error::CliError> {
        let mut out = Vec::new();
        dispatch(cli, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() -> Result<()> {
        let cli = parse(&[
            "get",
            "EnvironmentType",
            "--output",
            "json",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])?;
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.command.label(), "get");
        Ok(())
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = parse(&["--log-format", "xml", "validate"]);
        assert!(err.is_err());
    }

    #[test]
    fn generate_flags_parse() -> Result<()> {
        let cli = parse(&[
            "--source",
            "config/constants.yaml",
            "generate",
            "--check",
            "--out-root",
            "out",
        ])?;
        assert_eq!(cli.source, Path::new("config/constants.yaml"));
        match cli.command {
            Command::Generate(args) => {
                assert!(args.check);
                assert_eq!(args.out_root.as_deref(), Some(Path::new("out")));
            }
            other => return Err(anyhow!("unexpected command {other:?}")),
        }
        Ok(())
    }

    #[test]
    fn dispatch_get_reads_compiled_registry() -> Result<()> {
        let output = dispatch_to_string(parse(&["get", "EnvironmentType"])?)
            .map_err(|err| anyhow!(err.display_message()))?;
        assert_eq!(output, "ORYX_ENV_TYPE\n");

        let err = dispatch_to_string(parse(&["get", "DoesNotExist"])?)
            .err()
            .ok_or_else(|| anyhow!("unknown constant should fail"))?;
        assert_eq!(err.exit_code(), 2);
        Ok(())
    }

    #[test]
    fn dispatch_validate_uses_source_flag() -> Result<()> {
        let workspace = Workspace::new()?;
        let source = workspace.write_source(VALID)?;
        let source_arg = source.to_string_lossy().into_owned();
        let output = dispatch_to_string(parse(&["--source", &source_arg, "validate"])?)
            .map_err(|err| anyhow!(err.display_message()))?;
        assert!(output.contains("total: 6 constant(s)\n"));
        Ok(())
    }

    #[test]
    fn missing_source_is_an_operational_failure() -> Result<()> {
        let workspace = Workspace::new()?;
        let missing = workspace.path().join("absent.yaml");
        let missing_arg = missing.to_string_lossy().into_owned();
        let err = dispatch_to_string(parse(&["--source", &missing_arg, "validate"])?)
            .err()
            .ok_or_else(|| anyhow!("missing source should fail"))?;
        assert_eq!(err.exit_code(), 3);
        Ok(())
    }
}
