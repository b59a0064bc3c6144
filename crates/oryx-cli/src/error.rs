//! Error type distinguishing bad input from operational failures.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use oryx_codegen::error::CodegenError;

/// CLI-level error; the variant decides the process exit code.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Classify a generator error: filesystem trouble is a failure, anything the source or
    /// the generated files are responsible for is a validation error.
    pub(crate) fn from_codegen(error: CodegenError) -> Self {
        match error {
            CodegenError::ReadSource { .. }
            | CodegenError::CreateDir { .. }
            | CodegenError::WriteOutput { .. }
            | CodegenError::ReadOutput { .. }
            | CodegenError::RegexCompile { .. } => Self::failure(error),
            other => Self::validation(error_chain(&other)),
        }
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_message())
    }
}

impl Error for CliError {}

fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
