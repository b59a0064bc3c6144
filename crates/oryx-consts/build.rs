use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use oryx_codegen::error::CodegenError;

const SOURCE_ENV: &str = "ORYX_CONSTANTS_SOURCE";
const GENERATED_FILE: &str = "registry.rs";

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-env-changed={SOURCE_ENV}");

    let source_path = source_path()?;
    println!("cargo:rerun-if-changed={}", source_path.display());

    let registry = oryx_codegen::load_source(&source_path).map_err(BuildError::Codegen)?;
    let rendered = oryx_codegen::render_rust(&registry);

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or(BuildError::MissingOutDir)?;
    let target = out_dir.join(GENERATED_FILE);
    fs::write(&target, rendered).map_err(|source| BuildError::WriteRegistry { target, source })
}

fn source_path() -> Result<PathBuf, BuildError> {
    if let Some(path) = env::var_os(SOURCE_ENV) {
        return Ok(PathBuf::from(path));
    }
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok_or(BuildError::MissingManifestDir)?;
    Ok(manifest_dir.join(oryx_codegen::DEFAULT_SOURCE_NAME))
}

#[derive(Debug)]
enum BuildError {
    MissingManifestDir,
    MissingOutDir,
    Codegen(CodegenError),
    WriteRegistry {
        target: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingManifestDir => write!(f, "CARGO_MANIFEST_DIR is not set"),
            Self::MissingOutDir => write!(f, "OUT_DIR is not set"),
            Self::Codegen(err) => write!(f, "constant registry generation failed: {err}"),
            Self::WriteRegistry { target, .. } => {
                write!(f, "failed to write {}", target.display())
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codegen(err) => err.source(),
            Self::WriteRegistry { source, .. } => Some(source),
            Self::MissingManifestDir | Self::MissingOutDir => None,
        }
    }
}
