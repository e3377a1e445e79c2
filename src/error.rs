//! Error type for header scanning and code generation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Every failure is fatal for the run; nothing is retried and no partial
/// output is written.
#[derive(Debug)]
pub enum GenerateError {
    /// A header file could not be opened or read
    InputUnavailable {
        path: PathBuf,
        source: io::Error,
    },
    /// The numeric version macro is missing from the version header
    VersionNotFound {
        macro_name: String,
    },
    /// The named enum has no definition in the header text
    EnumNotFound {
        name: String,
    },
    /// The generated source could not be written
    OutputUnwritable {
        path: PathBuf,
        source: io::Error,
    },
    InvalidConfig(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InputUnavailable { path, source } => {
                write!(f, "Failed to read header {}: {}", path.display(), source)
            }
            GenerateError::VersionNotFound { macro_name } => {
                write!(f, "Version macro {} not found", macro_name)
            }
            GenerateError::EnumNotFound { name } => write!(f, "Enum {} not found", name),
            GenerateError::OutputUnwritable { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            GenerateError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::InputUnavailable { source, .. }
            | GenerateError::OutputUnwritable { source, .. } => Some(source),
            _ => None,
        }
    }
}
