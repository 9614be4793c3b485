//! CLI-level errors
//!
//! Only locally-detected failures become errors. A non-zero exit from the
//! orchestrator is not an error here; its code is propagated verbatim.

use std::io;

use thiserror::Error;

use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("no such command: {0}")]
    UnknownCommand(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownCommand(_) => exitcode::USAGE,
            CliError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => exitcode::UNAVAILABLE,
                _ => exitcode::OSERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unknown_command_then_usage_exit_code() {
        let err = CliError::UnknownCommand("frobnicate".into());
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn given_missing_orchestrator_then_unavailable_exit_code() {
        let err = CliError::Spawn {
            program: "docker".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), exitcode::UNAVAILABLE);
    }

    #[test]
    fn given_other_spawn_failure_then_oserr_exit_code() {
        let err = CliError::Spawn {
            program: "docker".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), exitcode::OSERR);
    }
}
