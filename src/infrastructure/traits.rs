//! I/O boundary traits for testability
//!
//! The dispatcher never captures or transforms child output: the child
//! inherits the terminal so interactive sessions (psql, redis-cli, followed
//! logs) work and Ctrl-C reaches the child directly.

use std::io;
use std::process::{Command, ExitStatus};

/// External process runner abstraction.
pub trait ProcessRunner {
    /// Spawn `program` with `args`, stdio inherited, and block until it
    /// terminates. Returns the child's exit status untouched.
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExitStatus>;
}

/// Real runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct RealProcessRunner;

impl ProcessRunner for RealProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExitStatus> {
        Command::new(program).args(args).status()
    }
}

/// Translate an exit status into the code this process should exit with.
///
/// A child killed by a signal has no code; shells report those as
/// 128 + signal, and so do we.
pub fn propagate_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return crate::exitcode::SIGNAL_BASE + signal;
        }
    }
    crate::exitcode::SOFTWARE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn given_signal_termination_when_propagated_then_offset_by_128() {
        use std::os::unix::process::ExitStatusExt;
        // raw wait status 2 = killed by SIGINT
        let status = ExitStatus::from_raw(2);
        assert_eq!(propagate_status(status), 130);
    }

    #[cfg(unix)]
    #[test]
    fn given_normal_exit_when_propagated_then_code_verbatim() {
        use std::os::unix::process::ExitStatusExt;
        // raw wait status: exit code lives in the high byte
        let status = ExitStatus::from_raw(3 << 8);
        assert_eq!(propagate_status(status), 3);
    }
}
