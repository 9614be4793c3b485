//! Standard exit codes (BSD sysexits.h compatible)
//!
//! Delegated failures never pass through these: the child's own exit code is
//! propagated verbatim.

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (unknown verb)
pub const USAGE: i32 = 64;

/// Service unavailable (orchestrator binary could not be spawned)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// System error (e.g., can't fork)
pub const OSERR: i32 = 71;

/// Offset added to the signal number when a child dies to a signal,
/// matching shell convention (SIGINT -> 130).
pub const SIGNAL_BASE: i32 = 128;
