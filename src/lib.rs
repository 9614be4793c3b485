//! forgectl: a thin front-end over `docker compose` for the LeadForge
//! development stack.
//!
//! One static command table drives both dispatch and the help listing; each
//! verb is a single blocking subprocess whose exit code passes through
//! unchanged. Anything the orchestrator or the containerized clients report
//! is surfaced verbatim, never wrapped or retried.

pub mod cli;
pub mod dispatch;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
