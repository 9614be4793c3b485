//! Infrastructure layer: the subprocess boundary

pub mod traits;

pub use traits::{propagate_status, ProcessRunner, RealProcessRunner};
