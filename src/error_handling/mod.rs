//! Error handling.
//!
//! Error taxonomy and propagation policy: stage failures are recorded as
//! tagged strings in the shared result record; only initialization failures
//! propagate as `Result` to the caller.

mod types;

pub use types::{InitializationError, StageError};
