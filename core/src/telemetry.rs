//! # Telemetry: logging a result without altering it
//!
//! The `peek`/`on_error` pair is the usual place for instrumentation; this
//! module packages the common case of reporting both branches through
//! `tracing` under a step name.

use std::fmt::Debug;

pub trait TraceResult: Sized {
    /// Logs the success at `debug` and the error at `error`, then returns
    /// `self` unchanged.
    fn traced(self, step: &str) -> Self;
}

impl<V: Debug, E: Debug> TraceResult for Result<V, E> {
    fn traced(self, step: &str) -> Self {
        match &self {
            Ok(value) => tracing::debug!(express.step = %step, ?value, "Step completed: Ok"),
            Err(error) => tracing::error!(express.step = %step, ?error, "Step failed: Err"),
        }
        self
    }
}
