//! Observability setup for the Mentor relay: structured logging and
//! optional OpenTelemetry trace export.

pub mod tracing_setup;
