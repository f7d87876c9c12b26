//! HTTP front door for the Mentor chat relay.
//!
//! Exposes the router and application state so the `mentor` binary and the
//! router tests build the exact same service.

pub mod http;
pub mod state;
