//! Chat request handling: session, adapter and service.

pub mod adapter;
pub mod service;
pub mod session;
