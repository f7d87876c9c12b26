//! Generative model abstractions.
//!
//! - `GenerativeModel`: RPITIT trait for concrete model clients
//! - `BoxGenerativeModel`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;
