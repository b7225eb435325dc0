//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - SQL implementations of the reader and repository ports
//! - `memory` - Process-local implementations of the same ports
//! - `http` - axum endpoints
//! - `client` - reqwest client for the HTTP API

pub mod client;
pub mod http;
pub mod memory;
pub mod postgres;
