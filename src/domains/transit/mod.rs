//! Transit domain module.
//!
//! This module owns everything that talks to the upstream transit data
//! service: the entity shapes it returns, the HTTP client that queries it,
//! and the error taxonomy for failed queries.
//!
//! ## Architecture
//!
//! - `models.rs` - Upstream response entities (decoded and re-serialized verbatim)
//! - `client.rs` - `TransitClient`, one async method per logical query
//! - `error.rs` - `TransitError` taxonomy

mod client;
mod error;
pub mod models;

pub use client::TransitClient;
pub use error::{TransitError, TransitResult};
pub use models::Direction;
