//! Upstream CATS API access
//!
//! This module owns the single outbound concern of the server: building an
//! authenticated request against the CATS REST API and normalizing the
//! outcome into a result-or-failure value.

mod client;
mod error;
pub mod summary;

pub use client::CatsClient;
pub use error::{ApiError, FailureKind};
