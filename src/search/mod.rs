//! Compound search integration
//!
//! This module provides:
//! - The `CompoundSearch` trait the resolver queries
//! - Response types for the BiGG Models search API
//! - A rate-limited HTTP client implementing `CompoundSearch`

pub mod client;
pub mod traits;
pub mod types;

pub use client::BiggClient;
pub use traits::{CandidateRecord, CompoundSearch, SearchError};
pub use types::*;
