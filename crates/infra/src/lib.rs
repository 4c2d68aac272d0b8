//! # ProfileMap Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client
//! - REST adapters for the hosted backend (profiles table, auth service)
//! - Configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `profilemap-core`
//! - Contains all "impure" code (network and file I/O)

pub mod backend;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use backend::{BackendClient, RestAuthProvider, RestProfileTable, SessionState};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
