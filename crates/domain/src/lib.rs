//! # ProfileMap Domain
//!
//! Business domain types and models for ProfileMap.
//!
//! This crate contains:
//! - Profile types (in-memory shape and wire rows) and the mapping between
//!   them
//! - The admin form model and its submit-time validation
//! - Session and auth-change types mirrored from the auth backend
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other ProfileMap crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
