//! # ProfileMap App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (frontend → backend bridge)
//! - Application context (dependency injection)
//! - Logging setup and the binary entry point
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Commands return `Result<T, String>` carrying the inline user message

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
