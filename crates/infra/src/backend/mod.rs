//! Hosted backend adapters
//!
//! REST implementations of the table and auth ports. Both adapters share one
//! [`BackendClient`], so a sign-in through [`RestAuthProvider`] is
//! immediately used as the bearer token by [`RestProfileTable`].

pub mod auth;
pub mod client;
pub mod profiles;
pub mod response;
pub mod session;

pub use auth::RestAuthProvider;
pub use client::BackendClient;
pub use profiles::RestProfileTable;
pub use session::SessionState;
