//! # ProfileMap Core
//!
//! Stateful components and the ports they talk through - no I/O.
//!
//! This crate contains:
//! - Port interfaces for the profiles table and the auth backend
//! - The shared profile store and the search filter
//! - List, admin panel, map overlay and app shell state
//!
//! ## Architecture Principles
//! - Only depends on `profilemap-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod admin;
pub mod listing;
pub mod map;
pub mod profiles;
pub mod search;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use admin::{AdminModal, AdminPanel, AdminRow};
pub use listing::{ProfileCard, ProfileList, ProfileListView};
pub use map::{MapOverlay, MapScene, MapView, Marker, Popup};
pub use profiles::{ProfileStore, ProfileTable, StoreSnapshot};
pub use search::filter_profiles;
pub use session::{AppShell, AuthProvider, AuthSubscription, Screen, Tab};
