//! Profile collection: table port and the shared store

pub mod ports;
pub mod store;

pub use ports::ProfileTable;
pub use store::{ProfileStore, StoreSnapshot};
