//! Commands - frontend to backend bridge

mod admin;
mod profiles;
mod session;

pub use admin::*;
pub use profiles::*;
pub use session::*;
