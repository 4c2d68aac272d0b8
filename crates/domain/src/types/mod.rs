//! Domain types and models
//!
//! `profile` is the in-memory shape every component works with, `row` is the
//! backend's flat snake_case shape, `form` is the admin form as typed by the
//! operator. Conversions between them live next to the target type.

pub mod form;
pub mod profile;
pub mod row;
pub mod session;

pub use form::{CoordinateInput, ProfileForm};
pub use profile::{ContactInfo, Coordinates, Location, Profile, ProfileId};
pub use row::{NewProfileRow, ProfileChanges, ProfileRow};
pub use session::{AuthChange, AuthEvent, AuthUser, Session};
