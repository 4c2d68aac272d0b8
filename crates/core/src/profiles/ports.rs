//! Port interfaces for the profiles table
//!
//! These traits define the boundary between the components and the hosted
//! backend that owns the `profiles` table.

use async_trait::async_trait;
use profilemap_domain::{NewProfileRow, ProfileChanges, ProfileRow, Result};

/// Remote `profiles` table
///
/// Row-level access rules are enforced by the backend; a rejected call comes
/// back as [`profilemap_domain::ProfileMapError::RemoteOperation`].
#[async_trait]
pub trait ProfileTable: Send + Sync {
    /// Select every row, in backend order
    async fn select_all(&self) -> Result<Vec<ProfileRow>>;

    /// Insert one row and return it as stored (with id and timestamps)
    async fn insert(&self, row: NewProfileRow) -> Result<ProfileRow>;

    /// Update the row with `id` and return it as stored
    async fn update(&self, id: &str, changes: ProfileChanges) -> Result<ProfileRow>;

    /// Delete the row with `id`
    async fn delete(&self, id: &str) -> Result<()>;
}
