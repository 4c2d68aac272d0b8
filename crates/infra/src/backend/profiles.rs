//! REST adapter for the `profiles` table

use async_trait::async_trait;
use profilemap_core::ProfileTable;
use profilemap_domain::constants::PROFILES_TABLE;
use profilemap_domain::{NewProfileRow, ProfileChanges, ProfileMapError, ProfileRow, Result};
use reqwest::Method;
use tracing::{debug, instrument};

use super::client::BackendClient;
use super::response::{decode, ensure_success};

const PREFER_REPRESENTATION: &str = "return=representation";

/// `profiles` table over the backend's REST interface
#[derive(Clone)]
pub struct RestProfileTable {
    client: BackendClient,
}

impl RestProfileTable {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn id_filter(id: &str) -> (&'static str, String) {
        ("id", format!("eq.{id}"))
    }
}

#[async_trait]
impl ProfileTable for RestProfileTable {
    #[instrument(skip(self), fields(table = PROFILES_TABLE))]
    async fn select_all(&self) -> Result<Vec<ProfileRow>> {
        let url = self.client.rest_url(PROFILES_TABLE)?;
        let request = self.client.authorized(Method::GET, url).await.query(&[("select", "*")]);
        let rows: Vec<ProfileRow> = decode(self.client.http().send(request).await?).await?;
        debug!(count = rows.len(), "selected profiles");
        Ok(rows)
    }

    #[instrument(skip(self, row), fields(table = PROFILES_TABLE))]
    async fn insert(&self, row: NewProfileRow) -> Result<ProfileRow> {
        let url = self.client.rest_url(PROFILES_TABLE)?;
        let request = self
            .client
            .authorized(Method::POST, url)
            .await
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&[row]);
        let rows: Vec<ProfileRow> = decode(self.client.http().send(request).await?).await?;
        single_row(rows, "insert")
    }

    #[instrument(skip(self, changes), fields(table = PROFILES_TABLE))]
    async fn update(&self, id: &str, changes: ProfileChanges) -> Result<ProfileRow> {
        let url = self.client.rest_url(PROFILES_TABLE)?;
        let request = self
            .client
            .authorized(Method::PATCH, url)
            .await
            .query(&[Self::id_filter(id)])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&changes);
        let rows: Vec<ProfileRow> = decode(self.client.http().send(request).await?).await?;
        if rows.is_empty() {
            return Err(ProfileMapError::RemoteOperation(format!("Profile {id} was not updated")));
        }
        single_row(rows, "update")
    }

    #[instrument(skip(self), fields(table = PROFILES_TABLE))]
    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.client.rest_url(PROFILES_TABLE)?;
        let request = self.client.authorized(Method::DELETE, url).await.query(&[Self::id_filter(id)]);
        ensure_success(self.client.http().send(request).await?).await?;
        Ok(())
    }
}

fn single_row(mut rows: Vec<ProfileRow>, operation: &str) -> Result<ProfileRow> {
    match (rows.pop(), rows.is_empty()) {
        (Some(row), true) => Ok(row),
        (None, _) => Err(ProfileMapError::RemoteOperation(format!("{operation} returned no row"))),
        (Some(_), false) => Err(ProfileMapError::RemoteOperation(format!(
            "{operation} returned {} rows, expected one",
            rows.len() + 1
        ))),
    }
}
