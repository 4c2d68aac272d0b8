//! In-memory `ProfileTable` for testing
//!
//! Records every call so tests can assert which remote operations were (or
//! were not) issued.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use profilemap_core::ProfileTable;
use profilemap_domain::{
    NewProfileRow, ProfileChanges, ProfileMapError, ProfileRow, Result as DomainResult,
};
use uuid::Uuid;

/// One recorded call against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCall {
    SelectAll,
    Insert,
    Update(String),
    Delete(String),
}

/// In-memory mock for `ProfileTable`.
///
/// Inserts get a fresh UUID and current timestamps, mimicking the backend.
/// `fail_next` makes the next call fail with the given error.
#[derive(Default, Clone)]
pub struct InMemoryProfileTable {
    rows: Arc<Mutex<Vec<ProfileRow>>>,
    calls: Arc<Mutex<Vec<TableCall>>>,
    failure: Arc<Mutex<Option<ProfileMapError>>>,
}

impl InMemoryProfileTable {
    /// Create a new mock seeded with the provided rows.
    pub fn new(rows: Vec<ProfileRow>) -> Self {
        Self { rows: Arc::new(Mutex::new(rows)), ..Self::default() }
    }

    pub fn fail_next(&self, error: ProfileMapError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<TableCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<ProfileRow> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: TableCall) -> DomainResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileTable for InMemoryProfileTable {
    async fn select_all(&self) -> DomainResult<Vec<ProfileRow>> {
        self.record(TableCall::SelectAll)?;
        Ok(self.rows())
    }

    async fn insert(&self, row: NewProfileRow) -> DomainResult<ProfileRow> {
        self.record(TableCall::Insert)?;
        let now = Utc::now();
        let stored = ProfileRow {
            id: Uuid::new_v4().to_string(),
            name: row.name,
            description: row.description,
            photo_url: row.photo_url,
            latitude: Some(row.latitude),
            longitude: Some(row.longitude),
            address: row.address,
            email: row.email,
            phone: row.phone,
            created_at: now,
            updated_at: now,
            user_id: Some(row.user_id),
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, changes: ProfileChanges) -> DomainResult<ProfileRow> {
        self.record(TableCall::Update(id.to_string()))?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| ProfileMapError::RemoteOperation(format!("no row with id {id}")))?;

        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(photo_url) = changes.photo_url {
            row.photo_url = photo_url;
        }
        if let Some(latitude) = changes.latitude {
            row.latitude = Some(latitude);
        }
        if let Some(longitude) = changes.longitude {
            row.longitude = Some(longitude);
        }
        if let Some(address) = changes.address {
            row.address = address;
        }
        if let Some(email) = changes.email {
            row.email = email;
        }
        if let Some(phone) = changes.phone {
            row.phone = phone;
        }
        if let Some(user_id) = changes.user_id {
            row.user_id = Some(user_id);
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.record(TableCall::Delete(id.to_string()))?;
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}
