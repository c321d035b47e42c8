//! The resource store contract and an in-memory implementation.
//!
//! The engine only ever needs [`ResourceStore::list_all_resources`]; the write
//! operations exist for the HTTP layer and for seeding. Reads and writes may
//! interleave freely. A read sees either the state before or after a
//! concurrent write, never a torn one.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::resource::{NewResource, Resource};

pub trait ResourceStore: Send + Sync {
    /// The full current resource set, in insertion order.
    fn list_all_resources(&self) -> Result<Vec<Resource>, StoreError>;

    fn get(&self, id: Uuid) -> Result<Option<Resource>, StoreError>;

    /// Store a new resource. Names are unique.
    fn insert(&self, resource: NewResource) -> Result<Resource, StoreError>;

    fn remove(&self, id: Uuid) -> Result<Resource, StoreError>;
}

/// A [`ResourceStore`] kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    resources: RwLock<Vec<Resource>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `resources`, rejecting duplicates like [`ResourceStore::insert`].
    pub fn seeded<I>(resources: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = NewResource>,
    {
        let store = Self::new();
        for resource in resources {
            store.insert(resource)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Resource>>, StoreError> {
        self.resources
            .read()
            .map_err(|_| StoreError::Unavailable("resource lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Resource>>, StoreError> {
        self.resources
            .write()
            .map_err(|_| StoreError::Unavailable("resource lock poisoned".to_string()))
    }
}

impl ResourceStore for InMemoryStore {
    fn list_all_resources(&self) -> Result<Vec<Resource>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<Resource>, StoreError> {
        Ok(self.read()?.iter().find(|r| r.id == id).cloned())
    }

    fn insert(&self, resource: NewResource) -> Result<Resource, StoreError> {
        let mut resources = self.write()?;

        if resources.iter().any(|r| r.name == resource.name) {
            return Err(StoreError::Duplicate(resource.name));
        }
        if let Some(id) = resource.id {
            if resources.iter().any(|r| r.id == id) {
                return Err(StoreError::Duplicate(id.to_string()));
            }
        }

        let resource = resource.into_resource();
        debug!(id = %resource.id, name = %resource.name, "stored resource");
        resources.push(resource.clone());
        Ok(resource)
    }

    fn remove(&self, id: Uuid) -> Result<Resource, StoreError> {
        let mut resources = self.write()?;
        let index = resources
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = resources.remove(index);
        debug!(id = %removed.id, name = %removed.name, "removed resource");
        Ok(removed)
    }
}
