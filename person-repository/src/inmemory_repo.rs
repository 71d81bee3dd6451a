//! In-memory person repository backed by a [`PersonStore`].

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::repository::{PersonRepository, PersonStream};
use crate::store::PersonStore;

/// Repository over a fixed in-memory store. Cloning shares the same snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryPersonRepository {
    store: PersonStore,
}

impl InMemoryPersonRepository {
    /// Creates a repository over the default four-record store.
    pub fn new() -> Self {
        Self::with_store(PersonStore::with_defaults())
    }

    pub fn with_store(store: PersonStore) -> Self {
        Self { store }
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    fn find_all(&self) -> PersonStream {
        let records = self.store.snapshot();
        tracing::debug!(len = records.len(), "find_all");
        stream::iter(0..records.len())
            .map(move |index| records[index].clone())
            .boxed()
    }
}
