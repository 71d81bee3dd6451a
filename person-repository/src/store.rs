//! Ordered, immutable snapshot of person records.
//!
//! Built once; every traversal reads the same shared slice.

use std::collections::HashSet;
use std::sync::Arc;

use person_core::Person;

/// Fixed ordered set of [`Person`] records. Cloning shares the snapshot.
#[derive(Debug, Clone)]
pub struct PersonStore {
    records: Arc<[Person]>,
}

impl PersonStore {
    /// Creates a store holding `records` in the given order.
    ///
    /// Ids are expected to be unique. Duplicates are kept and logged; lookups resolve them in
    /// store order.
    pub fn new(records: Vec<Person>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        for person in &records {
            if !seen.insert(person.id()) {
                tracing::warn!(id = person.id(), "Duplicate person id in store");
            }
        }
        Self {
            records: records.into(),
        }
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates the default four-record store: Michael, Fiona, Sam and Jesse with ids 1 to 4.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Person::new(1, "Michael", "P1"),
            Person::new(2, "Fiona", "P2"),
            Person::new(3, "Sam", "P3"),
            Person::new(4, "Jesse", "P4"),
        ])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.records.iter()
    }

    /// Shared handle to the records, for traversals that must outlive `&self`.
    pub(crate) fn snapshot(&self) -> Arc<[Person]> {
        Arc::clone(&self.records)
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
