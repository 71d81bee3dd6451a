//! # Person Repository
//!
//! `PersonRepository` is the query surface over a person store. Implementors only supply
//! [`PersonRepository::find_all`]; every lookup is derived from that traversal.
//!
//! ## Laziness
//!
//! Streams and futures returned here do nothing until polled. Dropping one before it completes
//! stops the traversal; there is nothing to clean up.
//!
//! ## Example
//!
//! ```rust
//! use futures::StreamExt;
//! use person_repository::{InMemoryPersonRepository, PersonRepository};
//!
//! # tokio_test::block_on(async {
//! let repo = InMemoryPersonRepository::new();
//!
//! let names: Vec<String> = repo
//!     .find_all()
//!     .map(|person| person.first_name().to_string())
//!     .collect()
//!     .await;
//! assert_eq!(names, ["Michael", "Fiona", "Sam", "Jesse"]);
//!
//! assert!(repo.get_by_id(8).await.is_none());
//! # });
//! ```

use async_trait::async_trait;
use futures::future;
use futures::stream::{BoxStream, StreamExt};
use person_core::Person;

use crate::error::RepositoryError;

/// Lazily produced, finite stream of persons in store order.
pub type PersonStream = BoxStream<'static, Person>;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Streams every person in store order. Each call starts an independent traversal.
    fn find_all(&self) -> PersonStream;

    /// First person whose id equals `id`, or `None`.
    async fn get_by_id(&self, id: i32) -> Option<Person> {
        tracing::debug!(id, "get_by_id");
        self.find_all()
            .filter(move |person| future::ready(person.id() == id))
            .next()
            .await
    }

    /// The one person with `id`. Fails unless exactly one record matches.
    async fn get_by_id_strict(&self, id: i32) -> Result<Person, RepositoryError> {
        tracing::debug!(id, "get_by_id_strict");
        let matches: Vec<Person> = self
            .find_all()
            .filter(move |person| future::ready(person.id() == id))
            .collect()
            .await;

        let mut matches = matches.into_iter();
        match (matches.next(), matches.len()) {
            (None, _) => Err(RepositoryError::NotFound { id }),
            (Some(person), 0) => Ok(person),
            (Some(_), rest) => Err(RepositoryError::Ambiguous {
                id,
                count: rest + 1,
            }),
        }
    }

    /// First person whose first name equals `first_name`, or `None`.
    async fn find_by_first_name(&self, first_name: &str) -> Option<Person> {
        tracing::debug!(first_name, "find_by_first_name");
        let first_name = first_name.to_owned();
        self.find_all()
            .filter(move |person| future::ready(person.first_name() == first_name))
            .next()
            .await
    }

    /// First person in store order, or `None` for an empty store.
    async fn find_first(&self) -> Option<Person> {
        self.find_all().next().await
    }

    /// Collects a full traversal into a list.
    async fn collect_all(&self) -> Vec<Person> {
        self.find_all().collect().await
    }
}
