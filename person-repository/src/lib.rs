//! Person repository: a fixed in-memory record store and the query surface over it.
//!
//! ## Types
//!
//! - [`RepositoryError`] – Strict lookup failures
//! - [`PersonStore`] – The ordered immutable snapshot
//! - [`PersonRepository`] / [`PersonStream`] – Query trait and its stream type
//! - [`InMemoryPersonRepository`] – Repository over a [`PersonStore`]

mod error;
mod inmemory_repo;
mod repository;
mod store;


pub use error::RepositoryError;
pub use inmemory_repo::InMemoryPersonRepository;
pub use person_core::Person;
pub use repository::{PersonRepository, PersonStream};
pub use store::PersonStore;
