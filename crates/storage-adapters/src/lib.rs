//! # storage-adapters
//!
//! Implementations of the repository ports. The in-memory store is always
//! compiled and backs tests and database-less runs; the Postgres store is
//! behind the `db-postgres` feature.

pub mod memory;
#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use memory::InMemoryForumStore;
#[cfg(feature = "db-postgres")]
pub use postgres::PostgresForumStore;

use uuid::Uuid;

/// Generates a prefixed identifier such as `comment-3f0c...`.
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
