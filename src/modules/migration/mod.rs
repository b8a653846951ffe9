//! One-shot reshaping of the legacy keyed port dump into the store layout.

mod reshape;

pub use reshape::{migrate_file, reshape, MigrationError, COLLECTION_KEY};
