mod json_server_client;
mod store_query;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::ports::models::PortRecord;

pub use json_server_client::JsonServerClient;
pub use store_query::StoreQuery;

/// One page returned by the store
#[derive(Debug, Clone, Default)]
pub struct PortListing {
    pub rows: Vec<PortRecord>,
    /// Value of the total-count header, when the store sent one
    pub total: Option<i64>,
}

/// Generic record store holding the port collection
#[async_trait]
pub trait PortStore: Send + Sync {
    async fn list(&self, query: &StoreQuery) -> Result<PortListing>;

    /// `Ok(None)` when the store has no record with this id
    async fn get(&self, id: &str) -> Result<Option<PortRecord>>;

    async fn create(&self, record: &PortRecord) -> Result<PortRecord>;

    async fn update(&self, id: &str, record: &PortRecord) -> Result<PortRecord>;

    async fn delete(&self, id: &str) -> Result<()>;
}
