use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::ports::clients::PortStore;
use crate::features::ports::dtos::{GridLayoutDto, GridStateDto, PortPageDto};
use crate::features::ports::models::PortRecord;
use crate::features::ports::services::grid_columns::{cell_text, data_fields, grid_layout};
use crate::features::ports::services::query_translator::{
    apply_post_filter, needs_post_filter, translate,
};

/// Service for browsing the port collection
pub struct PortService {
    store: Arc<dyn PortStore>,
}

impl PortService {
    pub fn new(store: Arc<dyn PortStore>) -> Self {
        Self { store }
    }

    /// Fetch the page described by the grid state
    ///
    /// Issues exactly one store request. `row_count` is the store's total,
    /// not reduced by client-side filtering.
    pub async fn list_page(&self, state: &GridStateDto) -> Result<PortPageDto> {
        let query = translate(state);
        tracing::debug!("Fetching port page: {}", query.to_query_string());

        let listing = self.store.list(&query).await?;
        let fetched = listing.rows.len();

        let rows = if needs_post_filter(&state.filters) {
            apply_post_filter(listing.rows, &state.filters)?
        } else {
            listing.rows
        };

        let row_count = listing.total.unwrap_or_else(|| {
            tracing::warn!("Port store sent no total count, using fetched row count");
            fetched as i64
        });

        let cells = rows.iter().map(row_cells).collect();

        Ok(PortPageDto {
            rows,
            cells,
            row_count,
            request_seq: state.request_seq,
        })
    }

    pub async fn get(&self, id: &str) -> Result<PortRecord> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Port '{}' not found", id)))
    }

    pub fn layout(&self) -> GridLayoutDto {
        grid_layout()
    }
}

fn row_cells(record: &PortRecord) -> BTreeMap<String, String> {
    data_fields()
        .map(|field| (field.to_string(), cell_text(record, field)))
        .collect()
}
