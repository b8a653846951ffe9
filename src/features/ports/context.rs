use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ports::dtos::FormMode;

/// State shared between the grid and the record form
///
/// Handlers receive it from the client, mutate it through `&mut` and hand it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminContext {
    #[serde(default)]
    pub form_mode: FormMode,
    #[serde(default)]
    pub modal_open: bool,
    #[serde(default)]
    pub selected_row: Option<String>,
    /// Set after a successful write so the grid reloads
    #[serde(default)]
    pub data_stale: bool,
    #[serde(default)]
    pub loading: bool,
    /// Text currently typed in the search box
    #[serde(default)]
    pub search_input: String,
    /// Search applied to the grid
    #[serde(default)]
    pub search: String,
}

impl AdminContext {
    pub fn open_modal(&mut self, mode: FormMode, row: impl Into<String>) {
        self.form_mode = mode;
        self.modal_open = true;
        self.selected_row = Some(row.into());
    }

    /// Opens an empty add form
    pub fn open_add(&mut self) {
        self.form_mode = FormMode::Add;
        self.modal_open = true;
        self.selected_row = None;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn mark_stale(&mut self) {
        self.data_stale = true;
    }

    /// Clearing the box clears the applied search right away
    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
        if self.search_input.is_empty() {
            self.search.clear();
        }
    }

    pub fn commit_search(&mut self) {
        self.search = self.search_input.clone();
    }
}
