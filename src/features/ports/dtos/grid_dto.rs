use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::ports::context::AdminContext;
use crate::features::ports::models::PortRecord;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::SortDirection;

// =============================================================================
// GRID STATE
// =============================================================================

/// Pagination, sort, search and filter state of the results grid
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GridStateDto {
    /// Page index as shown by the grid (0-indexed)
    #[serde(default)]
    pub page: u32,

    /// Rows per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    pub page_size: u32,

    /// Sort model of the grid; only the first entry is used
    #[serde(default)]
    pub sort_model: Vec<SortItemDto>,

    /// Committed free-text search; takes precedence over `context.search`
    #[serde(default)]
    pub search: Option<String>,

    /// Admin context of the caller, whose committed search applies when
    /// `search` is absent
    #[serde(default)]
    pub context: Option<AdminContext>,

    /// Filter clauses of the grid's filter model
    #[serde(default)]
    pub filters: Vec<FilterClause>,

    /// Opaque sequence number echoed back with the page
    #[serde(default)]
    pub request_seq: Option<u64>,
}

impl GridStateDto {
    /// Search sent to the store, if any
    pub fn applied_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .or_else(|| self.context.as_ref().map(|c| c.search.as_str()))
            .filter(|s| !s.is_empty())
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for GridStateDto {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_model: Vec::new(),
            search: None,
            context: None,
            filters: Vec::new(),
            request_seq: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SortItemDto {
    pub field: String,
    /// Missing direction sorts ascending
    #[serde(default)]
    pub sort: Option<SortDirection>,
}

// =============================================================================
// FILTERS
// =============================================================================

/// One (field, operator, value) condition of the grid filter model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterClause {
    pub field: String,
    #[schema(value_type = String, example = "contains")]
    pub operator: FilterOperator,
    /// Scalar for most operators, a list for `isAnyOf`
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
}

impl FilterClause {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: Option<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

/// Grid filter operators, named as the grid sends them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterOperator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    DoesNotEqual,
    DoesNotContain,
    IsAnyOf,
    Other(String),
}

impl FilterOperator {
    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::IsEmpty => "isEmpty",
            FilterOperator::IsNotEmpty => "isNotEmpty",
            FilterOperator::DoesNotEqual => "doesNotEqual",
            FilterOperator::DoesNotContain => "doesNotContain",
            FilterOperator::IsAnyOf => "isAnyOf",
            FilterOperator::Other(name) => name,
        }
    }

    /// Operators the store cannot express; evaluated on the fetched page instead
    pub fn is_client_side(&self) -> bool {
        matches!(self, FilterOperator::DoesNotContain | FilterOperator::IsAnyOf)
    }
}

impl From<String> for FilterOperator {
    fn from(name: String) -> Self {
        match name.as_str() {
            "equals" => FilterOperator::Equals,
            "contains" => FilterOperator::Contains,
            "startsWith" => FilterOperator::StartsWith,
            "endsWith" => FilterOperator::EndsWith,
            "isEmpty" => FilterOperator::IsEmpty,
            "isNotEmpty" => FilterOperator::IsNotEmpty,
            "doesNotEqual" => FilterOperator::DoesNotEqual,
            "doesNotContain" => FilterOperator::DoesNotContain,
            "isAnyOf" => FilterOperator::IsAnyOf,
            _ => FilterOperator::Other(name),
        }
    }
}

impl From<FilterOperator> for String {
    fn from(op: FilterOperator) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// One page of grid rows
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortPageDto {
    pub rows: Vec<PortRecord>,
    /// Display text per row, keyed by column field
    pub cells: Vec<BTreeMap<String, String>>,
    /// Total matching records reported by the store
    pub row_count: i64,
    /// Echo of the request's `request_seq`
    pub request_seq: Option<u64>,
}

/// Column definition of the results grid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridColumnDto {
    pub field: String,
    pub header_name: String,
    pub width: u32,
    pub sortable: bool,
    pub description: Option<String>,
}

/// Columns plus paging options of the results grid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridLayoutDto {
    pub columns: Vec<GridColumnDto>,
    pub page_size_options: Vec<u32>,
    pub default_page_size: u32,
}
