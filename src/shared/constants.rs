/// Default page size of the results grid
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered by the results grid
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 25];

/// Length of generated record identifiers
pub const RECORD_ID_LENGTH: usize = 8;

/// Attempts at drawing an identifier not already held by the store
pub const MAX_ID_ATTEMPTS: usize = 5;

/// Sort field used when the grid has no explicit sort
pub const DEFAULT_SORT_FIELD: &str = "time";

/// Response header carrying the total number of matching records
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Placeholder shown in list columns without values
pub const EMPTY_CELL: &str = "---";
