//! Grid state to store query translation.
//!
//! The store understands json-server query conventions: `_page`/`_limit` for
//! paging, `_sort`/`_order` for sorting, `q` for full-text search and
//! `<field>`, `<field>_like`, `<field>_ne` for per-field filters. Operators with
//! no store equivalent are evaluated by [`apply_post_filter`] on the fetched page.

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::ports::clients::StoreQuery;
use crate::features::ports::dtos::{FilterClause, FilterOperator, GridStateDto};
use crate::features::ports::models::PortRecord;
use crate::shared::constants::DEFAULT_SORT_FIELD;
use crate::shared::types::SortDirection;

/// Builds the list query for one grid state
pub fn translate(state: &GridStateDto) -> StoreQuery {
    let mut query = StoreQuery::new();

    // Grid pages are 0-indexed, the store's are 1-indexed
    query.append("_page", (u64::from(state.page) + 1).to_string());
    query.append("_limit", state.page_size.to_string());

    match state.sort_model.first() {
        Some(sort) => {
            query.append("_sort", sort.field.clone());
            query.append("_order", sort.sort.unwrap_or_default().as_str());
        }
        None => {
            query.append("_sort", DEFAULT_SORT_FIELD);
            query.append("_order", SortDirection::Desc.as_str());
        }
    }

    if let Some(search) = state.applied_search() {
        query.append("q", search);
    }

    for clause in &state.filters {
        append_filter(&mut query, clause);
    }

    query
}

fn append_filter(query: &mut StoreQuery, clause: &FilterClause) {
    let field = &clause.field;
    let value = query_value_text(clause.value.as_ref());

    match &clause.operator {
        FilterOperator::Equals => query.append(field.clone(), value),
        FilterOperator::Contains => query.append(format!("{}_like", field), value),
        FilterOperator::StartsWith => query.append(format!("{}_like", field), format!("^{}", value)),
        FilterOperator::EndsWith => query.append(format!("{}_like", field), format!("{}$", value)),
        FilterOperator::IsEmpty => query.append(field.clone(), ""),
        FilterOperator::IsNotEmpty => query.append(format!("{}_ne", field), ""),
        FilterOperator::DoesNotEqual => query.append(format!("{}_ne", field), value),
        FilterOperator::DoesNotContain | FilterOperator::IsAnyOf => {
            tracing::warn!(
                "{} operator not supported by the port store, filtering the fetched page",
                clause.operator
            );
        }
        FilterOperator::Other(name) => {
            tracing::debug!("Unknown filter operator '{}', using exact match", name);
            query.append(field.clone(), value)
        }
    }
}

/// Whether any clause has to be evaluated on the fetched rows
pub fn needs_post_filter(filters: &[FilterClause]) -> bool {
    filters.iter().any(|c| c.operator.is_client_side())
}

/// Keeps the rows satisfying every client-side clause
///
/// Only the rows handed in are examined, so the result is a subset of the
/// current page and not of the whole collection. A clause without a value
/// still applies: doesNotContain with an empty needle and isAnyOf with no
/// candidates both reject every row.
pub fn apply_post_filter(rows: Vec<PortRecord>, filters: &[FilterClause]) -> Result<Vec<PortRecord>> {
    let active: Vec<&FilterClause> = filters
        .iter()
        .filter(|c| c.operator.is_client_side())
        .collect();

    if active.is_empty() {
        return Ok(rows);
    }

    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let doc = serde_json::to_value(&row).map_err(|e| {
            AppError::Internal(format!("Failed to serialize port {}: {}", row.id, e))
        })?;

        if active.iter().all(|clause| clause_holds(&doc, clause)) {
            kept.push(row);
        }
    }

    Ok(kept)
}

fn clause_holds(doc: &Value, clause: &FilterClause) -> bool {
    let row_value = doc
        .get(&clause.field)
        .map(display_text)
        .unwrap_or_default()
        .to_lowercase();

    match &clause.operator {
        FilterOperator::DoesNotContain => {
            let needle = clause
                .value
                .as_ref()
                .map(display_text)
                .unwrap_or_default()
                .to_lowercase();
            !row_value.contains(&needle)
        }
        FilterOperator::IsAnyOf => {
            let candidates: Vec<String> = match &clause.value {
                Some(Value::Array(items)) => items.iter().map(display_text).collect(),
                None | Some(Value::Null) => Vec::new(),
                Some(other) => vec![display_text(other)],
            };
            candidates
                .iter()
                .any(|candidate| candidate.to_lowercase() == row_value)
        }
        _ => true,
    }
}

/// Clause value as sent to the store
///
/// Falsy values (`null`, `false`, `0`, `""`) send an empty string.
fn query_value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => display_text(other),
    }
}

/// Text form of a JSON value as the grid shows it
///
/// Lists join with a bare comma and null renders empty. Booleans and zero keep
/// their literal text.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
