use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::ports::dtos::{GridLayoutDto, GridStateDto, PortPageDto};
use crate::features::ports::models::PortRecord;
use crate::features::ports::services::{FormService, PortService};
use crate::shared::types::{ApiResponse, Meta};

/// State for port handlers
#[derive(Clone)]
pub struct PortState {
    pub port_service: Arc<PortService>,
    pub form_service: Arc<FormService>,
}

/// Query one page of ports from the grid state
#[utoipa::path(
    post,
    path = "/api/ports/query",
    request_body = GridStateDto,
    responses(
        (status = 200, description = "Page of ports", body = ApiResponse<PortPageDto>),
        (status = 400, description = "Invalid grid state"),
        (status = 502, description = "Port store unavailable")
    ),
    tag = "ports"
)]
pub async fn query_ports(
    State(state): State<PortState>,
    AppJson(grid): AppJson<GridStateDto>,
) -> Result<Json<ApiResponse<PortPageDto>>> {
    grid.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = state.port_service.list_page(&grid).await?;
    let total = page.row_count;

    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta { total }),
    )))
}

/// Column definitions of the results grid
#[utoipa::path(
    get,
    path = "/api/ports/columns",
    responses(
        (status = 200, description = "Grid layout", body = ApiResponse<GridLayoutDto>),
    ),
    tag = "ports"
)]
pub async fn get_columns(State(state): State<PortState>) -> Json<ApiResponse<GridLayoutDto>> {
    Json(ApiResponse::success(
        Some(state.port_service.layout()),
        None,
        None,
    ))
}

/// Get port by id
#[utoipa::path(
    get,
    path = "/api/ports/{id}",
    params(
        ("id" = String, Path, description = "Port id")
    ),
    responses(
        (status = 200, description = "Port found", body = ApiResponse<PortRecord>),
        (status = 404, description = "Port not found")
    ),
    tag = "ports"
)]
pub async fn get_port(
    State(state): State<PortState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PortRecord>>> {
    let port = state.port_service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(port), None, None)))
}
