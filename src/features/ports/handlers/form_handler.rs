use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::ports::dtos::{
    FormMode, FormViewDto, OpenFormQuery, SubmitFormDto, SubmitOutcomeDto,
};
use crate::features::ports::handlers::PortState;
use crate::shared::types::ApiResponse;

/// Open the record form
///
/// Edit, view and delete load the selected record with list fields comma joined.
#[utoipa::path(
    get,
    path = "/api/ports/form",
    params(OpenFormQuery),
    responses(
        (status = 200, description = "Form contents", body = ApiResponse<FormViewDto>),
        (status = 400, description = "Invalid mode or missing record id"),
        (status = 404, description = "Port not found")
    ),
    tag = "ports"
)]
pub async fn open_form(
    State(state): State<PortState>,
    AppQuery(query): AppQuery<OpenFormQuery>,
) -> Result<Json<ApiResponse<FormViewDto>>> {
    let view = state
        .form_service
        .open(query.mode, query.id.as_deref())
        .await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Submit the record form
///
/// The mode and selected record come from the submitted context.
#[utoipa::path(
    post,
    path = "/api/ports/form",
    request_body = SubmitFormDto,
    responses(
        (status = 200, description = "Submission applied", body = ApiResponse<SubmitOutcomeDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Port not found"),
        (status = 502, description = "Port store unavailable")
    ),
    tag = "ports"
)]
pub async fn submit_form(
    State(state): State<PortState>,
    AppJson(dto): AppJson<SubmitFormDto>,
) -> Result<Json<ApiResponse<SubmitOutcomeDto>>> {
    let mut context = dto.context;
    let record = state.form_service.submit(&mut context, dto.fields).await?;

    let message = match context.form_mode {
        FormMode::Add => Some("Record added".to_string()),
        FormMode::Edit => Some("Record updated".to_string()),
        FormMode::Delete => Some("Record deleted".to_string()),
        FormMode::View => None,
    };

    Ok(Json(ApiResponse::success(
        Some(SubmitOutcomeDto { context, record }),
        message,
        None,
    )))
}
