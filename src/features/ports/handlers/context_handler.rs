use axum::Json;

use crate::core::extractor::AppJson;
use crate::features::ports::context::AdminContext;
use crate::features::ports::dtos::SearchActionDto;
use crate::shared::types::ApiResponse;

/// Update the search box state
///
/// Returns the context to send back with the next grid query.
#[utoipa::path(
    post,
    path = "/api/ports/search",
    request_body = SearchActionDto,
    responses(
        (status = 200, description = "Updated context", body = ApiResponse<AdminContext>),
        (status = 400, description = "Invalid request body")
    ),
    tag = "ports"
)]
pub async fn update_search(
    AppJson(dto): AppJson<SearchActionDto>,
) -> Json<ApiResponse<AdminContext>> {
    let mut context = dto.context;

    if let Some(input) = dto.input {
        context.set_search_input(input);
    }
    if dto.commit {
        context.commit_search();
        tracing::debug!("Search committed: '{}'", context.search);
    }

    Json(ApiResponse::success(Some(context), None, None))
}
