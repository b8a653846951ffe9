use utoipa::{Modify, OpenApi};

use crate::features::ports::{context, dtos as ports_dtos, handlers as ports_handlers, models};
use crate::shared::types::{ApiResponse, Meta, SortDirection};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Ports
        ports_handlers::query_ports,
        ports_handlers::get_columns,
        ports_handlers::get_port,
        // Record form
        ports_handlers::open_form,
        ports_handlers::submit_form,
        // Search
        ports_handlers::update_search,
    ),
    components(
        schemas(
            // Shared
            Meta,
            SortDirection,
            // Ports
            models::PortRecord,
            models::PortCode,
            ports_dtos::GridStateDto,
            ports_dtos::SortItemDto,
            ports_dtos::FilterClause,
            ports_dtos::PortPageDto,
            ports_dtos::GridColumnDto,
            ports_dtos::GridLayoutDto,
            ApiResponse<ports_dtos::PortPageDto>,
            ApiResponse<ports_dtos::GridLayoutDto>,
            ApiResponse<models::PortRecord>,
            // Record form
            context::AdminContext,
            ports_dtos::FormMode,
            ports_dtos::PortFormFields,
            ports_dtos::FormViewDto,
            ports_dtos::SubmitFormDto,
            ports_dtos::SubmitOutcomeDto,
            ApiResponse<ports_dtos::FormViewDto>,
            ApiResponse<ports_dtos::SubmitOutcomeDto>,
            // Search
            ports_dtos::SearchActionDto,
            ApiResponse<context::AdminContext>,
        )
    ),
    tags(
        (name = "ports", description = "Port reference dataset: grid queries and record form"),
    ),
    info(
        title = "Port Admin API",
        version = "0.1.0",
        description = "Administrative API for the port reference dataset",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
