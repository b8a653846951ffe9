use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::ports::handlers::{self, PortState};
use crate::features::ports::services::{FormService, PortService};

/// Create routes for the ports feature
///
/// Note: operators are trusted internal users, no authentication is applied
pub fn routes(port_service: Arc<PortService>, form_service: Arc<FormService>) -> Router {
    let state = PortState {
        port_service,
        form_service,
    };

    Router::new()
        .route("/api/ports/query", post(handlers::query_ports))
        .route("/api/ports/columns", get(handlers::get_columns))
        .route(
            "/api/ports/form",
            get(handlers::open_form).post(handlers::submit_form),
        )
        .route("/api/ports/search", post(handlers::update_search))
        .route("/api/ports/{id}", get(handlers::get_port))
        .with_state(state)
}
