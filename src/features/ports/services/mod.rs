mod form_service;
pub mod grid_columns;
mod port_service;
pub mod query_translator;

pub use form_service::{generate_record_id, FormService};
pub use port_service::PortService;
