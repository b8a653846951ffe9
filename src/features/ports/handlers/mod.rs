mod context_handler;
mod form_handler;
mod port_handler;

pub use context_handler::*;
pub use form_handler::*;
pub use port_handler::*;
