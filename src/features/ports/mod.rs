//! Port reference dataset administration.
//!
//! Backs the operator grid and the add/edit/view/delete record form. Records
//! live in an external json-server collection reached through [`PortStore`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/ports/query` | Page of ports for a grid state |
//! | GET | `/api/ports/columns` | Grid column definitions |
//! | GET | `/api/ports/{id}` | Get port by id |
//! | GET | `/api/ports/form` | Open the record form |
//! | POST | `/api/ports/form` | Submit the record form |
//! | POST | `/api/ports/search` | Update the search box state |

pub mod clients;
pub mod context;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::{JsonServerClient, PortStore};
pub use context::AdminContext;
pub use services::{FormService, PortService};
