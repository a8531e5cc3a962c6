//! Web layer for the rail atlas.
//!
//! Serves Overpass query text and renders maps from posted datasets.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
