//! Web layer for the dock availability map.
//!
//! Serves the map page, the stations API, and the legend fragment.

mod dto;
mod routes;
mod state;
mod style;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use style::{MarkerStyle, marker_style};
pub use templates::*;
