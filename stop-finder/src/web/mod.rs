//! Web layer for the stop finder.
//!
//! A form for the place name, a result page, and a generic error page.
//! Non-HTML clients get the same lookup as JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
