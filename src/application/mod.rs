// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the presentation (CLI) and the services
// - Holds per-user state explicitly in a session object
// - Translates domain results into DTOs and UI errors

pub mod dto;
pub mod error_handling;
pub mod session;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use session::{CatalogSession, FlashKind, FlashMessage, LoadState, SubmitOutcome};
pub use state::AppState;
