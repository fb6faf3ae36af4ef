//! SongLedger API - HTTP facade over the store and diff engine
//!
//! Pure glue: translates HTTP-shaped requests into store and diff calls,
//! attaches the caller's identity to writes and identity-scoped reads, and
//! maps the error taxonomy onto status codes. No business logic lives here.

pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
