//! HTTP gateway: the request/response wrapper around the scoring engine.
//!
//! Stateless beyond the shared engine handle: one engine invocation per
//! request, no cross-request state, CORS open to all origins for the
//! interactive client.

mod error;
mod handlers;
mod router;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};
