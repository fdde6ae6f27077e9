//! HTTP API module for the rewards estimation engine.
//!
//! This module provides the REST API endpoint for estimating rewards
//! outcomes for a card tier, housing payment elections and card spend.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EstimateRequest;
pub use response::ApiError;
pub use state::AppState;
