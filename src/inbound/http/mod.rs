//! HTTP adapters translating web requests into domain calls.
//!
//! Handlers stay thin: they decode payloads, delegate to the domain
//! services held in [`HttpState`], and let [`error`] render failures with
//! the shared `{"error": "..."}` body.

pub mod error;
pub mod metrics;
pub mod signup;
pub mod state;
pub mod welcome;

pub use error::ApiResult;
pub use state::HttpState;
