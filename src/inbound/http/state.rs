//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::RegistrationService;
use crate::domain::ports::SignupMetrics;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration core service over the configured user store.
    pub registration: Arc<RegistrationService>,
    /// Sink the signup handlers report terminal outcomes to.
    pub metrics: Arc<dyn SignupMetrics>,
}
