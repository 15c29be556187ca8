//! Domain port surface for recording signup request outcomes.
//!
//! This port enables observability of signup outcomes without coupling
//! domain logic to a specific metrics backend. Implementations may export
//! to Prometheus or simply discard recordings in tests.

/// Labels attached to every outcome recording.
///
/// `status_code` is the HTTP status of the terminal response, captured once
/// by the handler so repeated reads cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcomeLabels {
    /// Request method as received, such as `POST`.
    pub method: String,
    /// Final HTTP status code of the response.
    pub status_code: u16,
}

/// Metrics recording port for signup request outcomes.
///
/// Recording is fire and forget: implementations must not block the request
/// path and have no failure mode the caller could act on.
pub trait SignupMetrics: Send + Sync {
    /// Record one terminal signup outcome.
    fn record_outcome(&self, labels: &SignupOutcomeLabels);
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSignupMetrics;

impl SignupMetrics for NoOpSignupMetrics {
    fn record_outcome(&self, _labels: &SignupOutcomeLabels) {}
}
