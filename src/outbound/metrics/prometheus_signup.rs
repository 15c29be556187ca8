//! Prometheus adapter for signup outcome metrics.
//!
//! This adapter exports signup request outcomes to Prometheus via the
//! `prometheus` crate. Metrics are registered with a provided registry and
//! exposed via the `/metrics` endpoint.

use prometheus::{CounterVec, Opts, Registry};

use crate::domain::ports::{SignupMetrics, SignupOutcomeLabels};

/// Endpoint label value attached to every API request sample.
const SIGNUP_ENDPOINT: &str = "/signup";

/// Prometheus-backed signup metrics recorder.
///
/// One recorded outcome increments two counters from the same captured
/// status code, so the two series can never disagree about a request.
///
/// # Metric Specification
///
/// - **`api_requests_total`** (counter), labels `method`, `endpoint`,
///   `status_code`
/// - **`signup_requests_total`** (counter), label `status_code`
pub struct PrometheusSignupMetrics {
    api_requests_total: CounterVec,
    signup_requests_total: CounterVec,
}

impl PrometheusSignupMetrics {
    /// Create and register both counters with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if either counter cannot be registered, for example
    /// when a metric with the same name already exists in the registry.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let api_requests_total = CounterVec::new(
            Opts::new("api_requests_total", "Total number of API requests"),
            &["method", "endpoint", "status_code"],
        )?;
        registry.register(Box::new(api_requests_total.clone()))?;

        let signup_requests_total = CounterVec::new(
            Opts::new("signup_requests_total", "Total number of signup requests"),
            &["status_code"],
        )?;
        registry.register(Box::new(signup_requests_total.clone()))?;

        Ok(Self {
            api_requests_total,
            signup_requests_total,
        })
    }
}

impl SignupMetrics for PrometheusSignupMetrics {
    fn record_outcome(&self, labels: &SignupOutcomeLabels) {
        let status_code = labels.status_code.to_string();
        self.api_requests_total
            .with_label_values(&[&labels.method, SIGNUP_ENDPOINT, &status_code])
            .inc();
        self.signup_requests_total
            .with_label_values(&[&status_code])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(method: &str, status_code: u16) -> SignupOutcomeLabels {
        SignupOutcomeLabels {
            method: method.to_owned(),
            status_code,
        }
    }

    #[test]
    fn registers_both_counters_with_registry() {
        let registry = Registry::new();
        let metrics = PrometheusSignupMetrics::new(&registry)
            .expect("metric registration should succeed");

        metrics.record_outcome(&outcome("POST", 201));

        let families = registry.gather();
        assert!(
            families.iter().any(|f| f.name() == "api_requests_total"),
            "api counter should be registered"
        );
        assert!(
            families.iter().any(|f| f.name() == "signup_requests_total"),
            "signup counter should be registered"
        );
    }

    #[test]
    fn one_outcome_increments_both_counters_once() {
        let registry = Registry::new();
        let metrics = PrometheusSignupMetrics::new(&registry)
            .expect("metric registration should succeed");

        metrics.record_outcome(&outcome("POST", 201));

        let api = metrics
            .api_requests_total
            .with_label_values(&["POST", "/signup", "201"]);
        let signup = metrics.signup_requests_total.with_label_values(&["201"]);
        assert_eq!(api.get() as u64, 1);
        assert_eq!(signup.get() as u64, 1);
    }

    #[test]
    fn statuses_land_in_separate_series() {
        let registry = Registry::new();
        let metrics = PrometheusSignupMetrics::new(&registry)
            .expect("metric registration should succeed");

        metrics.record_outcome(&outcome("POST", 201));
        metrics.record_outcome(&outcome("POST", 409));
        metrics.record_outcome(&outcome("GET", 405));

        let created = metrics
            .api_requests_total
            .with_label_values(&["POST", "/signup", "201"]);
        let conflicted = metrics
            .api_requests_total
            .with_label_values(&["POST", "/signup", "409"]);
        let rejected = metrics
            .api_requests_total
            .with_label_values(&["GET", "/signup", "405"]);
        assert_eq!(created.get() as u64, 1);
        assert_eq!(conflicted.get() as u64, 1);
        assert_eq!(rejected.get() as u64, 1);

        let signup_409 = metrics.signup_requests_total.with_label_values(&["409"]);
        assert_eq!(signup_409.get() as u64, 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = Registry::new();
        let _metrics = PrometheusSignupMetrics::new(&registry)
            .expect("first registration should succeed");

        assert!(PrometheusSignupMetrics::new(&registry).is_err());
    }
}
