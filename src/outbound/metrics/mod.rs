//! Outbound adapters for metrics exporting.
//!
//! This module provides the Prometheus-backed implementation of the
//! domain's signup metrics port.

mod prometheus_signup;

pub use prometheus_signup::PrometheusSignupMetrics;
