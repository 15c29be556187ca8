//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing
//! concrete implementations of domain port traits:
//!
//! - **persistence**: the PostgreSQL-backed user store using Diesel ORM
//! - **metrics**: the Prometheus-backed signup outcome counters
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod metrics;
pub mod persistence;
