//! Domain ports and supporting types for the hexagonal boundary.

mod signup_metrics;
mod user_store;

pub use signup_metrics::{NoOpSignupMetrics, SignupMetrics, SignupOutcomeLabels};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{InMemoryUserStore, UserStore, UserStoreError};
