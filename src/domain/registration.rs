//! Registration domain service.
//!
//! Takes validated signup details, performs the single insert through the
//! user store port, and classifies the outcome for inbound adapters.

use std::sync::Arc;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Error, SignupDetails, User};

/// Registers new users through the [`UserStore`] port.
///
/// The service performs exactly one insert per request and never retries;
/// uniqueness is enforced by the store's constraint rather than by a
/// read-then-write check.
pub struct RegistrationService {
    store: Arc<dyn UserStore>,
}

impl RegistrationService {
    /// Create a new service over the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    fn map_store_error(error: UserStoreError) -> Error {
        match error {
            UserStoreError::DuplicateEmail => Error::conflict("email already exists"),
            UserStoreError::Connection { message } => {
                Error::internal(format!("user store unavailable: {message}"))
            }
            UserStoreError::Query { message } => {
                Error::internal(format!("user store error: {message}"))
            }
        }
    }

    /// Insert the validated details and return the stored user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::Conflict`] when the email is
    /// already registered and [`crate::domain::ErrorCode::InternalError`]
    /// for any other store failure. The internal diagnostic stays on the
    /// error for logging; adapters redact it before it reaches a client.
    pub async fn register(&self, details: &SignupDetails) -> Result<User, Error> {
        self.store
            .insert_user(details)
            .await
            .map_err(Self::map_store_error)
    }
}
