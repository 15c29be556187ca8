//! Port abstraction for user persistence adapters and their errors.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{SignupDetails, User};

/// Persistence errors raised by user store adapters.
///
/// `DuplicateEmail` is a structured classification of the store's unique
/// constraint, so callers never inspect driver error text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// The email address is already registered.
    #[error("user store rejected a duplicate email")]
    DuplicateEmail,

    /// Store connection could not be established or checked out.
    #[error("user store connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl UserStoreError {
    /// Create a duplicate-email classification.
    pub fn duplicate_email() -> Self {
        Self::DuplicateEmail
    }

    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for persisting new users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored row.
    ///
    /// The store assigns `id` and both timestamps; the returned [`User`] is
    /// produced by the same statement as the insert, never by a follow-up
    /// read.
    async fn insert_user(&self, details: &SignupDetails) -> Result<User, UserStoreError>;
}

/// Deterministic in-memory store for tests and local development.
///
/// Assigns serial identifiers starting at 1 and enforces email uniqueness
/// like the real store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: Mutex<InMemoryState>,
}

#[derive(Debug)]
struct InMemoryState {
    users: Vec<User>,
    next_id: i32,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_user(&self, details: &SignupDetails) -> Result<User, UserStoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| UserStoreError::query("state lock poisoned"))?;

        if state.users.iter().any(|user| user.email == details.email()) {
            return Err(UserStoreError::duplicate_email());
        }

        let now = Utc::now();
        let user = User {
            id: state.next_id,
            email: details.email().to_owned(),
            first_name: details.first_name().to_owned(),
            last_name: details.last_name().to_owned(),
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.users.push(user.clone());
        Ok(user)
    }
}
