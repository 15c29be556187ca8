//! PostgreSQL-backed `UserStore` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `UserStore` port. The insert uses
//! `INSERT ... RETURNING` so the stored row, including the serial `id` and
//! both timestamps, comes back atomically with the write; there is no
//! follow-up read and therefore no read-after-write race.
//!
//! # Conflict classification
//!
//! A violated unique constraint is recognised through Diesel's structured
//! `DatabaseErrorKind::UniqueViolation`, never by inspecting error message
//! text. Everything else is surfaced as a connection or query failure for
//! the domain to classify as internal.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{SignupDetails, User};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserStore` port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain user store errors.
fn map_pool_error(error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to domain user store errors.
fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserStoreError::duplicate_email()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserStoreError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => UserStoreError::query(info.message().to_owned()),
        other => UserStoreError::query(other.to_string()),
    }
}

/// Convert a database row to a domain user.
fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id,
        email: row.email,
        first_name: row.first_name,
        last_name: row.last_name,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn insert_user(&self, details: &SignupDetails) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            email: details.email(),
            first_name: details.first_name(),
            last_name: details.last_name(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_user(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(err, UserStoreError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_email() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_string()),
        );
        let err = map_diesel_error(diesel_err);

        assert_eq!(err, UserStoreError::DuplicateEmail);
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_string()),
        );
        let err = map_diesel_error(diesel_err);

        assert!(matches!(err, UserStoreError::Connection { .. }));
    }

    #[rstest]
    fn other_database_errors_map_to_query_errors() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation,
            Box::new("null value in column".to_string()),
        );
        let err = map_diesel_error(diesel_err);

        assert!(matches!(err, UserStoreError::Query { .. }));
        assert!(err.to_string().contains("null value"));
    }

    #[rstest]
    fn non_database_errors_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(err, UserStoreError::Query { .. }));
    }

    #[rstest]
    fn rows_convert_to_domain_users() {
        let now = Utc::now();
        let row = UserRow {
            id: 3,
            email: "ada@example.com".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            created_at: now,
            updated_at: now,
        };

        let user = row_to_user(row);

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.created_at, now);
    }
}
