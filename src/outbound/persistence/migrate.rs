//! Embedded schema migrations applied at startup.
//!
//! The `users` DDL ships inside the binary, so a fresh database reaches the
//! expected schema before the server starts accepting signups. The Diesel
//! migration harness is synchronous; it runs on a blocking task to keep the
//! async runtime free.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Embedded migrations from the crate's migrations directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open the migration connection.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),

    /// The harness reported a failed migration.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },

    /// The blocking migration task was cancelled or panicked.
    #[error("migration task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Apply all pending migrations against the given database.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection cannot be established or
/// any migration fails; the service must not start serving in that state.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || -> Result<usize, MigrationError> {
        let mut conn = PgConnection::establish(&url)?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })?;
        Ok(versions.len())
    })
    .await??;

    info!(applied, "database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Checks the embedded migration set is present.
    use diesel::migration::MigrationSource;

    use super::*;

    #[test]
    fn users_migration_is_embedded() {
        let migrations = MigrationSource::<diesel::pg::Pg>::migrations(&MIGRATIONS)
            .expect("embedded migrations are readable");
        assert!(!migrations.is_empty());
    }
}
