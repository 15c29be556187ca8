//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's user
//! store port, backed by PostgreSQL via Diesel with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the store only translates between Diesel rows and
//!   domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Strongly typed errors**: all database errors are mapped to the
//!   domain's `UserStoreError` before they leave this module.
//!
//! # Example
//!
//! ```ignore
//! use signup_service::outbound::persistence::{DbPool, DieselUserStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/signup")).await?;
//! let store = DieselUserStore::new(pool);
//! ```

mod diesel_user_store;
mod migrate;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use migrate::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
