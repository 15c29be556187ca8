//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate with `diesel print-schema` after a migration
//! changes the schema.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email` carries a unique constraint; the store surfaces its
    /// violation as a structured duplicate classification.
    users (id) {
        /// Primary key: serial identifier assigned by the database.
        id -> Int4,
        /// Unique email address (max 255 characters).
        email -> Varchar,
        /// First name (max 100 characters).
        first_name -> Varchar,
        /// Last name (max 100 characters).
        last_name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
