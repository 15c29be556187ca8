//! User data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user as persisted by the store.
///
/// Field names match the wire format returned to clients. Timestamps are
/// UTC and serialize as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned serial identifier
    pub id: i32,
    /// Unique email address
    pub email: String,
    /// First name as submitted, trimmed
    pub first_name: String,
    /// Last name as submitted, trimmed
    pub last_name: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}
