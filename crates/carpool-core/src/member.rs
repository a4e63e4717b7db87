//! Member records.

use serde::{Deserialize, Serialize};

use crate::Email;

/// A registered member, as read from the member store.
///
/// Only the columns the shell actually queries are carried here; the
/// full member schema is owned externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// The member's email (unique identity, lowercase).
    pub email: Email,

    /// The stored credential.
    pub pwd: String,
}
