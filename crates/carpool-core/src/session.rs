//! Login sessions.

use crate::{Email, Member};

/// The authenticated identity bound to a running shell.
///
/// A session is created only on a successful credential match and is
/// immutable from then on; logout discards it. At most one session is
/// active per shell at a time.
#[derive(Debug, Clone)]
pub struct Session {
    email: Email,
    pwd: String,
}

impl Session {
    /// Create a session from a freshly authenticated member record.
    #[must_use]
    pub fn new(member: Member) -> Self {
        Self {
            email: member.email,
            pwd: member.pwd,
        }
    }

    /// The authenticated email.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The credential snapshot taken at login.
    #[must_use]
    pub fn pwd(&self) -> &str {
        &self.pwd
    }
}
