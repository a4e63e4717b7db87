//! Inbox messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Email;

/// A store-persisted notification delivered between members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxMessage {
    /// Recipient email.
    pub email: Email,

    /// When the message was sent.
    pub msg_timestamp: DateTime<Utc>,

    /// Sender email.
    pub sender: Email,

    /// Free-text message body.
    pub content: String,

    /// The ride or request id the message is about.
    pub rno: i64,

    /// Whether the recipient has seen the message.
    pub seen: bool,
}

impl InboxMessage {
    /// Build an unseen message stamped with the current time.
    #[must_use]
    pub fn new(recipient: Email, sender: Email, content: String, rno: i64) -> Self {
        Self {
            email: recipient,
            msg_timestamp: Utc::now(),
            sender,
            content,
            rno,
            seen: false,
        }
    }
}
