//! Inbox repository.
//!
//! Seen flags are stored as `'y'` / `'n'` text, matching the external
//! schema.

use carpool_core::{Email, InboxMessage};
use rusqlite::{params, Row};

use crate::{email_column, Result, Store};

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<InboxMessage> {
    let seen: String = row.get(5)?;
    Ok(InboxMessage {
        email: email_column(row, 0)?,
        msg_timestamp: row.get(1)?,
        sender: email_column(row, 2)?,
        content: row.get(3)?,
        rno: row.get(4)?,
        seen: seen == "y",
    })
}

impl Store {
    /// Persist a message for its recipient.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn send_message(&self, message: &InboxMessage) -> Result<()> {
        self.conn().execute(
            "INSERT INTO inbox (email, msg_timestamp, sender, content, rno, seen)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                message.email.as_str(),
                message.msg_timestamp,
                message.sender.as_str(),
                message.content,
                message.rno,
                if message.seen { "y" } else { "n" },
            ],
        )?;
        tracing::debug!(to = %message.email, from = %message.sender, "inbox message sent");
        Ok(())
    }

    /// All messages addressed to the given member, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_messages_for(&self, email: &Email) -> Result<Vec<InboxMessage>> {
        let mut stmt = self.conn().prepare(
            "SELECT email, msg_timestamp, sender, content, rno, seen
             FROM inbox WHERE email = ?1",
        )?;
        let rows = stmt.query_map(params![email.as_str()], message_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Mark every message addressed to the member as seen, in one bulk
    /// update. Returns the number of rows touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_all_seen(&self, email: &Email) -> Result<usize> {
        let updated = self.conn().execute(
            "UPDATE inbox SET seen = 'y' WHERE email = ?1",
            params![email.as_str()],
        )?;
        Ok(updated)
    }
}
