//! Member repository.

use carpool_core::{Email, Member};
use rusqlite::{params, OptionalExtension};

use crate::{email_column, Result, Store};

impl Store {
    /// Look up a member by exact (email, credential) match.
    ///
    /// The email is already lowercase (folded at [`Email`]
    /// construction); the password comparison is exact.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn authenticate(&self, email: &Email, pwd: &str) -> Result<Option<Member>> {
        let member = self
            .conn()
            .query_row(
                "SELECT email, pwd FROM members WHERE email = ?1 AND pwd = ?2",
                params![email.as_str(), pwd],
                |row| {
                    Ok(Member {
                        email: email_column(row, 0)?,
                        pwd: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(member)
    }

    /// Insert a member record (test fixtures and admin tooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (e.g. duplicate email).
    pub fn insert_member(&self, member: &Member) -> Result<()> {
        self.conn().execute(
            "INSERT INTO members (email, pwd) VALUES (?1, ?2)",
            params![member.email.as_str(), member.pwd],
        )?;
        Ok(())
    }
}
