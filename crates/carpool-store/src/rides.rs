//! Ride repository.
//!
//! The shell itself never searches or offers rides (those verbs are
//! unimplemented), but rides anchor booking ownership, so the
//! repository carries the writes the rest of the suite needs.

use carpool_core::Ride;
use rusqlite::{params, OptionalExtension};

use crate::{email_column, price_column, Result, Store};

impl Store {
    /// Insert a ride record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_ride(&self, ride: &Ride) -> Result<()> {
        self.conn().execute(
            "INSERT INTO rides (rno, price, rdate, seats, src, dst, driver)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                ride.rno,
                ride.price.dollars(),
                ride.rdate,
                ride.seats,
                ride.src,
                ride.dst,
                ride.driver.as_str(),
            ],
        )?;
        Ok(())
    }

    /// Look up a ride by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_ride(&self, rno: i64) -> Result<Option<Ride>> {
        let ride = self
            .conn()
            .query_row(
                "SELECT rno, price, rdate, seats, src, dst, driver FROM rides WHERE rno = ?1",
                params![rno],
                |row| {
                    Ok(Ride {
                        rno: row.get(0)?,
                        price: price_column(row, 1)?,
                        rdate: row.get(2)?,
                        seats: row.get(3)?,
                        src: row.get(4)?,
                        dst: row.get(5)?,
                        driver: email_column(row, 6)?,
                    })
                },
            )
            .optional()?;
        Ok(ride)
    }
}
