//! Booking repository.
//!
//! Every read and delete here is scoped to the driver of the booked
//! ride via a join on `rides.driver`. A booking id that belongs to some
//! other driver's ride is invisible to the caller, which is what lets
//! the shell degrade an ownership miss into "show your own bookings".

use carpool_core::{Booking, Email};
use rusqlite::{params, OptionalExtension, Row};

use crate::{email_column, Result, Store};

fn booking_from_row(row: &Row<'_>) -> rusqlite::Result<Booking> {
    Ok(Booking {
        bno: row.get(0)?,
        email: email_column(row, 1)?,
        rno: row.get(2)?,
        cost: row.get(3)?,
        seats: row.get(4)?,
        pickup: row.get(5)?,
        dropoff: row.get(6)?,
    })
}

impl Store {
    /// List all bookings on rides the given member drives.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings_for_driver(&self, driver: &Email) -> Result<Vec<Booking>> {
        let mut stmt = self.conn().prepare(
            "SELECT DISTINCT bookings.bno, bookings.email, bookings.rno, bookings.cost,
                             bookings.seats, bookings.pickup, bookings.dropoff
             FROM bookings, rides
             WHERE rides.driver = ?1 AND rides.rno = bookings.rno",
        )?;
        let rows = stmt.query_map(params![driver.as_str()], booking_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Find one booking, constrained to rides the given member drives.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_booking_for_driver(&self, bno: i64, driver: &Email) -> Result<Option<Booking>> {
        let booking = self
            .conn()
            .query_row(
                "SELECT DISTINCT bookings.bno, bookings.email, bookings.rno, bookings.cost,
                                 bookings.seats, bookings.pickup, bookings.dropoff
                 FROM bookings, rides
                 WHERE bookings.bno = ?1 AND rides.driver = ?2 AND rides.rno = bookings.rno",
                params![bno, driver.as_str()],
                booking_from_row,
            )
            .optional()?;
        Ok(booking)
    }

    /// Delete one booking, re-validated against the same ownership join.
    ///
    /// Returns the number of rows deleted (0 when the id exists but is
    /// booked on somebody else's ride).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_booking_for_driver(&self, bno: i64, driver: &Email) -> Result<usize> {
        let deleted = self.conn().execute(
            "DELETE FROM bookings
             WHERE bno = ?1
               AND rno IN (SELECT rno FROM rides WHERE driver = ?2)",
            params![bno, driver.as_str()],
        )?;
        tracing::debug!(bno, driver = %driver, deleted, "booking delete");
        Ok(deleted)
    }

    /// Insert a booking record (test fixtures and admin tooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_booking(&self, booking: &Booking) -> Result<()> {
        self.conn().execute(
            "INSERT INTO bookings (bno, email, rno, cost, seats, pickup, dropoff)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                booking.bno,
                booking.email.as_str(),
                booking.rno,
                booking.cost,
                booking.seats,
                booking.pickup,
                booking.dropoff,
            ],
        )?;
        Ok(())
    }
}
