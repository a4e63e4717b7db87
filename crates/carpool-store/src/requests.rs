//! Ride request repository.

use carpool_core::{Email, RideRequest};
use rusqlite::{params, OptionalExtension, Row};

use crate::{email_column, price_column, Result, Store};

fn request_from_row(row: &Row<'_>) -> rusqlite::Result<RideRequest> {
    Ok(RideRequest {
        rid: row.get(0)?,
        email: email_column(row, 1)?,
        date: row.get(2)?,
        pickup: row.get(3)?,
        dropoff: row.get(4)?,
        price: price_column(row, 5)?,
    })
}

impl Store {
    /// Compute the next request id as `max(rid) + 1` (1 when the table
    /// is empty).
    ///
    /// This is a plain read, not an atomic sequence: two concurrent
    /// writers could observe the same maximum and collide. The shell is
    /// single-writer, so the race is accepted rather than mitigated.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn next_rid(&self) -> Result<i64> {
        let max: i64 = self
            .conn()
            .query_row("SELECT COALESCE(MAX(rid), 0) FROM requests", [], |row| {
                row.get(0)
            })?;
        Ok(max + 1)
    }

    /// Insert a ride request.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_request(&self, request: &RideRequest) -> Result<()> {
        self.conn().execute(
            "INSERT INTO requests (rid, email, date, pickup, dropoff, price)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                request.rid,
                request.email.as_str(),
                request.date,
                request.pickup,
                request.dropoff,
                request.price.dollars(),
            ],
        )?;
        Ok(())
    }

    /// List all requests posted by the given member, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_requests_for_member(&self, email: &Email) -> Result<Vec<RideRequest>> {
        let mut stmt = self.conn().prepare(
            "SELECT DISTINCT rid, email, date, pickup, dropoff, price
             FROM requests WHERE email = ?1",
        )?;
        let rows = stmt.query_map(params![email.as_str()], request_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Filter requests by exact pickup location code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_requests_by_pickup(&self, lcode: &str) -> Result<Vec<RideRequest>> {
        let mut stmt = self.conn().prepare(
            "SELECT DISTINCT rid, email, date, pickup, dropoff, price
             FROM requests WHERE pickup = ?1",
        )?;
        let rows = stmt.query_map(params![lcode], request_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Match requests whose pickup location lies in the given city
    /// (case-insensitive), via a join on the location table.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_requests_by_city(&self, city: &str) -> Result<Vec<RideRequest>> {
        let mut stmt = self.conn().prepare(
            "SELECT DISTINCT requests.rid, requests.email, requests.date,
                             requests.pickup, requests.dropoff, requests.price
             FROM requests, locations
             WHERE requests.pickup = locations.lcode
               AND LOWER(locations.city) = LOWER(?1)",
        )?;
        let rows = stmt.query_map(params![city], request_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Look up a request by id, regardless of who posted it.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_request(&self, rid: i64) -> Result<Option<RideRequest>> {
        let request = self
            .conn()
            .query_row(
                "SELECT rid, email, date, pickup, dropoff, price FROM requests WHERE rid = ?1",
                params![rid],
                request_from_row,
            )
            .optional()?;
        Ok(request)
    }

    /// Delete a request only if both id and owner match.
    ///
    /// Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_request_for_member(&self, rid: i64, email: &Email) -> Result<usize> {
        let deleted = self.conn().execute(
            "DELETE FROM requests WHERE rid = ?1 AND email = ?2",
            params![rid, email.as_str()],
        )?;
        tracing::debug!(rid, email = %email, deleted, "request delete");
        Ok(deleted)
    }
}
