//! Ride records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Email, Price};

/// A ride offered by a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    /// Ride number (unique id).
    pub rno: i64,

    /// Per-seat price asked by the driver.
    pub price: Price,

    /// Date the ride departs.
    pub rdate: NaiveDate,

    /// Number of seats offered.
    pub seats: i64,

    /// Location code of the ride's origin.
    pub src: String,

    /// Location code of the ride's destination.
    pub dst: String,

    /// The driver's email. Establishes ownership of the ride and of
    /// every booking on it.
    pub driver: Email,
}
