//! Booking records.

use serde::{Deserialize, Serialize};

use crate::Email;

/// A seat reservation on a ride.
///
/// A booking is deletable only by the driver of the ride it references;
/// that ownership is enforced with a join at query time, not a stored
/// check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Booking number (unique id).
    pub bno: i64,

    /// Email of the booked member.
    pub email: Email,

    /// The ride this booking reserves seats on.
    pub rno: i64,

    /// Agreed cost per seat.
    pub cost: i64,

    /// Number of seats booked.
    pub seats: i64,

    /// Pickup location code.
    pub pickup: String,

    /// Dropoff location code.
    pub dropoff: String,
}
