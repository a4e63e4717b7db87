//! Ride requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Email, Price};

/// A posted intent to travel, distinct from a [`Ride`](crate::Ride)
/// (a driver's offered trip) and a [`Booking`](crate::Booking) (a seat
/// reservation on a ride).
///
/// Requests are owned by the posting member and deletable only by them.
/// Ids are assigned by the store as `max(rid) + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRequest {
    /// Request id.
    pub rid: i64,

    /// Email of the requesting member.
    pub email: Email,

    /// Date the ride should start on.
    pub date: NaiveDate,

    /// Pickup location code.
    pub pickup: String,

    /// Dropoff location code.
    pub dropoff: String,

    /// Maximum price the requester will pay per seat.
    pub price: Price,
}
