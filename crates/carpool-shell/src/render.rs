//! Row rendering.
//!
//! Result sets are printed as parenthesized tuples, one row per line.

use carpool_core::{Booking, InboxMessage, RideRequest};

/// Format one booking row.
#[must_use]
pub fn booking_line(booking: &Booking) -> String {
    format!(
        "({}, {}, {}, {}, {}, {}, {})",
        booking.bno,
        booking.email,
        booking.rno,
        booking.cost,
        booking.seats,
        booking.pickup,
        booking.dropoff,
    )
}

/// Format one ride request row.
#[must_use]
pub fn request_line(request: &RideRequest) -> String {
    format!(
        "({}, {}, {}, {}, {}, {})",
        request.rid,
        request.email,
        request.date,
        request.pickup,
        request.dropoff,
        request.price,
    )
}

/// Format one inbox message row.
#[must_use]
pub fn message_line(message: &InboxMessage) -> String {
    format!(
        "({}, {}, {}, {}, {})",
        message.msg_timestamp.format("%Y-%m-%d %H:%M:%S"),
        message.sender,
        message.content,
        message.rno,
        if message.seen { "y" } else { "n" },
    )
}
