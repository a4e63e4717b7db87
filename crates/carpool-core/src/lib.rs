//! Core types for the carpool shell.
//!
//! This crate provides the foundational types used throughout carpool:
//!
//! - **Identity**: [`Email`] (case-insensitive member identity)
//! - **Money**: [`Price`] (non-negative, integer dollars)
//! - **Entities**: [`Member`], [`Ride`], [`Booking`], [`RideRequest`],
//!   [`Location`], [`InboxMessage`]
//! - **Session**: [`Session`] (the authenticated identity bound to a shell)
//!
//! All types are plain data; persistence lives in `carpool-store` and the
//! interactive surface in `carpool-shell`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod booking;
pub mod email;
pub mod inbox;
pub mod location;
pub mod member;
pub mod price;
pub mod request;
pub mod ride;
pub mod session;

pub use booking::Booking;
pub use email::{Email, EmailError};
pub use inbox::InboxMessage;
pub use location::Location;
pub use member::Member;
pub use price::{Price, PriceError};
pub use request::RideRequest;
pub use ride::Ride;
pub use session::Session;
