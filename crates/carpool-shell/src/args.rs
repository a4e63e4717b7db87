//! Per-command argument parsers.
//!
//! Each parser turns the raw remainder-of-line string into a typed
//! argument record or a [`ParseError`] carrying the command's usage
//! text. Parsers never read further input and never touch the store;
//! id existence and location validity are checked later against the
//! database.

use carpool_core::Price;
use chrono::NaiveDate;

/// Usage text for `cancel_booking`.
pub const USAGE_CANCEL_BOOKING: &str = "usage: cancel_booking <bno>\n  bno: the booking identification number";

/// Usage text for `post_ride_request`.
pub const USAGE_POST_RIDE_REQUEST: &str = "usage: post_ride_request <date> <pickup> <dropoff> <price>\n  date:    date the ride should start on (YYYY-MM-DD)\n  pickup:  location code of the pickup location\n  dropoff: location code of the dropoff location\n  price:   maximum price per seat (non-negative integer)";

/// Usage text for `delete_ride_request`.
pub const USAGE_DELETE_RIDE_REQUEST: &str = "usage: delete_ride_request <rid>\n  rid: the ride request identification number";

/// Usage text for `select_ride_request`.
pub const USAGE_SELECT_RIDE_REQUEST: &str = "usage: select_ride_request <rid>\n  rid: the ride request identification number";

/// Usage text for `search_ride_requests_by_location_code`.
pub const USAGE_SEARCH_BY_LOCATION_CODE: &str =
    "usage: search_ride_requests_by_location_code <lcode>";

/// Usage text for `search_ride_requests_by_city_name`.
pub const USAGE_SEARCH_BY_CITY_NAME: &str = "usage: search_ride_requests_by_city_name <city>";

/// A recoverable argument parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// What was wrong with the input.
    pub message: String,

    /// The usage text of the command that rejected it.
    pub usage: &'static str,
}

impl ParseError {
    fn new(message: impl Into<String>, usage: &'static str) -> Self {
        Self {
            message: message.into(),
            usage,
        }
    }
}

/// Typed arguments for `cancel_booking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelBookingArgs {
    /// The booking to cancel.
    pub bno: i64,
}

/// Typed arguments for `post_ride_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRideRequestArgs {
    /// Date the ride should start on.
    pub date: NaiveDate,
    /// Pickup location code.
    pub pickup: String,
    /// Dropoff location code.
    pub dropoff: String,
    /// Maximum price per seat.
    pub price: Price,
}

fn tokens(arg: &str) -> Vec<&str> {
    arg.split_whitespace().collect()
}

fn parse_id(arg: &str, what: &str, usage: &'static str) -> Result<i64, ParseError> {
    let tokens = tokens(arg);
    let [token] = tokens.as_slice() else {
        return Err(ParseError::new(
            format!("expected exactly one argument: {what}"),
            usage,
        ));
    };
    token
        .parse()
        .map_err(|_| ParseError::new(format!("invalid {what}: {token:?}"), usage))
}

/// Parse `cancel_booking` arguments.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a single integer.
pub fn parse_cancel_booking(arg: &str) -> Result<CancelBookingArgs, ParseError> {
    let bno = parse_id(arg, "bno", USAGE_CANCEL_BOOKING)?;
    Ok(CancelBookingArgs { bno })
}

/// Parse `delete_ride_request` arguments.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a single integer.
pub fn parse_delete_ride_request(arg: &str) -> Result<i64, ParseError> {
    parse_id(arg, "rid", USAGE_DELETE_RIDE_REQUEST)
}

/// Parse `select_ride_request` arguments.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a single integer.
pub fn parse_select_ride_request(arg: &str) -> Result<i64, ParseError> {
    parse_id(arg, "rid", USAGE_SELECT_RIDE_REQUEST)
}

/// Parse `post_ride_request` arguments.
///
/// # Errors
///
/// Returns a [`ParseError`] if the token count is wrong, the date is
/// not a calendar date, or the price is not a non-negative integer.
pub fn parse_post_ride_request(arg: &str) -> Result<PostRideRequestArgs, ParseError> {
    let tokens = tokens(arg);
    let [date, pickup, dropoff, price] = tokens.as_slice() else {
        return Err(ParseError::new(
            format!("expected 4 arguments, got {}", tokens.len()),
            USAGE_POST_RIDE_REQUEST,
        ));
    };

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        ParseError::new(format!("invalid date: {date:?}"), USAGE_POST_RIDE_REQUEST)
    })?;
    let price: Price = price
        .parse()
        .map_err(|e| ParseError::new(format!("{e}"), USAGE_POST_RIDE_REQUEST))?;

    Ok(PostRideRequestArgs {
        date,
        pickup: (*pickup).to_string(),
        dropoff: (*dropoff).to_string(),
        price,
    })
}

/// Parse a single location code argument.
///
/// # Errors
///
/// Returns a [`ParseError`] if there is not exactly one token.
pub fn parse_location_code(arg: &str) -> Result<String, ParseError> {
    let tokens = tokens(arg);
    let [lcode] = tokens.as_slice() else {
        return Err(ParseError::new(
            "expected exactly one argument: lcode",
            USAGE_SEARCH_BY_LOCATION_CODE,
        ));
    };
    Ok((*lcode).to_string())
}

/// Parse a city name argument. City names may contain spaces, so the
/// whole remainder is the name.
///
/// # Errors
///
/// Returns a [`ParseError`] if the remainder is empty.
pub fn parse_city_name(arg: &str) -> Result<String, ParseError> {
    let city = arg.trim();
    if city.is_empty() {
        return Err(ParseError::new(
            "expected an argument: city",
            USAGE_SEARCH_BY_CITY_NAME,
        ));
    }
    Ok(city.to_string())
}
