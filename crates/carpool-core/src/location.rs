//! Locations.

use serde::{Deserialize, Serialize};

/// A known pickup/dropoff location.
///
/// Location codes validate the pickup and dropoff fields of rides and
/// requests, and the city name resolves city-based searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Location code (unique id).
    pub lcode: String,

    /// City this location belongs to.
    pub city: String,

    /// Province or state.
    pub prov: String,

    /// Street address.
    pub address: String,
}
