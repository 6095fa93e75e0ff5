//! Consular location types
//!
//! Each supported location maps to the facility identifier the scheduling
//! provider uses in its appointment endpoints. The mapping is exhaustive and
//! explicit; an unrecognized location name is a typed error rather than an
//! empty identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A consular location supported by the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Vancouver,
    Calgary,
    Ottawa,
    Toronto,
    Montreal,
    Santiago,
}

/// Error returned when a location name is not in the supported set
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown location '{0}'")]
pub struct UnknownLocation(pub String);

impl Location {
    /// All supported locations
    pub const ALL: [Location; 6] = [
        Location::Vancouver,
        Location::Calgary,
        Location::Ottawa,
        Location::Toronto,
        Location::Montreal,
        Location::Santiago,
    ];

    /// The provider's facility identifier for this location
    pub fn facility_id(&self) -> &'static str {
        match self {
            Location::Vancouver => "95",
            Location::Calgary => "89",
            Location::Ottawa => "92",
            Location::Toronto => "94",
            Location::Montreal => "91",
            Location::Santiago => "111",
        }
    }

    /// The lowercase name used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Location::Vancouver => "vancouver",
            Location::Calgary => "calgary",
            Location::Ottawa => "ottawa",
            Location::Toronto => "toronto",
            Location::Montreal => "montreal",
            Location::Santiago => "santiago",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vancouver" => Ok(Location::Vancouver),
            "calgary" => Ok(Location::Calgary),
            "ottawa" => Ok(Location::Ottawa),
            "toronto" => Ok(Location::Toronto),
            "montreal" => Ok(Location::Montreal),
            "santiago" => Ok(Location::Santiago),
            other => Err(UnknownLocation(other.to_string())),
        }
    }
}
