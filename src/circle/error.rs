//! Error types for circle model operations.

use thiserror::Error;

use crate::circle::types::CircleId;
use crate::lookup::LookupError;

/// Error type for circle operations.
#[derive(Error, Debug)]
pub enum CircleError {
    /// Radius is not a positive finite number.
    #[error("Invalid radius: {0} (must be a positive number)")]
    InvalidRadius(f64),

    /// Latitude outside [-90, 90] degrees or non-finite.
    #[error("Invalid latitude: {0} (must be between -90 and 90 degrees)")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] degrees or non-finite.
    #[error("Invalid longitude: {0} (must be between -180 and 180 degrees)")]
    InvalidLongitude(f64),

    /// No circle with the given identifier in the set.
    #[error("Circle not found: {0}")]
    NotFound(CircleId),

    /// An external coordinate lookup failed before a circle could be plotted.
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Result type alias for circle operations.
pub type Result<T> = std::result::Result<T, CircleError>;
