//! Error types for coordinate lookup.

use thiserror::Error;

/// Error type for coordinate lookup operations.
///
/// Every variant is recoverable: the app surfaces the message to the user
/// and carries on with the circles it already has. None of these abort the
/// process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The device exposes no geolocation capability at all.
    #[error("Geolocation is not supported by this device")]
    GeolocationUnavailable,

    /// The user (or platform) refused the geolocation request.
    #[error("Geolocation permission denied: {0}")]
    GeolocationDenied(String),

    /// The geolocation request ran but could not produce a position.
    #[error("Unable to determine current position: {0}")]
    GeolocationFailed(String),

    /// The geocoder returned zero matches for the query.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The geocoding service failed (network, quota, outage).
    #[error("Address lookup failed: {0}")]
    AddressLookupFailed(String),
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
