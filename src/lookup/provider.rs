//! Contract for external coordinate sources.
//!
//! The app gets circle centers from two places it does not control: the
//! device's geolocation facility and a free-text address geocoder. Both are
//! modeled here as one trait: a one-shot request that produces a coordinate
//! pair or fails with a [`LookupError`] after an unspecified external
//! latency. Requests are invoked at most once per user action and are
//! neither cancelled nor retried automatically.

use futures::future::BoxFuture;

use crate::geometry::Coordinate;

use super::error::Result;

/// Where a new circle's center should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSource {
    /// The device's current position.
    Device,
    /// A free-text address resolved through geocoding.
    Address(String),
}

impl PositionSource {
    /// Convenience constructor for an address query.
    #[must_use]
    pub fn address(query: impl Into<String>) -> Self {
        Self::Address(query.into())
    }
}

/// A one-shot source of geographic coordinates.
///
/// Implemented by the embedding application over whatever geolocation and
/// geocoding facilities it has; the core never talks to the network itself.
/// Boxed futures keep the trait object-safe, so an app can hold a
/// `Box<dyn CoordinateProvider>`.
pub trait CoordinateProvider {
    /// Resolves the device's current position.
    ///
    /// Fails with `GeolocationUnavailable` when the capability is absent,
    /// or `GeolocationDenied` / `GeolocationFailed` when the platform
    /// reports an error.
    fn device_position(&self) -> BoxFuture<'_, Result<Coordinate>>;

    /// Resolves a free-text address to a coordinate.
    ///
    /// A geocoder may return zero or one match; zero matches is the
    /// reportable, non-fatal `AddressNotFound`.
    fn resolve_address<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Coordinate>>;
}

/// Dispatches a [`PositionSource`] to the matching provider request.
///
/// # Errors
///
/// Propagates the provider's [`LookupError`] unchanged.
pub async fn resolve(
    provider: &dyn CoordinateProvider,
    source: &PositionSource,
) -> Result<Coordinate> {
    match source {
        PositionSource::Device => provider.device_position().await,
        PositionSource::Address(query) => provider.resolve_address(query).await,
    }
}
