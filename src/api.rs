//! High-level session facade.

use crate::circle::{Circle, CircleId, CircleSet, DistanceUnit, MapLayout, Result};
use crate::geometry::Coordinate;
use crate::lookup::{resolve, CoordinateProvider, PositionSource};

/// Main entry point for embedding applications.
///
/// Owns the circle collection - the one piece of mutable state in the
/// system - and recomputes a [`MapLayout`] on demand. The geometry engine
/// underneath stays pure; `OverlapCore` is just the place where provider
/// results become circles.
///
/// # Examples
///
/// ```
/// use overlap_core::circle::DistanceUnit;
/// use overlap_core::geometry::Coordinate;
/// use overlap_core::OverlapCore;
///
/// let mut core = OverlapCore::new();
/// core.plot(Coordinate::new(40.7128, -74.0060), 5.0, DistanceUnit::Miles)
///     .unwrap();
///
/// let layout = core.layout();
/// assert_eq!(layout.circles.len(), 1);
/// assert!(layout.bounds.is_some());
/// ```
#[derive(Debug, Default)]
pub struct OverlapCore {
    circles: CircleSet,
}

impl OverlapCore {
    /// Creates a session with no circles.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            circles: CircleSet::new(),
        }
    }

    /// Plots a circle at an already-known coordinate.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the center or radius is invalid.
    pub fn plot(
        &mut self,
        center: Coordinate,
        radius: f64,
        unit: DistanceUnit,
    ) -> Result<CircleId> {
        self.circles.add(center, radius, unit)
    }

    /// Resolves a position through `provider`, then plots a circle there.
    ///
    /// One provider request per call; a lookup failure leaves the circle
    /// set untouched.
    ///
    /// # Errors
    ///
    /// Returns `CircleError::Lookup` when the provider fails, or a
    /// validation error if the provider hands back an out-of-range
    /// coordinate.
    pub async fn plot_from(
        &mut self,
        provider: &dyn CoordinateProvider,
        source: &PositionSource,
        radius: f64,
        unit: DistanceUnit,
    ) -> Result<CircleId> {
        let center = resolve(provider, source).await?;
        self.circles.add(center, radius, unit)
    }

    /// Removes a circle, returning it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no circle has the given identifier.
    pub fn remove(&mut self, id: CircleId) -> Result<Circle> {
        self.circles.remove(id)
    }

    /// Replaces a circle's radius.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown identifier or `InvalidRadius` for
    /// a non-positive radius.
    pub fn set_radius(&mut self, id: CircleId, radius: f64) -> Result<()> {
        self.circles.set_radius(id, radius)
    }

    /// Replaces a circle's display unit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no circle has the given identifier.
    pub fn set_unit(&mut self, id: CircleId, unit: DistanceUnit) -> Result<()> {
        self.circles.set_unit(id, unit)
    }

    /// The current circle collection.
    #[must_use]
    pub const fn circles(&self) -> &CircleSet {
        &self.circles
    }

    /// Recomputes the render snapshot for the current circles.
    #[must_use]
    pub fn layout(&self) -> MapLayout {
        self.circles.layout()
    }
}
