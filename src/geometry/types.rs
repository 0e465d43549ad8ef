//! Geometric primitive types.

use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
///
/// Carries no unit or radius; used for circle centers and intersection
/// results alike.
///
/// # Examples
///
/// ```
/// use overlap_core::geometry::Coordinate;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// assert_eq!(nyc.latitude, 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from raw degree values.
    ///
    /// No validation is performed here; the circle model validates ranges
    /// before a coordinate becomes a circle center.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An axis-aligned box in latitude/longitude space.
///
/// Handed to the map renderer as the fit-to-view contract. Padding pixels
/// and zoom clamping are rendering policy and live with the renderer, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge in degrees.
    pub min_latitude: f64,
    /// Western edge in degrees.
    pub min_longitude: f64,
    /// Northern edge in degrees.
    pub max_latitude: f64,
    /// Eastern edge in degrees.
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Creates a box from its four edges.
    #[must_use]
    pub const fn new(
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            min_longitude,
            max_latitude,
            max_longitude,
        }
    }

    /// A degenerate box covering a single point.
    #[must_use]
    pub const fn around(point: Coordinate) -> Self {
        Self::new(
            point.latitude,
            point.longitude,
            point.latitude,
            point.longitude,
        )
    }

    /// The smallest box covering both `self` and `other`.
    ///
    /// Min of the mins, max of the maxes on each axis.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.min_latitude.min(other.min_latitude),
            self.min_longitude.min(other.min_longitude),
            self.max_latitude.max(other.max_latitude),
            self.max_longitude.max(other.max_longitude),
        )
    }

    /// Extends the box just enough to cover `point`.
    #[must_use]
    pub fn include(self, point: Coordinate) -> Self {
        self.union(Self::around(point))
    }

    /// Returns whether `point` lies inside the box (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }

    /// Returns whether `other` lies entirely inside the box.
    #[must_use]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.min_latitude <= other.min_latitude
            && self.min_longitude <= other.min_longitude
            && self.max_latitude >= other.max_latitude
            && self.max_longitude >= other.max_longitude
    }

    /// North-south extent in degrees.
    #[must_use]
    pub const fn height_degrees(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    /// East-west extent in degrees.
    #[must_use]
    pub const fn width_degrees(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    /// The box's midpoint.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }
}
