//! Core types for map circles.
//!
//! This module defines the data structures for circles (user-plotted points
//! with a radius drawn around them), their identifiers, and the distance
//! units radii are expressed in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::circle::error::{CircleError, Result};
use crate::geometry::Coordinate;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1_609.34;

/// Meters in one kilometer.
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

/// Opaque identifier for a circle.
///
/// Assigned sequentially by [`CircleSet`](crate::circle::CircleSet); stable
/// for the lifetime of the circle and never reused within a set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CircleId(u64);

impl CircleId {
    /// Creates an identifier from its raw value.
    ///
    /// Normally identifiers come from `CircleSet::add`; constructing one
    /// directly is only needed when building standalone circles for the
    /// geometry functions.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for CircleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display unit for a circle's radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Statute miles.
    #[default]
    Miles,
    /// Kilometers.
    Kilometers,
}

impl DistanceUnit {
    /// Converts to string representation for display and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Kilometers => "kilometers",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "miles" => Some(Self::Miles),
            "kilometers" => Some(Self::Kilometers),
            _ => None,
        }
    }

    /// Converts a radius in this unit to meters.
    ///
    /// `miles x 1609.34`, `kilometers x 1000`. Pure; the radius is already
    /// validated positive by the circle model.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_core::circle::DistanceUnit;
    ///
    /// assert_eq!(DistanceUnit::Miles.to_meters(1.0), 1609.34);
    /// assert_eq!(DistanceUnit::Kilometers.to_meters(1.0), 1000.0);
    /// ```
    #[must_use]
    pub fn to_meters(self, radius: f64) -> f64 {
        match self {
            Self::Miles => radius * METERS_PER_MILE,
            Self::Kilometers => radius * METERS_PER_KILOMETER,
        }
    }
}

/// A radius circle plotted on the map.
///
/// The center is fixed when the circle is created (a geolocation or
/// address-lookup result); the radius and unit may be edited afterwards.
/// Field access goes through methods so the `radius > 0` and coordinate
/// range invariants hold for every constructed value.
///
/// # Examples
///
/// ```
/// use overlap_core::circle::{Circle, CircleId, DistanceUnit};
/// use overlap_core::geometry::Coordinate;
///
/// let circle = Circle::new(
///     CircleId::new(1),
///     Coordinate::new(40.7128, -74.0060),
///     5.0,
///     DistanceUnit::Miles,
/// )
/// .unwrap();
/// assert_eq!(circle.radius_meters(), 5.0 * 1609.34);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Identifier, unique within the owning set.
    id: CircleId,
    /// Geographic center. Immutable once set.
    center: Coordinate,
    /// Radius in the unit's native scale. Always positive and finite.
    radius: f64,
    /// Display unit for the radius.
    unit: DistanceUnit,
    /// When the circle was plotted (UTC).
    created_at: DateTime<Utc>,
}

impl Circle {
    /// Creates a validated circle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLatitude` / `InvalidLongitude` when the center is
    /// outside [-90, 90] x [-180, 180] or non-finite, and `InvalidRadius`
    /// when the radius is not a positive finite number.
    pub fn new(
        id: CircleId,
        center: Coordinate,
        radius: f64,
        unit: DistanceUnit,
    ) -> Result<Self> {
        validate_center(center)?;
        validate_radius(radius)?;

        Ok(Self {
            id,
            center,
            radius,
            unit,
            created_at: Utc::now(),
        })
    }

    /// The circle's identifier.
    #[must_use]
    pub const fn id(&self) -> CircleId {
        self.id
    }

    /// The circle's center.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// The radius in the circle's own unit.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The circle's display unit.
    #[must_use]
    pub const fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// When the circle was plotted.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The radius converted to meters.
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        self.unit.to_meters(self.radius)
    }

    /// Replaces the radius, keeping the unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadius` when the new radius is not a positive finite
    /// number; the circle is left unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Replaces the display unit, keeping the numeric radius.
    ///
    /// Editing the unit rescales the physical circle: 5 miles and 5
    /// kilometers are different distances.
    pub fn set_unit(&mut self, unit: DistanceUnit) {
        self.unit = unit;
    }
}

fn validate_center(center: Coordinate) -> Result<()> {
    if !(-90.0..=90.0).contains(&center.latitude) {
        return Err(CircleError::InvalidLatitude(center.latitude));
    }
    if !(-180.0..=180.0).contains(&center.longitude) {
        return Err(CircleError::InvalidLongitude(center.longitude));
    }
    Ok(())
}

fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(CircleError::InvalidRadius(radius));
    }
    Ok(())
}
