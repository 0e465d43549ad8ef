//! Owned circle collection and layout recomputation.
//!
//! `CircleSet` is the single owner of all plotted circles. The geometry
//! engine stays pure: every layout is recomputed from scratch out of the
//! current circles, so the same set always produces the same snapshot.

use serde::{Deserialize, Serialize};

use crate::circle::error::{CircleError, Result};
use crate::circle::types::{Circle, CircleId, DistanceUnit};
use crate::geometry::{self, BoundingBox, Coordinate};

/// Intersection points for one unordered pair of circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairIntersections {
    /// The earlier circle of the pair (set order).
    pub first: CircleId,
    /// The later circle of the pair.
    pub second: CircleId,
    /// Exactly zero or two points; a tangent pair repeats one point twice.
    pub points: Vec<Coordinate>,
}

impl PairIntersections {
    /// Returns whether the pair's boundaries actually cross.
    #[must_use]
    pub fn is_crossing(&self) -> bool {
        !self.points.is_empty()
    }
}

/// A complete render snapshot for the map collaborator.
///
/// The renderer draws the circles and intersection markers and translates
/// `bounds` into a fit-to-view instruction (padding and zoom clamping are
/// the renderer's own policy). `bounds` is `None` when there are no
/// circles; the renderer then keeps its previous view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    /// Every plotted circle, in insertion order.
    pub circles: Vec<Circle>,
    /// One entry per unordered pair of circles.
    pub intersections: Vec<PairIntersections>,
    /// Covers every circle and every intersection point.
    pub bounds: Option<BoundingBox>,
}

impl MapLayout {
    /// Serializes the snapshot to JSON for the rendering boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or missing required fields.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// All intersection points across all pairs, in pair order.
    #[must_use]
    pub fn intersection_points(&self) -> Vec<Coordinate> {
        self.intersections
            .iter()
            .flat_map(|pair| pair.points.iter().copied())
            .collect()
    }
}

/// Owned, ordered collection of circles.
///
/// Identifiers are assigned sequentially and never reused within a set, so
/// a renderer can key markers and colors off them across recomputations.
///
/// # Examples
///
/// ```
/// use overlap_core::circle::{CircleSet, DistanceUnit};
/// use overlap_core::geometry::Coordinate;
///
/// let mut set = CircleSet::new();
/// let id = set
///     .add(Coordinate::new(40.7128, -74.0060), 5.0, DistanceUnit::Miles)
///     .unwrap();
///
/// let layout = set.layout();
/// assert_eq!(layout.circles.len(), 1);
/// assert!(layout.bounds.is_some());
///
/// set.remove(id).unwrap();
/// assert!(set.layout().bounds.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CircleSet {
    circles: Vec<Circle>,
    next_id: u64,
}

impl CircleSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            circles: Vec::new(),
            next_id: 0,
        }
    }

    /// Plots a new circle and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the center or radius is invalid;
    /// the set is left unchanged and no identifier is consumed.
    pub fn add(
        &mut self,
        center: Coordinate,
        radius: f64,
        unit: DistanceUnit,
    ) -> Result<CircleId> {
        let id = CircleId::new(self.next_id);
        let circle = Circle::new(id, center, radius, unit)?;

        self.next_id += 1;
        self.circles.push(circle);
        Ok(id)
    }

    /// Removes a circle, returning it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no circle has the given identifier.
    pub fn remove(&mut self, id: CircleId) -> Result<Circle> {
        let index = self.index_of(id)?;
        Ok(self.circles.remove(index))
    }

    /// Replaces a circle's radius.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown identifier or `InvalidRadius` for
    /// a non-positive radius; the circle is unchanged on error.
    pub fn set_radius(&mut self, id: CircleId, radius: f64) -> Result<()> {
        let index = self.index_of(id)?;
        self.circles[index].set_radius(radius)
    }

    /// Replaces a circle's display unit.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no circle has the given identifier.
    pub fn set_unit(&mut self, id: CircleId, unit: DistanceUnit) -> Result<()> {
        let index = self.index_of(id)?;
        self.circles[index].set_unit(unit);
        Ok(())
    }

    /// Looks up a circle by identifier.
    #[must_use]
    pub fn get(&self, id: CircleId) -> Option<&Circle> {
        self.circles.iter().find(|circle| circle.id() == id)
    }

    /// All circles, in insertion order.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Number of circles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Removes every circle. Identifiers are still not reused afterwards.
    pub fn clear(&mut self) {
        self.circles.clear();
    }

    /// Intersection points for every unordered pair of circles.
    ///
    /// O(n^2) pairs, each O(1).
    #[must_use]
    pub fn intersections(&self) -> Vec<PairIntersections> {
        let mut pairs = Vec::new();
        for (i, a) in self.circles.iter().enumerate() {
            for b in &self.circles[i + 1..] {
                pairs.push(PairIntersections {
                    first: a.id(),
                    second: b.id(),
                    points: geometry::intersections(a, b),
                });
            }
        }
        pairs
    }

    /// Recomputes the full render snapshot for the current circles.
    ///
    /// The pairwise sweep runs once; its points feed the bounding region
    /// directly instead of being recomputed.
    #[must_use]
    pub fn layout(&self) -> MapLayout {
        let intersections = self.intersections();
        let points: Vec<Coordinate> = intersections
            .iter()
            .flat_map(|pair| pair.points.iter().copied())
            .collect();
        let bounds = geometry::bounding_region_with_points(&self.circles, &points);

        MapLayout {
            circles: self.circles.clone(),
            intersections,
            bounds,
        }
    }

    fn index_of(&self, id: CircleId) -> Result<usize> {
        self.circles
            .iter()
            .position(|circle| circle.id() == id)
            .ok_or(CircleError::NotFound(id))
    }
}
