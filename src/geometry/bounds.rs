//! Bounding region computation for circle sets.
//!
//! The region handed to the map renderer must cover every circle and every
//! pairwise intersection point, so a fit-to-view never clips geometry the
//! user asked to see.

use crate::circle::Circle;

use super::intersect::intersections;
use super::projection::METERS_PER_DEGREE;
use super::types::{BoundingBox, Coordinate};

/// Axis-aligned box enclosing a single circle.
///
/// Uses the same equirectangular scale as the projection: the box is
/// `2 * radius / 111320` degrees tall, and correspondingly wider at high
/// latitudes where a degree of longitude covers less ground.
#[must_use]
pub fn circle_bounds(circle: &Circle) -> BoundingBox {
    let center = circle.center();
    let radius = circle.radius_meters();

    let lat_delta = radius / METERS_PER_DEGREE;
    let lon_delta = radius / (METERS_PER_DEGREE * center.latitude.to_radians().cos());

    BoundingBox::new(
        center.latitude - lat_delta,
        center.longitude - lon_delta,
        center.latitude + lat_delta,
        center.longitude + lon_delta,
    )
}

/// Smallest box covering every circle and every pairwise intersection point.
///
/// Returns `None` for an empty set; the caller keeps its previous view.
/// Computes the O(n^2) pairwise intersections itself - callers that already
/// hold the points should use [`bounding_region_with_points`].
///
/// # Examples
///
/// ```
/// use overlap_core::circle::{Circle, CircleId, DistanceUnit};
/// use overlap_core::geometry::{bounding_region, Coordinate};
///
/// assert!(bounding_region(&[]).is_none());
///
/// let circle = Circle::new(CircleId::new(1), Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Kilometers).unwrap();
/// let region = bounding_region(&[circle]).unwrap();
/// assert!((region.height_degrees() - 2_000.0 / 111_320.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn bounding_region(circles: &[Circle]) -> Option<BoundingBox> {
    let mut points = Vec::new();
    for (i, a) in circles.iter().enumerate() {
        for b in &circles[i + 1..] {
            points.extend(intersections(a, b));
        }
    }
    bounding_region_with_points(circles, &points)
}

/// [`bounding_region`] with the pairwise intersection points precomputed.
///
/// A full layout recompute already holds every pair's points; passing them
/// in avoids running the O(n^2) intersection sweep twice.
#[must_use]
pub fn bounding_region_with_points(
    circles: &[Circle],
    points: &[Coordinate],
) -> Option<BoundingBox> {
    let mut boxes = circles.iter().map(circle_bounds);
    let first = boxes.next()?;
    let region = boxes.fold(first, BoundingBox::union);

    Some(
        points
            .iter()
            .fold(region, |acc, point| acc.include(*point)),
    )
}
