//! Circle-circle intersection on the local projection plane.

use crate::circle::Circle;

use super::projection::{project, unproject};
use super::types::Coordinate;

/// Computes the points where the boundaries of two circles cross.
///
/// Returns exactly zero or two points, never one. Disjoint, nested, and
/// concentric pairs are valid empty results, not errors. A tangent pair is
/// not special-cased: it produces two coincident points rather than a single
/// deduplicated one.
///
/// Each center is projected with its own latitude, and the results are
/// mapped back with the average of the two centers' latitudes. The two
/// mappings are not exact inverses of each other; both approximations are
/// accepted for the short distances this engine targets.
///
/// # Examples
///
/// ```
/// use overlap_core::circle::{Circle, CircleId, DistanceUnit};
/// use overlap_core::geometry::{intersections, Coordinate};
///
/// let a = Circle::new(CircleId::new(1), Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Kilometers).unwrap();
/// let b = Circle::new(CircleId::new(2), Coordinate::new(0.0, 0.0135), 1.0, DistanceUnit::Kilometers).unwrap();
///
/// // Centers about 1.5 km apart, radii 1 km each: two crossing points.
/// assert_eq!(intersections(&a, &b).len(), 2);
/// ```
#[must_use]
pub fn intersections(a: &Circle, b: &Circle) -> Vec<Coordinate> {
    let (x1, y1) = project(a.center());
    let (x2, y2) = project(b.center());
    let r1 = a.radius_meters();
    let r2 = b.radius_meters();

    let d = (x2 - x1).hypot(y2 - y1);

    if d == 0.0 {
        return Vec::new(); // concentric centers
    }
    if d > r1 + r2 {
        return Vec::new(); // too far apart to touch
    }
    if d < (r1 - r2).abs() {
        return Vec::new(); // one circle contains the other
    }

    // Distance along the center-to-center line at which the chord crosses,
    // and the half-chord height above it.
    let t = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    // Rounding can push r1^2 - t^2 marginally negative at exact tangency;
    // clamp so tangency yields two coincident points instead of NaN.
    let u = (r1 * r1 - t * t).max(0.0).sqrt();

    // Chord midpoint on the center-to-center line.
    let px = x1 + t * (x2 - x1) / d;
    let py = y1 + t * (y2 - y1) / d;

    // Offset perpendicular to the center-to-center line.
    let ox = u * (y2 - y1) / d;
    let oy = u * (x2 - x1) / d;

    let reference_latitude = (a.center().latitude + b.center().latitude) / 2.0;

    vec![
        unproject(px + ox, py - oy, reference_latitude),
        unproject(px - ox, py + oy, reference_latitude),
    ]
}
