//! Local planar projection between geographic and Cartesian coordinates.
//!
//! Circle intersection and bounding math happen in Cartesian meters rather
//! than on a sphere, so coordinates are projected with an equirectangular
//! approximation: one degree of latitude is a fixed 111 320 m, one degree of
//! longitude is 111 320 m scaled by the cosine of the latitude. This is a
//! known, accepted approximation - valid for circles with radii up to a few
//! hundred kilometers, increasingly wrong near the poles and over long
//! distances. It trades geodesic accuracy for simplicity.

use super::types::Coordinate;

/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Projects a geographic point onto a local plane, in meters.
///
/// `x` is scaled by the cosine of the point's own latitude, so two points
/// projected separately use two different longitude scales. Callers doing
/// pairwise math accept that small asymmetry.
///
/// # Examples
///
/// ```
/// use overlap_core::geometry::{project, Coordinate, METERS_PER_DEGREE};
///
/// // On the equator the scale factors coincide.
/// let (x, y) = project(Coordinate::new(0.0, 1.0));
/// assert_eq!(x, METERS_PER_DEGREE);
/// assert_eq!(y, 0.0);
/// ```
#[must_use]
pub fn project(point: Coordinate) -> (f64, f64) {
    let x = point.longitude * METERS_PER_DEGREE * point.latitude.to_radians().cos();
    let y = point.latitude * METERS_PER_DEGREE;
    (x, y)
}

/// Maps a planar point back to geographic coordinates.
///
/// The longitude scale uses `reference_latitude` (for pairwise results, the
/// average of the two centers' latitudes) rather than the point's own
/// latitude, so this is deliberately not an exact inverse of [`project`].
#[must_use]
pub fn unproject(x: f64, y: f64, reference_latitude: f64) -> Coordinate {
    let latitude = y / METERS_PER_DEGREE;
    let longitude = x / (METERS_PER_DEGREE * reference_latitude.to_radians().cos());
    Coordinate::new(latitude, longitude)
}
