//! The geometric engine: pure, stateless circle math.
//!
//! Everything in this module is a plain function from values to values - no
//! retained state, no side effects, no error paths. Degenerate inputs
//! (circles that do not touch) are valid empty results, not errors, and
//! identical inputs always produce bitwise-identical outputs.
//!
//! # Approximations
//!
//! Geographic coordinates are flattened onto a local plane with an
//! equirectangular scale (see [`projection`]) instead of spherical math.
//! Two further shortcuts are carried deliberately:
//!
//! - each circle center is projected with its **own** latitude's cosine,
//!   while intersection points are mapped back with the **average** of the
//!   pair's latitudes - the forward and reverse mappings are not exact
//!   inverses;
//! - a tangent pair of circles yields two coincident points rather than a
//!   single deduplicated one.
//!
//! Both match the behavior the rest of the system was built against and are
//! accurate to well under a meter at the radii the app works with.
//!
//! # Example
//!
//! ```
//! use overlap_core::circle::{Circle, CircleId, DistanceUnit};
//! use overlap_core::geometry::{bounding_region, intersections, Coordinate};
//!
//! let a = Circle::new(CircleId::new(1), Coordinate::new(0.0, 0.0), 1.0, DistanceUnit::Kilometers).unwrap();
//! let b = Circle::new(CircleId::new(2), Coordinate::new(0.0, 0.0135), 1.0, DistanceUnit::Kilometers).unwrap();
//!
//! let points = intersections(&a, &b);
//! assert_eq!(points.len(), 2);
//!
//! let region = bounding_region(&[a, b]).unwrap();
//! for point in points {
//!     assert!(region.contains(point));
//! }
//! ```

mod bounds;
mod intersect;
pub mod projection;
pub mod types;

pub use bounds::{bounding_region, bounding_region_with_points, circle_bounds};
pub use intersect::intersections;
pub use projection::{project, unproject, METERS_PER_DEGREE};
pub use types::{BoundingBox, Coordinate};
