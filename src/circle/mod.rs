//! Circle model: validated circles and the owned collection.
//!
//! This module provides the state the app actually holds - the circles the
//! user has plotted - and the synchronous recomputation that turns them
//! into a render snapshot.
//!
//! # Architecture
//!
//! ```text
//! CircleSet (owned collection)
//!     ├── Circle (validated center / radius / unit)
//!     └── geometry (pure engine, called per recompute)
//! ```
//!
//! The geometry engine never holds circles; the set passes its current
//! contents in on every [`CircleSet::layout`] call. Same circles in, same
//! snapshot out.
//!
//! # Types
//!
//! - [`Circle`]: a plotted point with a radius drawn around it
//! - [`CircleSet`]: the owned, ordered collection
//! - [`MapLayout`]: a full render snapshot (circles, crossings, bounds)
//! - [`PairIntersections`]: crossing points for one pair of circles

mod error;
mod set;
pub mod types;

pub use error::{CircleError, Result};
pub use set::{CircleSet, MapLayout, PairIntersections};
pub use types::{
    Circle, CircleId, DistanceUnit, METERS_PER_KILOMETER, METERS_PER_MILE,
};
