//! Coordinate lookup contract.
//!
//! The two asynchronous edges of the system - device geolocation and
//! address geocoding - live behind [`CoordinateProvider`]. The core treats
//! both as black-box coordinate sources: a request either produces a
//! `(latitude, longitude)` pair or fails with a recoverable
//! [`LookupError`] that the app shows to the user.

mod error;
mod provider;

pub use error::{LookupError, Result};
pub use provider::{resolve, CoordinateProvider, PositionSource};
