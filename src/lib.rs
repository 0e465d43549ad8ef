//! Overlap Core Library
//!
//! Core functionality for Overlap - plotting radius circles on a map and
//! finding where they cross. This crate owns the geometric engine and the
//! circle model; map rendering and coordinate lookup are external
//! collaborators that call in through [`OverlapCore`].

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod circle;
pub mod geometry;
pub mod lookup;

pub use api::OverlapCore;
