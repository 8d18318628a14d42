//! Angles on a circle and set algebra over arcs that wrap through zero.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ArcsetError, Result};
pub use geometry::{Angle, AngleRange};
