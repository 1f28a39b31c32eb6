//! A small model of a star system where every body moves on an idealized
//! circle around its parent.
//!
//! Bodies live in a [`System`] arena and are addressed by [`BodyId`]. Each tick
//! the host calls [`System::update`] with the elapsed time in days, then reads
//! [`Body::position`] to draw.

pub mod astro;
pub mod body;
pub mod catalog;
pub mod constants;
pub mod display;
pub mod error;
pub mod info;
pub mod math;
pub mod position;
pub mod system;

pub use body::{Body, BodyKind, ColorTag};
pub use constants::*;
pub use display::{DisplaySettings, View};
pub use error::{Error, Result};
pub use position::Position;
pub use system::{BodyId, System};

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!("features `f32` and `f64` are mutually exclusive, build `f32` with `default-features = false`");

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("enable exactly one of the `f32` or `f64` features");

#[cfg(feature = "f64")]
pub type Num = f64;
#[cfg(feature = "f64")]
pub use glam::DVec2 as Vec2;

#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Num = f32;
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub use glam::Vec2;

/// Absolute and relative slack for float comparisons in tests.
#[cfg(all(test, feature = "f64"))]
pub(crate) const TOLERANCE: Num = 1e-9;
#[cfg(all(test, feature = "f32", not(feature = "f64")))]
pub(crate) const TOLERANCE: Num = 1e-3;
