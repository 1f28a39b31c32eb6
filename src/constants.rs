use crate::Num;

#[cfg(feature = "f64")]
pub use std::f64::consts::PI;
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub use std::f32::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;

/// Root taken of a distance before it is divided by its logarithm
pub const DISTANCE_EXPONENT: Num = 2.2;

/// Subtracted from the compressed distance so inner orbits sit near the center
pub const DISTANCE_OFFSET: Num = 100.0;

pub const DISTANCE_DIVISOR: Num = 2.0;

/// Root used when sizing body markers from their physical radius
pub const BODY_SIZE_EXPONENT: Num = 2.0;
