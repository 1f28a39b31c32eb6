//! Error types for building and driving a [`System`](crate::System)

use thiserror::Error;

use crate::{BodyId, Num};

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a body cannot be placed on a valid orbit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{value} is outside the scaling domain (must be finite, > 0 and != 1)")]
    OutOfDomain { value: Num },

    #[error("{name}: orbital radius {radius} km cannot be scaled for display")]
    InvalidOrbitalRadius { name: String, radius: Num },

    #[error("{name}: object radius {radius} km cannot be scaled into a marker size")]
    InvalidObjectRadius { name: String, radius: Num },

    #[error("{name}: orbital period is 0 but the body is not the center object")]
    ZeroOrbitalPeriod { name: String },

    #[error("{name}: orbital period {period} is not finite")]
    NonFiniteOrbitalPeriod { name: String, period: Num },

    #[error("{name}: only the root of a system can be a star")]
    CenterAsChild { name: String },

    #[error("Body not found: {0}")]
    UnknownBody(BodyId),
}
