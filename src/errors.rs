//! Input validation errors

use crate::float_types::Real;
use crate::inputs::InputKey;
use std::fmt::Display;

/// All the ways a lesson's numeric input can be rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    /// (MissingInput) A required input was not supplied
    MissingInput(InputKey),
    /// (NegativeInput) A length/area/angle input is negative
    NegativeInput { key: InputKey, value: Real },
    /// (NonFiniteInput) An input is NaN or infinite
    NonFiniteInput { key: InputKey, value: Real },
    /// (AngleOutOfRange) The central angle exceeds the component's valid range
    AngleOutOfRange { value: Real, max: Real },
    /// (DistanceExceedsRadius) The chord's distance from the center is greater than the radius
    DistanceExceedsRadius { distance: Real, radius: Real },
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::MissingInput(key) => {
                write!(f, "(MissingInput) A required input was not supplied: {}", key)
            },
            InvalidInputError::NegativeInput { key, value } => {
                write!(f, "(NegativeInput) {} must not be negative, got: {}", key, value)
            },
            InvalidInputError::NonFiniteInput { key, value } => {
                write!(f, "(NonFiniteInput) {} is not a finite number: {}", key, value)
            },
            InvalidInputError::AngleOutOfRange { value, max } => {
                write!(f, "(AngleOutOfRange) The central angle {}° lies outside 0°..{}°", value, max)
            },
            InvalidInputError::DistanceExceedsRadius { distance, radius } => {
                write!(
                    f,
                    "(DistanceExceedsRadius) The distance from the center ({}) is greater than the radius ({})",
                    distance, radius
                )
            },
        }
    }
}
