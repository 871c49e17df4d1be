//! Named numeric inputs collected from a lesson form.

use crate::errors::InvalidInputError;
use crate::float_types::Real;
use std::fmt::Display;

/// One numeric field a lesson form can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Radius,
    Diameter,
    Area,
    Circumference,
    AngleDegrees,
    DistanceFromCenter,
}

impl InputKey {
    /// Conventional symbol used in the printed formulas.
    pub const fn symbol(&self) -> &'static str {
        match self {
            InputKey::Radius => "r",
            InputKey::Diameter => "d",
            InputKey::Area => "L",
            InputKey::Circumference => "K",
            InputKey::AngleDegrees => "θ",
            InputKey::DistanceFromCenter => "a",
        }
    }

    /// Field name as it appears on the input form and the JS boundary.
    pub const fn name(&self) -> &'static str {
        match self {
            InputKey::Radius => "radius",
            InputKey::Diameter => "diameter",
            InputKey::Area => "area",
            InputKey::Circumference => "circumference",
            InputKey::AngleDegrees => "angleDegrees",
            InputKey::DistanceFromCenter => "distanceFromCenter",
        }
    }

    /// Inverse of [`InputKey::name`].
    pub fn from_name(name: &str) -> Option<InputKey> {
        match name {
            "radius" => Some(InputKey::Radius),
            "diameter" => Some(InputKey::Diameter),
            "area" => Some(InputKey::Area),
            "circumference" => Some(InputKey::Circumference),
            "angleDegrees" => Some(InputKey::AngleDegrees),
            "distanceFromCenter" => Some(InputKey::DistanceFromCenter),
            _ => None,
        }
    }
}

impl Display for InputKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

/// The numeric inputs of one lesson interaction, keyed by [`InputKey`].
///
/// Built fresh per interaction and discarded after the results are
/// displayed. A handful of entries at most, so a plain ordered vector is
/// the whole storage story.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSet {
    entries: Vec<(InputKey, Real)>,
}

impl InputSet {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder-style insert. A later value for the same key replaces the
    /// earlier one.
    #[must_use]
    pub fn with(mut self, key: InputKey, value: Real) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: InputKey, value: Real) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: InputKey) -> Option<Real> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn contains(&self, key: InputKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Fetch a required value, rejecting missing, NaN/infinite and negative
    /// entries.
    pub fn require(&self, key: InputKey) -> Result<Real, InvalidInputError> {
        let value = self.get(key).ok_or(InvalidInputError::MissingInput(key))?;
        if !value.is_finite() {
            return Err(InvalidInputError::NonFiniteInput { key, value });
        }
        if value < 0.0 {
            return Err(InvalidInputError::NegativeInput { key, value });
        }
        Ok(value)
    }

    /// Fetch the central angle and check it against the component's upper
    /// bound in degrees.
    pub fn require_angle(&self, max_degrees: Real) -> Result<Real, InvalidInputError> {
        let value = self.require(InputKey::AngleDegrees)?;
        if value > max_degrees {
            return Err(InvalidInputError::AngleOutOfRange { value, max: max_degrees });
        }
        Ok(value)
    }
}
