//! The eight components of a circle the lessons cover.

use crate::inputs::{InputKey, InputSet};
use std::fmt::Display;

/// Unit class of a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Length,
    Area,
}

impl UnitClass {
    pub const fn label(&self) -> &'static str {
        match self {
            UnitClass::Length => "length units",
            UnitClass::Area => "area units",
        }
    }
}

/// Identifies which formula and figure a lesson screen presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleComponent {
    Area,
    Circumference,
    Sector,
    Segment,
    Radius,
    Diameter,
    Arc,
    Chord,
}

impl CircleComponent {
    /// All components in menu order, which is also the "next lesson" order.
    pub const ALL: [CircleComponent; 8] = [
        CircleComponent::Area,
        CircleComponent::Circumference,
        CircleComponent::Sector,
        CircleComponent::Segment,
        CircleComponent::Radius,
        CircleComponent::Diameter,
        CircleComponent::Arc,
        CircleComponent::Chord,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            CircleComponent::Area => "Circle Area",
            CircleComponent::Circumference => "Circumference",
            CircleComponent::Sector => "Sector",
            CircleComponent::Segment => "Segment",
            CircleComponent::Radius => "Radius",
            CircleComponent::Diameter => "Diameter",
            CircleComponent::Arc => "Arc",
            CircleComponent::Chord => "Chord",
        }
    }

    /// Conventional symbol for the computed quantity, where one exists.
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            CircleComponent::Area => Some("L"),
            CircleComponent::Circumference => Some("K"),
            CircleComponent::Radius => Some("r"),
            CircleComponent::Diameter => Some("d"),
            _ => None,
        }
    }

    /// Unit class of the computed value.
    pub const fn unit(&self) -> UnitClass {
        match self {
            CircleComponent::Area | CircleComponent::Sector | CircleComponent::Segment => {
                UnitClass::Area
            },
            _ => UnitClass::Length,
        }
    }

    /// Stable lowercase identifier, used for file names and the JS boundary.
    pub const fn slug(&self) -> &'static str {
        match self {
            CircleComponent::Area => "area",
            CircleComponent::Circumference => "circumference",
            CircleComponent::Sector => "sector",
            CircleComponent::Segment => "segment",
            CircleComponent::Radius => "radius",
            CircleComponent::Diameter => "diameter",
            CircleComponent::Arc => "arc",
            CircleComponent::Chord => "chord",
        }
    }

    /// Inverse of [`CircleComponent::slug`].
    pub fn from_slug(slug: &str) -> Option<CircleComponent> {
        CircleComponent::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    /// One-sentence definition shown on the lesson screen.
    pub const fn description(&self) -> &'static str {
        match self {
            CircleComponent::Area => "The region enclosed by the circle.",
            CircleComponent::Circumference => "The distance around the circle.",
            CircleComponent::Sector => {
                "The region bounded by two radii and the arc between them."
            },
            CircleComponent::Segment => {
                "The region bounded by a chord and the arc it subtends."
            },
            CircleComponent::Radius => {
                "The distance from the center of the circle to its edge; every radius of a circle has the same length."
            },
            CircleComponent::Diameter => {
                "A straight line through the center joining two points on the circle, twice the radius and the longest line the circle contains."
            },
            CircleComponent::Arc => {
                "The curved portion of the circumference between two points."
            },
            CircleComponent::Chord => {
                "A straight line segment joining two points on the circle; at 180° it passes through the center and equals the diameter."
            },
        }
    }

    /// The formula lines shown in the lesson's formula box, one per input
    /// mode.
    pub const fn formula_lines(&self) -> &'static [&'static str] {
        match self {
            CircleComponent::Area => &["L = π × r²", "L = π × (d/2)²"],
            CircleComponent::Circumference => &["K = 2 × π × r", "K = π × d"],
            CircleComponent::Sector => &["A = (θ/360°) × π × r²"],
            CircleComponent::Segment => &["A = (θ/360°) × π × r² − ½ × r² × sin(θ)"],
            CircleComponent::Radius => &["r = d / 2", "r = √(L / π)", "r = K / (2 × π)"],
            CircleComponent::Diameter => &["d = 2 × r", "d = 2 × √(L / π)", "d = K / π"],
            CircleComponent::Arc => &["S = (θ/360°) × 2 × π × r"],
            CircleComponent::Chord => &["C = 2 × r × sin(θ/2)", "C = 2 × √(r² − a²)"],
        }
    }

    /// The worked-example inputs each lesson screen opens with.
    pub fn default_inputs(&self) -> InputSet {
        match self {
            CircleComponent::Area | CircleComponent::Circumference | CircleComponent::Diameter => {
                InputSet::new().with(InputKey::Radius, 7.0)
            },
            CircleComponent::Radius => InputSet::new().with(InputKey::Diameter, 14.0),
            CircleComponent::Sector
            | CircleComponent::Segment
            | CircleComponent::Arc
            | CircleComponent::Chord => InputSet::new()
                .with(InputKey::Radius, 10.0)
                .with(InputKey::AngleDegrees, 60.0),
        }
    }
}

impl Display for CircleComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
