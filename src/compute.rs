//! The formula engine: one closed-form computation per circle component,
//! each exposing the worked intermediate values a step-by-step display
//! replays.

use crate::component::{CircleComponent, UnitClass};
use crate::errors::InvalidInputError;
use crate::float_types::{FULL_TURN_DEGREES, HALF_TURN_DEGREES, PI, Real, TAU};
use crate::inputs::{InputKey, InputSet};

/// One labeled intermediate value of a worked solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Short name of the quantity, e.g. "full circle area".
    pub label: &'static str,
    /// The formula text this step evaluates, e.g. "π × r²".
    pub expression: &'static str,
    /// The evaluated value.
    pub value: Real,
}

impl Step {
    pub const fn new(label: &'static str, expression: &'static str, value: Real) -> Self {
        Self { label, expression, value }
    }
}

/// Result of a lesson computation: the final value plus the ordered
/// intermediates the step-by-step display is rebuilt from.
///
/// The last step always restates the final value, so a display can render
/// `steps` alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    pub value: Real,
    pub unit: UnitClass,
    pub steps: Vec<Step>,
}

/// Computes `component` from `inputs`.
///
/// Which keys are required depends on the component and on the input mode
/// its keys imply; when a component admits several modes, key presence is
/// checked in a fixed order (radius, diameter, area, circumference; angle
/// before distance for the chord). Inputs of exactly zero are valid and
/// produce the degenerate zero result the formulas converge to.
pub fn compute(
    component: CircleComponent,
    inputs: &InputSet,
) -> Result<ComputationResult, InvalidInputError> {
    match component {
        CircleComponent::Area => area(inputs),
        CircleComponent::Circumference => circumference(inputs),
        CircleComponent::Sector => sector(inputs),
        CircleComponent::Segment => segment(inputs),
        CircleComponent::Radius => radius(inputs),
        CircleComponent::Diameter => diameter(inputs),
        CircleComponent::Arc => arc(inputs),
        CircleComponent::Chord => chord(inputs),
    }
}

/// Radius from whichever mode key is present, mirroring the Radius lesson's
/// formulas. Lookup order: r, d, L, K.
pub(crate) fn resolve_radius(inputs: &InputSet) -> Result<Real, InvalidInputError> {
    if inputs.contains(InputKey::Radius) {
        inputs.require(InputKey::Radius)
    } else if inputs.contains(InputKey::Diameter) {
        Ok(inputs.require(InputKey::Diameter)? / 2.0)
    } else if inputs.contains(InputKey::Area) {
        Ok((inputs.require(InputKey::Area)? / PI).sqrt())
    } else {
        Ok(inputs.require(InputKey::Circumference)? / TAU)
    }
}

/// L = π·r², or π·(d/2)² in diameter mode.
fn area(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let mut steps = Vec::new();
    let r = if inputs.contains(InputKey::Radius) {
        inputs.require(InputKey::Radius)?
    } else {
        let d = inputs.require(InputKey::Diameter)?;
        let r = d / 2.0;
        steps.push(Step::new("radius from diameter", "d / 2", r));
        r
    };
    let r_squared = r * r;
    steps.push(Step::new("radius squared", "r²", r_squared));
    let value = PI * r_squared;
    steps.push(Step::new("circle area", "π × r²", value));
    Ok(ComputationResult { value, unit: UnitClass::Area, steps })
}

/// K = 2πr, or πd in diameter mode.
fn circumference(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let mut steps = Vec::new();
    let value = if inputs.contains(InputKey::Radius) {
        let r = inputs.require(InputKey::Radius)?;
        let value = TAU * r;
        steps.push(Step::new("circumference", "2 × π × r", value));
        value
    } else {
        let d = inputs.require(InputKey::Diameter)?;
        let value = PI * d;
        steps.push(Step::new("circumference", "π × d", value));
        value
    };
    Ok(ComputationResult { value, unit: UnitClass::Length, steps })
}

/// A = (θ/360)·π·r². The full-circle area and the θ/360 ratio are exposed
/// as steps so the display can show what share of the disc the sector is.
fn sector(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let r = inputs.require(InputKey::Radius)?;
    let theta = inputs.require_angle(FULL_TURN_DEGREES)?;
    let full_area = PI * r * r;
    let ratio = theta / FULL_TURN_DEGREES;
    let value = ratio * full_area;
    let steps = vec![
        Step::new("full circle area", "π × r²", full_area),
        Step::new("sector ratio", "θ / 360", ratio),
        Step::new("sector area", "(θ/360) × π × r²", value),
    ];
    Ok(ComputationResult { value, unit: UnitClass::Area, steps })
}

/// **Mathematical Foundation: Circular Segment Area**
///
/// The segment is what remains of a sector after removing the triangle
/// spanned by the two radii:
///
/// ```text
/// A = (θ/360)·π·r² − ½·r²·sin(θ)
/// ```
///
/// With θ in radians the sector term is ½·r²·θ, so A = ½·r²·(θ − sin θ),
/// which is non-negative for all θ ∈ [0, 2π]. Past 180° the sine turns
/// negative and the triangle term adds area, which is exactly the major
/// segment.
fn segment(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let r = inputs.require(InputKey::Radius)?;
    let theta = inputs.require_angle(FULL_TURN_DEGREES)?;
    let sector_area = theta / FULL_TURN_DEGREES * PI * r * r;
    let sine = theta.to_radians().sin();
    let triangle_area = 0.5 * r * r * sine;
    let value = sector_area - triangle_area;
    let steps = vec![
        Step::new("sector area", "(θ/360) × π × r²", sector_area),
        Step::new("sine of θ", "sin(θ)", sine),
        Step::new("triangle area", "½ × r² × sin(θ)", triangle_area),
        Step::new("segment area", "sector − triangle", value),
    ];
    Ok(ComputationResult { value, unit: UnitClass::Area, steps })
}

/// r from d, L or K, in that lookup order.
fn radius(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let mut steps = Vec::new();
    let value = if inputs.contains(InputKey::Diameter) {
        let d = inputs.require(InputKey::Diameter)?;
        let value = d / 2.0;
        steps.push(Step::new("radius", "d / 2", value));
        value
    } else if inputs.contains(InputKey::Area) {
        let l = inputs.require(InputKey::Area)?;
        let ratio = l / PI;
        steps.push(Step::new("area over π", "L / π", ratio));
        let value = ratio.sqrt();
        steps.push(Step::new("radius", "√(L / π)", value));
        value
    } else {
        let k = inputs.require(InputKey::Circumference)?;
        steps.push(Step::new("two π", "2 × π", TAU));
        let value = k / TAU;
        steps.push(Step::new("radius", "K / (2 × π)", value));
        value
    };
    Ok(ComputationResult { value, unit: UnitClass::Length, steps })
}

/// d from r, L or K, in that lookup order.
fn diameter(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let mut steps = Vec::new();
    let value = if inputs.contains(InputKey::Radius) {
        let r = inputs.require(InputKey::Radius)?;
        let value = 2.0 * r;
        steps.push(Step::new("diameter", "2 × r", value));
        value
    } else if inputs.contains(InputKey::Area) {
        let l = inputs.require(InputKey::Area)?;
        let ratio = l / PI;
        steps.push(Step::new("area over π", "L / π", ratio));
        let r = ratio.sqrt();
        steps.push(Step::new("radius", "√(L / π)", r));
        let value = 2.0 * r;
        steps.push(Step::new("diameter", "2 × √(L / π)", value));
        value
    } else {
        let k = inputs.require(InputKey::Circumference)?;
        let value = k / PI;
        steps.push(Step::new("diameter", "K / π", value));
        value
    };
    Ok(ComputationResult { value, unit: UnitClass::Length, steps })
}

/// S = (θ/360)·2πr, the sector ratio applied to the full circumference.
fn arc(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let r = inputs.require(InputKey::Radius)?;
    let theta = inputs.require_angle(FULL_TURN_DEGREES)?;
    let full_circumference = TAU * r;
    let ratio = theta / FULL_TURN_DEGREES;
    let value = ratio * full_circumference;
    let steps = vec![
        Step::new("full circumference", "2 × π × r", full_circumference),
        Step::new("arc ratio", "θ / 360", ratio),
        Step::new("arc length", "(θ/360) × 2 × π × r", value),
    ];
    Ok(ComputationResult { value, unit: UnitClass::Length, steps })
}

/// C = 2·r·sin(θ/2) by central angle (θ ≤ 180°), or C = 2·√(r² − a²) by
/// perpendicular distance from the center. The distance mode rejects
/// a > r, where no chord exists.
fn chord(inputs: &InputSet) -> Result<ComputationResult, InvalidInputError> {
    let r = inputs.require(InputKey::Radius)?;
    if inputs.contains(InputKey::AngleDegrees) {
        let theta = inputs.require_angle(HALF_TURN_DEGREES)?;
        let half_angle = theta / 2.0;
        let sine = half_angle.to_radians().sin();
        let value = 2.0 * r * sine;
        let steps = vec![
            Step::new("half angle", "θ / 2", half_angle),
            Step::new("sine of half angle", "sin(θ/2)", sine),
            Step::new("chord length", "2 × r × sin(θ/2)", value),
        ];
        Ok(ComputationResult { value, unit: UnitClass::Length, steps })
    } else {
        let a = inputs.require(InputKey::DistanceFromCenter)?;
        if a > r {
            return Err(InvalidInputError::DistanceExceedsRadius { distance: a, radius: r });
        }
        let r_squared = r * r;
        let a_squared = a * a;
        let difference = r_squared - a_squared;
        let half_chord = difference.sqrt();
        let value = 2.0 * half_chord;
        let steps = vec![
            Step::new("radius squared", "r²", r_squared),
            Step::new("distance squared", "a²", a_squared),
            Step::new("difference", "r² − a²", difference),
            Step::new("half chord", "√(r² − a²)", half_chord),
            Step::new("chord length", "2 × √(r² − a²)", value),
        ];
        Ok(ComputationResult { value, unit: UnitClass::Length, steps })
    }
}
