//! Diagram parameters: the small set of geometric values a rendering
//! collaborator needs to draw each lesson figure.

use crate::component::CircleComponent;
use crate::compute::resolve_radius;
use crate::errors::InvalidInputError;
use crate::float_types::{FULL_TURN_DEGREES, HALF_TURN_DEGREES, Real};
use crate::inputs::{InputKey, InputSet};
use nalgebra::Point2;

/// Which primitive the figure emphasizes on top of the circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Radius drawn from the center to (r, 0).
    RadiusLine,
    /// Diameter drawn from (−r, 0) to (r, 0).
    DiameterLine,
    /// The disc interior filled.
    FilledDisc,
    /// The circle outline itself emphasized.
    Outline,
    /// Sector wedge spanning [0°, θ].
    Wedge,
    /// Segment between chord and arc filled, chord drawn.
    SegmentFill,
    /// The arc spanning [0°, θ] stroked.
    ArcStroke,
    /// Chord between the arc endpoints, endpoints marked.
    ChordLine,
}

/// Geometric parameters for one figure, centered on the origin.
///
/// Plain data, no behavior; consumers decide how to draw it. Angles are
/// degrees measured counter-clockwise from the +x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramParams {
    pub figure: FigureKind,
    pub radius: Real,
    /// Central angle for the angle-parameterized figures.
    pub angle_degrees: Option<Real>,
    /// Chord endpoints, at circle angles 0 and θ.
    pub chord: Option<[Point2<Real>; 2]>,
    /// Perpendicular distance from the center to the chord, when that was
    /// the input mode.
    pub distance_from_center: Option<Real>,
    /// Half of the square window the figure is framed in.
    pub half_extent: Real,
}

/// Margin around the circle inside the view window.
const FRAME_MARGIN: Real = 1.0;
/// The circumference figure gets extra room for its emphasis stroke.
const OUTLINE_FRAME_MARGIN: Real = 1.5;

/// Derives the figure parameters for `component`.
///
/// Runs the same validation as [`compute`](crate::compute::compute), so for
/// any input set the engine accepts this cannot fail. The radius is
/// re-derived from whichever mode key is present, and chord-by-distance
/// inputs are converted to the uniform angle parameterization via
/// θ = 2·arccos(a/r).
pub fn build_params(
    component: CircleComponent,
    inputs: &InputSet,
) -> Result<DiagramParams, InvalidInputError> {
    let params = match component {
        CircleComponent::Area => {
            plain(FigureKind::FilledDisc, resolve_radius(inputs)?, FRAME_MARGIN)
        },
        CircleComponent::Circumference => {
            plain(FigureKind::Outline, resolve_radius(inputs)?, OUTLINE_FRAME_MARGIN)
        },
        CircleComponent::Radius => {
            plain(FigureKind::RadiusLine, resolve_radius(inputs)?, FRAME_MARGIN)
        },
        CircleComponent::Diameter => {
            plain(FigureKind::DiameterLine, resolve_radius(inputs)?, FRAME_MARGIN)
        },
        CircleComponent::Sector => angular(FigureKind::Wedge, inputs, false)?,
        CircleComponent::Segment => angular(FigureKind::SegmentFill, inputs, true)?,
        CircleComponent::Arc => angular(FigureKind::ArcStroke, inputs, false)?,
        CircleComponent::Chord => chord_figure(inputs)?,
    };
    Ok(params)
}

const fn plain(figure: FigureKind, radius: Real, margin: Real) -> DiagramParams {
    DiagramParams {
        figure,
        radius,
        angle_degrees: None,
        chord: None,
        distance_from_center: None,
        half_extent: radius + margin,
    }
}

/// Sector, segment and arc share the radius + central angle
/// parameterization; the segment also carries its chord.
fn angular(
    figure: FigureKind,
    inputs: &InputSet,
    with_chord: bool,
) -> Result<DiagramParams, InvalidInputError> {
    let r = inputs.require(InputKey::Radius)?;
    let theta = inputs.require_angle(FULL_TURN_DEGREES)?;
    Ok(DiagramParams {
        figure,
        radius: r,
        angle_degrees: Some(theta),
        chord: with_chord.then(|| chord_endpoints(r, theta)),
        distance_from_center: None,
        half_extent: r + FRAME_MARGIN,
    })
}

fn chord_figure(inputs: &InputSet) -> Result<DiagramParams, InvalidInputError> {
    let r = inputs.require(InputKey::Radius)?;
    let (theta, distance) = if inputs.contains(InputKey::AngleDegrees) {
        (inputs.require_angle(HALF_TURN_DEGREES)?, None)
    } else {
        let a = inputs.require(InputKey::DistanceFromCenter)?;
        if a > r {
            return Err(InvalidInputError::DistanceExceedsRadius { distance: a, radius: r });
        }
        (equivalent_angle(r, a), Some(a))
    };
    Ok(DiagramParams {
        figure: FigureKind::ChordLine,
        radius: r,
        angle_degrees: Some(theta),
        chord: Some(chord_endpoints(r, theta)),
        distance_from_center: distance,
        half_extent: r + FRAME_MARGIN,
    })
}

/// θ = 2·arccos(a/r) in degrees. The degenerate r = 0 circle maps to 0°.
fn equivalent_angle(r: Real, a: Real) -> Real {
    if r == 0.0 {
        return 0.0;
    }
    // Clamp against float noise when a ≈ r.
    2.0 * (a / r).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Chord endpoints at circle angles 0 and θ.
fn chord_endpoints(r: Real, theta_degrees: Real) -> [Point2<Real>; 2] {
    let theta = theta_degrees.to_radians();
    [
        Point2::new(r, 0.0),
        Point2::new(r * theta.cos(), r * theta.sin()),
    ]
}
