//! SVG figure construction.

use crate::diagram::{DiagramParams, FigureKind};
use crate::float_types::{FULL_TURN_DEGREES, HALF_TURN_DEGREES, Real, tolerance};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path};

// Figure palette
const CIRCLE_BLUE: &str = "#1976D2";
const DISC_GREEN: &str = "#4CAF50";
const EMPHASIS_ORANGE: &str = "#FF9800";
const WEDGE_FILL: &str = "#FF7043";
const WEDGE_EDGE: &str = "#D84315";
const SEGMENT_FILL: &str = "#AB47BC";
const SEGMENT_EDGE: &str = "#7B1FA2";
const ARC_RED: &str = "#FF5722";
const LINE_RED: &str = "red";
const LINE_GREEN: &str = "green";
const CENTER_BLACK: &str = "black";

/// Builds a standalone SVG document for one figure.
///
/// The viewBox is the square window `±half_extent` around the center; the
/// y axis is flipped point-by-point so counter-clockwise angles appear
/// counter-clockwise on screen. Pure document construction, no I/O.
pub fn svg_document(params: &DiagramParams) -> Document {
    let h = params.half_extent;
    let r = params.radius;
    let theta = params.angle_degrees.unwrap_or(0.0);
    let width = stroke_width(params);

    let document = Document::new().set("viewBox", (-h, -h, 2.0 * h, 2.0 * h));

    match params.figure {
        FigureKind::RadiusLine => document
            .add(outline(r, CIRCLE_BLUE, width))
            .add(axis_line(0.0, r, LINE_RED, width))
            .add(dot(0.0, 0.0, LINE_RED, width)),
        FigureKind::DiameterLine => document
            .add(outline(r, CIRCLE_BLUE, width))
            .add(axis_line(-r, r, LINE_GREEN, width))
            .add(dot(0.0, 0.0, LINE_RED, width)),
        FigureKind::FilledDisc => document
            .add(disc(r))
            .add(outline(r, CIRCLE_BLUE, width))
            .add(axis_line(0.0, r, LINE_RED, width * 0.75))
            .add(dot(0.0, 0.0, LINE_RED, width)),
        FigureKind::Outline => document
            .add(outline(r, EMPHASIS_ORANGE, width * 1.5))
            .add(dot(0.0, 0.0, LINE_RED, width)),
        FigureKind::Wedge => document
            .add(dashed_outline(r, width * 0.75))
            .add(wedge(r, theta, width))
            .add(arc_stroke(r, theta, ARC_RED, width))
            .add(dot(0.0, 0.0, CENTER_BLACK, width)),
        FigureKind::SegmentFill => document
            .add(outline(r, CIRCLE_BLUE, width * 0.75))
            .add(segment_fill(r, theta, width))
            .add(arc_stroke(r, theta, ARC_RED, width))
            .add(chord_line(params, width))
            .add(dot(0.0, 0.0, CENTER_BLACK, width)),
        FigureKind::ArcStroke => document
            .add(outline(r, CIRCLE_BLUE, width * 0.75))
            .add(radius_legs(r, theta, width))
            .add(arc_stroke(r, theta, ARC_RED, width * 2.0))
            .add(dot(0.0, 0.0, CENTER_BLACK, width)),
        FigureKind::ChordLine => {
            let [(x1, y1), (x2, y2)] = chord_points(params);
            document
                .add(outline(r, CIRCLE_BLUE, width * 0.75))
                .add(arc_stroke(r, theta, EMPHASIS_ORANGE, width * 0.75))
                .add(chord_line(params, width * 1.5))
                .add(dot(x1, y1, LINE_GREEN, width))
                .add(dot(x2, y2, LINE_GREEN, width))
                .add(dot(0.0, 0.0, CENTER_BLACK, width))
        },
    }
}

/// Stroke width scaled to the frame so figures read the same at any radius.
fn stroke_width(params: &DiagramParams) -> Real {
    params.half_extent / 40.0
}

/// Point on the circle in SVG coordinates (y flipped).
fn point_at(r: Real, theta_degrees: Real) -> (Real, Real) {
    let theta = theta_degrees.to_radians();
    (r * theta.cos(), -r * theta.sin())
}

fn is_full_turn(theta_degrees: Real) -> bool {
    (FULL_TURN_DEGREES - theta_degrees).abs() <= tolerance()
}

fn large_arc(theta_degrees: Real) -> Real {
    if theta_degrees > HALF_TURN_DEGREES { 1.0 } else { 0.0 }
}

fn outline(r: Real, stroke: &str, width: Real) -> Circle {
    Circle::new()
        .set("cx", 0.0)
        .set("cy", 0.0)
        .set("r", r)
        .set("fill", "none")
        .set("stroke", stroke)
        .set("stroke-width", width)
}

fn dashed_outline(r: Real, width: Real) -> Circle {
    outline(r, CIRCLE_BLUE, width)
        .set("stroke-dasharray", format!("{} {}", 4.0 * width, 3.0 * width))
}

fn disc(r: Real) -> Circle {
    Circle::new()
        .set("cx", 0.0)
        .set("cy", 0.0)
        .set("r", r)
        .set("fill", DISC_GREEN)
        .set("fill-opacity", 0.3)
}

fn dot(x: Real, y: Real, fill: &str, width: Real) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", 1.5 * width)
        .set("fill", fill)
}

/// Horizontal line through the center, from `from_x` to `to_x`.
fn axis_line(from_x: Real, to_x: Real, stroke: &str, width: Real) -> Line {
    Line::new()
        .set("x1", from_x)
        .set("y1", 0.0)
        .set("x2", to_x)
        .set("y2", 0.0)
        .set("stroke", stroke)
        .set("stroke-width", width)
}

fn line_to_angle(r: Real, theta_degrees: Real, stroke: &str, width: Real) -> Line {
    let (x, y) = point_at(r, theta_degrees);
    Line::new()
        .set("x1", 0.0)
        .set("y1", 0.0)
        .set("x2", x)
        .set("y2", y)
        .set("stroke", stroke)
        .set("stroke-width", width)
}

/// The two radii bounding an angular figure.
fn radius_legs(r: Real, theta_degrees: Real, width: Real) -> Group {
    Group::new()
        .add(line_to_angle(r, 0.0, CIRCLE_BLUE, width))
        .add(line_to_angle(r, theta_degrees, CIRCLE_BLUE, width))
}

/// A full turn as two half arcs; a single SVG arc cannot close on its own
/// start point.
fn full_disc_data(r: Real) -> Data {
    Data::new()
        .move_to((r, 0.0))
        .elliptical_arc_to((r, r, 0.0, 0.0, 0.0, -r, 0.0))
        .elliptical_arc_to((r, r, 0.0, 0.0, 0.0, r, 0.0))
        .close()
}

fn arc_data(r: Real, theta_degrees: Real) -> Data {
    let (x, y) = point_at(r, theta_degrees);
    Data::new()
        .move_to((r, 0.0))
        .elliptical_arc_to((r, r, 0.0, large_arc(theta_degrees), 0.0, x, y))
}

fn wedge(r: Real, theta_degrees: Real, width: Real) -> Path {
    let data = if is_full_turn(theta_degrees) {
        full_disc_data(r)
    } else {
        let (x, y) = point_at(r, theta_degrees);
        Data::new()
            .move_to((0.0, 0.0))
            .line_to((r, 0.0))
            .elliptical_arc_to((r, r, 0.0, large_arc(theta_degrees), 0.0, x, y))
            .close()
    };
    Path::new()
        .set("d", data)
        .set("fill", WEDGE_FILL)
        .set("fill-opacity", 0.4)
        .set("stroke", WEDGE_EDGE)
        .set("stroke-width", width)
}

/// The region between the arc and the chord; closing the arc path draws
/// the chord edge.
fn segment_fill(r: Real, theta_degrees: Real, width: Real) -> Path {
    let data = if is_full_turn(theta_degrees) {
        full_disc_data(r)
    } else {
        arc_data(r, theta_degrees).close()
    };
    Path::new()
        .set("d", data)
        .set("fill", SEGMENT_FILL)
        .set("fill-opacity", 0.4)
        .set("stroke", SEGMENT_EDGE)
        .set("stroke-width", width)
}

fn arc_stroke(r: Real, theta_degrees: Real, stroke: &str, width: Real) -> Path {
    let data = if is_full_turn(theta_degrees) {
        full_disc_data(r)
    } else {
        arc_data(r, theta_degrees)
    };
    Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", stroke)
        .set("stroke-width", width)
}

/// Chord endpoints in SVG coordinates, from the params when present.
fn chord_points(params: &DiagramParams) -> [(Real, Real); 2] {
    match params.chord {
        Some([p, q]) => [(p.x, -p.y), (q.x, -q.y)],
        None => {
            let r = params.radius;
            [(r, 0.0), point_at(r, params.angle_degrees.unwrap_or(0.0))]
        },
    }
}

fn chord_line(params: &DiagramParams, width: Real) -> Line {
    let [(x1, y1), (x2, y2)] = chord_points(params);
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", LINE_GREEN)
        .set("stroke-width", width)
}
