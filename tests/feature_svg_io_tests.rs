#![cfg(feature = "svg-io")]

use roundel::render::svg_document;
use roundel::{CircleComponent, InputKey, InputSet, build_params};

#[test]
fn every_default_figure_renders() {
    for component in CircleComponent::ALL {
        let params = build_params(component, &component.default_inputs()).unwrap();
        let markup = svg_document(&params).to_string();
        assert!(
            markup.contains("<svg"),
            "missing svg root element for {component}"
        );
        assert!(
            markup.contains("viewBox"),
            "figure for {component} is not framed"
        );
        assert!(
            markup.contains("<circle"),
            "figure for {component} does not draw the circle"
        );
    }
}

#[test]
fn the_view_window_matches_the_params() {
    let params = build_params(
        CircleComponent::Area,
        &InputSet::new().with(InputKey::Radius, 7.0),
    )
    .unwrap();
    let markup = svg_document(&params).to_string();
    // half_extent = 8 => viewBox "-8 -8 16 16"
    assert!(markup.contains("-8"), "window origin missing: {markup}");
    assert!(markup.contains("16"), "window size missing: {markup}");
}

#[test]
fn angular_figures_emit_arc_paths() {
    for component in [
        CircleComponent::Sector,
        CircleComponent::Segment,
        CircleComponent::Arc,
        CircleComponent::Chord,
    ] {
        let params = build_params(component, &component.default_inputs()).unwrap();
        let markup = svg_document(&params).to_string();
        assert!(
            markup.contains("<path"),
            "figure for {component} has no arc path"
        );
    }
}

#[test]
fn a_full_turn_sector_still_renders() {
    let params = build_params(
        CircleComponent::Sector,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::AngleDegrees, 360.0),
    )
    .unwrap();
    let markup = svg_document(&params).to_string();
    assert!(markup.contains("<path"), "full turn wedge vanished: {markup}");
}

#[test]
fn the_chord_figure_draws_the_chord() {
    let params = build_params(
        CircleComponent::Chord,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::DistanceFromCenter, 5.0),
    )
    .unwrap();
    let markup = svg_document(&params).to_string();
    assert!(markup.contains("<line"), "chord line missing: {markup}");
}
