mod support;

use roundel::float_types::PI;
use roundel::{
    CircleComponent, InputKey, InputSet, InvalidInputError, UnitClass, compute,
};

#[test]
fn area_from_radius_matches_pi_r_squared() {
    for r in [0.0, 0.5, 1.0, 7.0, 123.45] {
        let inputs = InputSet::new().with(InputKey::Radius, r);
        let result = compute(CircleComponent::Area, &inputs).unwrap();
        assert!(
            support::approx_eq(result.value, PI * r * r, 1e-9),
            "area mismatch at r={r}"
        );
        assert_eq!(result.unit, UnitClass::Area);
    }
}

#[test]
fn area_modes_agree() {
    for r in [0.0, 1.0, 7.0, 42.5] {
        let by_radius = compute(
            CircleComponent::Area,
            &InputSet::new().with(InputKey::Radius, r),
        )
        .unwrap();
        let by_diameter = compute(
            CircleComponent::Area,
            &InputSet::new().with(InputKey::Diameter, 2.0 * r),
        )
        .unwrap();
        assert!(
            support::approx_eq(by_radius.value, by_diameter.value, 1e-9),
            "radius and diameter modes disagree at r={r}"
        );
    }
}

#[test]
fn area_of_radius_seven() {
    // r = 7 => L ≈ 153.94
    let result = compute(
        CircleComponent::Area,
        &InputSet::new().with(InputKey::Radius, 7.0),
    )
    .unwrap();
    assert!(support::approx_eq(result.value, 153.938_04, 1e-3));
}

#[test]
fn circumference_of_radius_seven() {
    // r = 7 => K ≈ 43.98, and the πd mode must agree
    let by_radius = compute(
        CircleComponent::Circumference,
        &InputSet::new().with(InputKey::Radius, 7.0),
    )
    .unwrap();
    let by_diameter = compute(
        CircleComponent::Circumference,
        &InputSet::new().with(InputKey::Diameter, 14.0),
    )
    .unwrap();
    assert!(support::approx_eq(by_radius.value, 43.982_297, 1e-3));
    assert!(support::approx_eq(by_radius.value, by_diameter.value, 1e-9));
    assert_eq!(by_radius.unit, UnitClass::Length);
}

#[test]
fn radius_diameter_round_trip() {
    for d in [0.0, 1.0, 14.0, 99.9] {
        let r = compute(
            CircleComponent::Radius,
            &InputSet::new().with(InputKey::Diameter, d),
        )
        .unwrap()
        .value;
        let back = compute(
            CircleComponent::Diameter,
            &InputSet::new().with(InputKey::Radius, r),
        )
        .unwrap()
        .value;
        assert!(
            support::approx_eq(back, d, 1e-9),
            "round trip drifted for d={d}"
        );
    }
}

#[test]
fn radius_recovered_from_area_and_circumference() {
    let r = 7.0;
    let from_area = compute(
        CircleComponent::Radius,
        &InputSet::new().with(InputKey::Area, PI * r * r),
    )
    .unwrap();
    let from_circumference = compute(
        CircleComponent::Radius,
        &InputSet::new().with(InputKey::Circumference, 2.0 * PI * r),
    )
    .unwrap();
    assert!(support::approx_eq(from_area.value, r, 1e-9));
    assert!(support::approx_eq(from_circumference.value, r, 1e-9));
}

#[test]
fn diameter_recovered_from_area_and_circumference() {
    let r = 5.5;
    let from_area = compute(
        CircleComponent::Diameter,
        &InputSet::new().with(InputKey::Area, PI * r * r),
    )
    .unwrap();
    let from_circumference = compute(
        CircleComponent::Diameter,
        &InputSet::new().with(InputKey::Circumference, 2.0 * PI * r),
    )
    .unwrap();
    assert!(support::approx_eq(from_area.value, 2.0 * r, 1e-9));
    assert!(support::approx_eq(from_circumference.value, 2.0 * r, 1e-9));
}

#[test]
fn sector_at_zero_and_full_turn() {
    let r = 10.0;
    let at_zero = compute(
        CircleComponent::Sector,
        &InputSet::new()
            .with(InputKey::Radius, r)
            .with(InputKey::AngleDegrees, 0.0),
    )
    .unwrap();
    let at_full = compute(
        CircleComponent::Sector,
        &InputSet::new()
            .with(InputKey::Radius, r)
            .with(InputKey::AngleDegrees, 360.0),
    )
    .unwrap();
    assert_eq!(at_zero.value, 0.0, "zero angle must give a zero sector");
    assert!(
        support::approx_eq(at_full.value, PI * r * r, 1e-9),
        "full turn must give the full circle area"
    );
}

#[test]
fn sector_segment_arc_at_sixty_degrees() {
    // r = 10, θ = 60° => sector ≈ 52.36, segment ≈ 9.06, arc ≈ 10.47
    let inputs = InputSet::new()
        .with(InputKey::Radius, 10.0)
        .with(InputKey::AngleDegrees, 60.0);
    let sector = compute(CircleComponent::Sector, &inputs).unwrap();
    let segment = compute(CircleComponent::Segment, &inputs).unwrap();
    let arc = compute(CircleComponent::Arc, &inputs).unwrap();
    assert!(support::approx_eq(sector.value, 52.359_878, 1e-3));
    assert!(support::approx_eq(segment.value, 9.058_607, 1e-3));
    assert!(support::approx_eq(arc.value, 10.471_976, 1e-3));
}

#[test]
fn minor_segment_never_exceeds_its_sector() {
    // Up to the half turn the triangle term is subtracted, so the segment
    // fits inside the sector
    let r = 3.0;
    for step in 0..=12 {
        let theta = step as f64 * 15.0;
        let inputs = InputSet::new()
            .with(InputKey::Radius, r)
            .with(InputKey::AngleDegrees, theta);
        let sector = compute(CircleComponent::Sector, &inputs).unwrap().value;
        let segment = compute(CircleComponent::Segment, &inputs).unwrap().value;
        assert!(
            segment <= sector + 1e-12,
            "segment {segment} exceeds sector {sector} at θ={theta}"
        );
        assert!(segment >= -1e-12, "segment must not be negative at θ={theta}");
    }
}

#[test]
fn major_segment_adds_the_triangle_past_the_half_turn() {
    // Past 180° the sine is negative: the segment gains the triangle on top
    // of the sector and approaches the full circle at 360°
    let r = 3.0;
    for step in 13..=24 {
        let theta = step as f64 * 15.0;
        let inputs = InputSet::new()
            .with(InputKey::Radius, r)
            .with(InputKey::AngleDegrees, theta);
        let sector = compute(CircleComponent::Sector, &inputs).unwrap().value;
        let segment = compute(CircleComponent::Segment, &inputs).unwrap().value;
        assert!(
            segment >= sector - 1e-12,
            "major segment {segment} fell below its sector {sector} at θ={theta}"
        );
        assert!(
            segment <= PI * r * r + 1e-9,
            "segment {segment} exceeds the full circle at θ={theta}"
        );
    }
}

#[test]
fn chord_modes_agree() {
    // r = 10, a = 5 => θ = 2·arccos(0.5) = 120°, C ≈ 17.32 either way
    let by_distance = compute(
        CircleComponent::Chord,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::DistanceFromCenter, 5.0),
    )
    .unwrap();
    let by_angle = compute(
        CircleComponent::Chord,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::AngleDegrees, 120.0),
    )
    .unwrap();
    assert!(support::approx_eq(by_distance.value, 17.320_508, 1e-3));
    assert!(support::approx_eq(by_distance.value, by_angle.value, 1e-9));
}

#[test]
fn chord_distance_beyond_radius_is_rejected() {
    let result = compute(
        CircleComponent::Chord,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::DistanceFromCenter, 15.0),
    );
    assert_eq!(
        result,
        Err(InvalidInputError::DistanceExceedsRadius { distance: 15.0, radius: 10.0 })
    );
}

#[test]
fn zero_inputs_yield_zero_results() {
    // Radius, diameter and angle at zero cover a valid mode of every lesson
    let inputs = InputSet::new()
        .with(InputKey::Radius, 0.0)
        .with(InputKey::Diameter, 0.0)
        .with(InputKey::AngleDegrees, 0.0);
    for component in CircleComponent::ALL {
        let result = compute(component, &inputs).unwrap();
        assert_eq!(result.value, 0.0, "{component} must be zero for zero inputs");
    }
}

#[test]
fn missing_inputs_are_rejected() {
    let empty = InputSet::new();
    assert!(matches!(
        compute(CircleComponent::Area, &empty),
        Err(InvalidInputError::MissingInput(_))
    ));
    // Radius present but the sector still needs its angle
    let no_angle = InputSet::new().with(InputKey::Radius, 10.0);
    assert_eq!(
        compute(CircleComponent::Sector, &no_angle),
        Err(InvalidInputError::MissingInput(InputKey::AngleDegrees))
    );
}

#[test]
fn negative_inputs_are_rejected() {
    let result = compute(
        CircleComponent::Area,
        &InputSet::new().with(InputKey::Radius, -1.0),
    );
    assert_eq!(
        result,
        Err(InvalidInputError::NegativeInput { key: InputKey::Radius, value: -1.0 })
    );
}

#[test]
fn non_finite_inputs_are_rejected() {
    let result = compute(
        CircleComponent::Circumference,
        &InputSet::new().with(InputKey::Radius, f64::NAN),
    );
    assert!(matches!(
        result,
        Err(InvalidInputError::NonFiniteInput { key: InputKey::Radius, .. })
    ));
}

#[test]
fn angles_out_of_range_are_rejected() {
    let sector = compute(
        CircleComponent::Sector,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::AngleDegrees, 361.0),
    );
    assert_eq!(
        sector,
        Err(InvalidInputError::AngleOutOfRange { value: 361.0, max: 360.0 })
    );

    // Chord by angle is restricted to the half turn
    let chord = compute(
        CircleComponent::Chord,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::AngleDegrees, 181.0),
    );
    assert_eq!(
        chord,
        Err(InvalidInputError::AngleOutOfRange { value: 181.0, max: 180.0 })
    );
}

#[test]
fn steps_expose_worked_intermediates() {
    let sector = compute(
        CircleComponent::Sector,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::AngleDegrees, 60.0),
    )
    .unwrap();
    assert_eq!(sector.steps[0].label, "full circle area");
    assert!(support::approx_eq(sector.steps[0].value, PI * 100.0, 1e-9));
    assert_eq!(sector.steps[1].label, "sector ratio");
    assert!(support::approx_eq(sector.steps[1].value, 60.0 / 360.0, 1e-12));

    let segment = compute(
        CircleComponent::Segment,
        &InputSet::new()
            .with(InputKey::Radius, 10.0)
            .with(InputKey::AngleDegrees, 60.0),
    )
    .unwrap();
    let labels: Vec<_> = segment.steps.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        ["sector area", "sine of θ", "triangle area", "segment area"]
    );

    // Diameter mode spells out the derived radius first
    let area = compute(
        CircleComponent::Area,
        &InputSet::new().with(InputKey::Diameter, 14.0),
    )
    .unwrap();
    assert_eq!(area.steps[0].label, "radius from diameter");
    assert_eq!(area.steps[0].value, 7.0);
}

#[test]
fn last_step_restates_the_final_value() {
    for component in CircleComponent::ALL {
        let result = compute(component, &component.default_inputs()).unwrap();
        let last = result.steps.last().expect("every lesson has steps");
        assert_eq!(
            last.value, result.value,
            "{component} display could not be rebuilt from steps alone"
        );
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let inputs = InputSet::new()
        .with(InputKey::Radius, 10.0)
        .with(InputKey::AngleDegrees, 60.0);
    let first = compute(CircleComponent::Segment, &inputs).unwrap();
    let second = compute(CircleComponent::Segment, &inputs).unwrap();
    assert_eq!(first, second);
}
