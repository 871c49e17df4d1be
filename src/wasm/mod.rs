//! JS bindings for the lesson engine.
//!
//! Thin `wasm-bindgen` wrappers around [`compute`](crate::compute::compute)
//! and [`build_params`](crate::diagram::build_params). Components and input
//! keys cross the boundary as their string slugs / field names; results and
//! figure parameters are exposed through getter wrappers.

use wasm_bindgen::prelude::*;

use crate::component::CircleComponent;
use crate::compute::{ComputationResult, compute};
use crate::diagram::{DiagramParams, build_params};
use crate::float_types::Real;
use crate::inputs::{InputKey, InputSet};

fn parse_component(slug: &str) -> Result<CircleComponent, JsValue> {
    CircleComponent::from_slug(slug)
        .ok_or_else(|| JsValue::from_str(&format!("unknown component: {slug}")))
}

/// The lesson slugs in menu order, for building a component picker.
#[wasm_bindgen]
pub fn lesson_slugs() -> Vec<String> {
    CircleComponent::ALL
        .iter()
        .map(|c| c.slug().to_string())
        .collect()
}

#[wasm_bindgen]
#[derive(Default)]
pub struct InputSetJs {
    pub(crate) inner: InputSet,
}

#[wasm_bindgen]
impl InputSetJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> InputSetJs {
        InputSetJs { inner: InputSet::new() }
    }

    /// Set a field by its form name, e.g. `"radius"` or `"angleDegrees"`.
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        let key = InputKey::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown input: {name}")))?;
        self.inner.set(key, value as Real);
        Ok(())
    }
}

#[wasm_bindgen]
pub struct ComputationResultJs {
    pub(crate) inner: ComputationResult,
}

#[wasm_bindgen]
impl ComputationResultJs {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.inner.value as f64
    }

    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.inner.unit.label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn step_count(&self) -> usize {
        self.inner.steps.len()
    }

    pub fn step_label(&self, index: usize) -> Option<String> {
        self.inner.steps.get(index).map(|s| s.label.to_string())
    }

    pub fn step_expression(&self, index: usize) -> Option<String> {
        self.inner.steps.get(index).map(|s| s.expression.to_string())
    }

    pub fn step_value(&self, index: usize) -> Option<f64> {
        self.inner.steps.get(index).map(|s| s.value as f64)
    }
}

// Rust-only conversions (not visible to JS)
impl From<ComputationResult> for ComputationResultJs {
    fn from(result: ComputationResult) -> Self {
        ComputationResultJs { inner: result }
    }
}

#[wasm_bindgen]
pub struct DiagramParamsJs {
    pub(crate) inner: DiagramParams,
}

#[wasm_bindgen]
impl DiagramParamsJs {
    #[wasm_bindgen(getter)]
    pub fn figure(&self) -> String {
        format!("{:?}", self.inner.figure)
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.inner.radius as f64
    }

    #[wasm_bindgen(getter)]
    pub fn angle_degrees(&self) -> Option<f64> {
        self.inner.angle_degrees.map(|a| a as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn distance_from_center(&self) -> Option<f64> {
        self.inner.distance_from_center.map(|a| a as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn half_extent(&self) -> f64 {
        self.inner.half_extent as f64
    }

    /// Chord endpoints flattened as `[x1, y1, x2, y2]`; empty when the
    /// figure has no chord.
    pub fn chord_coordinates(&self) -> Vec<f64> {
        match &self.inner.chord {
            Some([p, q]) => vec![p.x as f64, p.y as f64, q.x as f64, q.y as f64],
            None => Vec::new(),
        }
    }

    /// The figure rendered as a standalone SVG string.
    #[cfg(feature = "svg-io")]
    pub fn to_svg(&self) -> String {
        crate::render::svg_document(&self.inner).to_string()
    }
}

// Rust-only conversions (not visible to JS)
impl From<DiagramParams> for DiagramParamsJs {
    fn from(params: DiagramParams) -> Self {
        DiagramParamsJs { inner: params }
    }
}

/// Compute a lesson result; `component` is a slug from [`lesson_slugs`].
#[wasm_bindgen]
pub fn compute_lesson(
    component: &str,
    inputs: &InputSetJs,
) -> Result<ComputationResultJs, JsValue> {
    let component = parse_component(component)?;
    compute(component, &inputs.inner)
        .map(ComputationResultJs::from)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Derive the figure parameters for a lesson; `component` is a slug from
/// [`lesson_slugs`].
#[wasm_bindgen]
pub fn lesson_diagram(
    component: &str,
    inputs: &InputSetJs,
) -> Result<DiagramParamsJs, JsValue> {
    let component = parse_component(component)?;
    build_params(component, &inputs.inner)
        .map(DiagramParamsJs::from)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}
