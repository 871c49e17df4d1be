//! Closed-form **circle geometry lessons**: the eight classic components of a
//! circle (area, circumference, sector, segment, radius, diameter, arc, chord)
//! as pure functions over named numeric inputs, producing the final value, the
//! worked intermediate steps a teaching display replays, and the parameters a
//! rendering collaborator needs to draw the figure.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render [`DiagramParams`] to standalone SVG documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: JS bindings for the engine via wasm-bindgen

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod component;
pub mod compute;
pub mod diagram;
pub mod errors;
pub mod float_types;
pub mod inputs;
pub mod session;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use component::{CircleComponent, UnitClass};
pub use compute::{ComputationResult, Step, compute};
pub use diagram::{DiagramParams, FigureKind, build_params};
pub use errors::InvalidInputError;
pub use inputs::{InputKey, InputSet};
pub use session::{Screen, Session};

#[cfg(feature = "svg-io")]
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;
