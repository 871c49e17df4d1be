//! Rendering collaborators for [`DiagramParams`](crate::diagram::DiagramParams).
//!
//! Only SVG output lives here; the parameter records themselves are
//! renderer-agnostic.

mod svg;

pub use self::svg::svg_document;
