use vector2d::Vector2D;

mod context;
mod document;
mod object;

pub use context::RenderContext;
pub use document::{Document, RenderingOpts};
pub use object::{escape, write_escaped, Circle, Object, Polyline, Text};

/// A point in SVG user space.  Type alias for 2D floating point vectors (in the geometric sense,
/// unlike [`Vec`])
pub type Point = Vector2D<f64>;
