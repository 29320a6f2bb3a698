use std::io::{self, Write};

use crate::Point;

/// An SVG `<circle>`.  Unless set, the centre is the origin and the radius is 0.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            radius: 0.0,
        }
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Sets the radius.  Negative values are not rejected; they're written to the SVG as-is
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub(super) fn render_object(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" />",
            self.center.x, self.center.y, self.radius
        )
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}
