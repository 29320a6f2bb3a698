use std::io::{self, Write};

use itertools::Itertools;

use crate::Point;

/// An SVG `<polyline>`: a sequence of points joined by straight lines, in the order they were
/// added.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends a point to the end of the line.  Repeated points are kept
    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub(super) fn render_object(&self, out: &mut dyn Write) -> io::Result<()> {
        // The point string is a space-delimited list of `x,y` pairs, so the unit square at the
        // origin would be `"0,0 0,1 1,1 1,0"`
        let coord_string = self
            .points
            .iter()
            .format_with(" ", |p, f| f(&format_args!("{},{}", p.x, p.y)));
        write!(out, "<polyline points=\"{}\" />", coord_string)
    }
}
