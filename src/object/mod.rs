//! The drawable primitives which make up a [`Document`](crate::Document).  Each primitive knows
//! how to write its own tag; [`Object::render`] wraps that tag in the indentation and line ending
//! shared by every element.

mod circle;
mod polyline;
mod text;

use std::io::{self, Write};

use crate::RenderContext;

pub use circle::Circle;
pub use polyline::Polyline;
pub use text::{escape, write_escaped, Text};

/// A single drawable element of a [`Document`](crate::Document)
#[derive(Debug, Clone)]
pub enum Object {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl Object {
    /// Writes this `Object` as one complete line: indentation, the element's tag, then a newline
    pub fn render(&self, ctx: &mut RenderContext) -> io::Result<()> {
        ctx.render_indent()?;
        // Delegate the tag itself to the primitive
        match self {
            Object::Circle(c) => c.render_object(ctx.out())?,
            Object::Polyline(p) => p.render_object(ctx.out())?,
            Object::Text(t) => t.render_object(ctx.out())?,
        }
        writeln!(ctx.out())
    }

    /// The name of the SVG element which this `Object` renders to
    pub fn tag_name(&self) -> &'static str {
        match self {
            Object::Circle(_) => "circle",
            Object::Polyline(_) => "polyline",
            Object::Text(_) => "text",
        }
    }
}

impl From<Circle> for Object {
    fn from(c: Circle) -> Self {
        Object::Circle(c)
    }
}

impl From<Polyline> for Object {
    fn from(p: Polyline) -> Self {
        Object::Polyline(p)
    }
}

impl From<Text> for Object {
    fn from(t: Text) -> Self {
        Object::Text(t)
    }
}
