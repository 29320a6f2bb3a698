//! Indentation state threaded through a single render pass

use std::io::{self, Write};

/// The output sink of a render pass, along with how far the current line should be indented.
/// A `RenderContext` only borrows its sink; opening, buffering and closing it is up to the
/// caller.
pub struct RenderContext<'w> {
    out: &'w mut dyn Write,
    indent_step: usize,
    indent_depth: usize,
}

impl<'w> RenderContext<'w> {
    /// Creates a context which doesn't indent anything
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self::with_indent(out, 0, 0)
    }

    pub fn with_indent(out: &'w mut dyn Write, indent_step: usize, indent_depth: usize) -> Self {
        Self {
            out,
            indent_step,
            indent_depth,
        }
    }

    /// Creates a child context which writes to the same sink, but indented by one more step.
    /// The child borrows `self`, so the parent can't be written to until the child is dropped.
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent_depth: self.indent_depth + self.indent_step,
        }
    }

    /// Writes `indent_depth` spaces to the sink
    pub fn render_indent(&mut self) -> io::Result<()> {
        write!(self.out, "{:width$}", "", width = self.indent_depth)
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    pub fn indent_depth(&self) -> usize {
        self.indent_depth
    }
}
