//! Code to write a full SVG document

use std::io::{self, Write};

use crate::{Object, RenderContext};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_OPEN_TAG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_CLOSE_TAG: &str = "</svg>";

/// An SVG document: an ordered list of [`Object`]s, drawn in the order they were added.  Once an
/// [`Object`] is added, the `Document` owns it and it can no longer be modified or removed.
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    /// Creates an empty `Document`
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Adds a new primitive to the end of this `Document`
    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    /// Writes this `Document` to `out` using the default [`RenderingOpts`].  The output ends with
    /// the closing `</svg>` tag, with no newline after it.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.render_with(out, &RenderingOpts::default())
    }

    /// Writes this `Document` to `out`, indenting the child elements according to `opts`
    pub fn render_with(&self, out: &mut dyn Write, opts: &RenderingOpts) -> io::Result<()> {
        log::debug!(
            "Rendering SVG document with {} objects (indent depth {}, step {})",
            self.objects.len(),
            opts.indent_depth,
            opts.indent_step
        );

        writeln!(out, "{}", XML_DECLARATION)?;
        writeln!(out, "{}", SVG_OPEN_TAG)?;

        let mut ctx = RenderContext::with_indent(&mut *out, opts.indent_step, opts.indent_depth);
        for obj in &self.objects {
            log::trace!("Rendering <{}>", obj.tag_name());
            obj.render(&mut ctx)?;
        }

        write!(out, "{}", SVG_CLOSE_TAG)
    }

    /// Renders this `Document` to a `String`
    pub fn svg_string(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf)
            .expect("Writing to a `Vec<u8>` can't fail");
        String::from_utf8(buf).expect("Rendered SVG should always be valid UTF-8")
    }
}

/// Configuration for how a [`Document`] should be laid out
#[derive(Debug, Clone)]
pub struct RenderingOpts {
    /// How many spaces the top-level elements are indented by
    pub indent_depth: usize,
    /// How many extra spaces each level of nesting adds
    pub indent_step: usize,
}

impl Default for RenderingOpts {
    fn default() -> Self {
        Self {
            indent_depth: 2,
            indent_step: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{Circle, Point, Polyline, Text};

    #[test]
    fn empty_document() {
        assert_eq!(
            Document::new().svg_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
             </svg>"
        );
    }

    #[test]
    fn circle_and_text() {
        let mut doc = Document::new();
        doc.add(Circle::new().center(Point::new(20.0, 20.0)).radius(10.0));
        doc.add(
            Text::new()
                .position(Point::new(10.0, 100.0))
                .offset(Point::new(0.0, 0.0))
                .font_size(12)
                .data("Hello"),
        );

        let mut buf = Vec::new();
        doc.render(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
             \x20 <circle cx=\"20\" cy=\"20\" r=\"10\" />\n\
             \x20 <text x=\"10\" y=\"100\" dx=\"0\" dy=\"0\" font-size=\"12\">Hello</text>\n\
             </svg>"
        );
    }

    #[test]
    fn objects_render_in_insertion_order() {
        let mut doc = Document::new();
        doc.add(Text::new().data("A"));
        doc.add(Polyline::new().add_point(Point::new(1.0, 2.0)));
        doc.add(Circle::new());
        doc.add(Text::new().data("A")); // Duplicates are kept

        let svg = doc.svg_string();
        let body = svg.lines().skip(2).collect::<Vec<_>>();
        assert_eq!(
            body,
            [
                "  <text x=\"0\" y=\"0\" dx=\"0\" dy=\"0\" font-size=\"1\">A</text>",
                "  <polyline points=\"1,2\" />",
                "  <circle cx=\"0\" cy=\"0\" r=\"0\" />",
                "  <text x=\"0\" y=\"0\" dx=\"0\" dy=\"0\" font-size=\"1\">A</text>",
                "</svg>",
            ]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let mut doc = Document::new();
        doc.add(Polyline::new().add_point(Point::new(0.0, 0.0)));
        doc.add(Text::new().data("<&>"));

        let mut first = Vec::new();
        let mut second = Vec::new();
        doc.render(&mut first).unwrap();
        doc.render(&mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first).unwrap(), doc.svg_string());
    }

    #[test]
    fn custom_indentation() {
        let mut doc = Document::new();
        doc.add(Circle::new());
        let opts = RenderingOpts {
            indent_depth: 4,
            indent_step: 1,
        };

        let mut buf = Vec::new();
        doc.render_with(&mut buf, &opts).unwrap();
        let svg = String::from_utf8(buf).unwrap();
        assert!(svg.contains("\n    <circle cx=\"0\" cy=\"0\" r=\"0\" />\n</svg>"));
    }

    #[test]
    fn no_trailing_newline() {
        let mut doc = Document::new();
        doc.add(Circle::new());
        assert!(doc.svg_string().ends_with("\n</svg>"));
    }

    /// A sink which accepts `limit` bytes, then fails every write
    struct FailingSink {
        limit: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.limit == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            let n = buf.len().min(self.limit);
            self.limit -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let mut doc = Document::new();
        doc.add(Text::new().data("more than a hundred bytes in total, once the header is in"));

        for limit in [0, 10, 100] {
            let err = doc.render(&mut FailingSink { limit }).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        }
    }
}
