use std::{
    borrow::Cow,
    io::{self, Write},
};

use crate::Point;

/// An SVG `<text>` element.  `data` is stored raw and escaped only when the element is rendered.
#[derive(Debug, Clone)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    /// Empty means 'unset', in which case no `font-family` attribute is written
    font_family: String,
    /// Empty means 'unset', in which case no `font-weight` attribute is written
    font_weight: String,
    data: String,
}

impl Text {
    pub fn new() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            offset: Point::new(0.0, 0.0),
            font_size: 1,
            font_family: String::new(),
            font_weight: String::new(),
            data: String::new(),
        }
    }

    /// Sets the anchor point of the text (the `x` and `y` attributes)
    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the offset from the anchor point (the `dx` and `dy` attributes)
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = font_weight.into();
        self
    }

    /// Sets the text content.  Markup characters don't need to be escaped by the caller
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub(super) fn render_object(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if !self.font_family.is_empty() {
            write!(out, " font-family=\"{}\"", self.font_family)?;
        }
        if !self.font_weight.is_empty() {
            write!(out, " font-weight=\"{}\"", self.font_weight)?;
        }
        out.write_all(b">")?;
        write_escaped(out, &self.data)?;
        out.write_all(b"</text>")
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

/* ESCAPING */

/// The entity which replaces `c` in escaped text, or `None` if `c` can be written as-is
fn entity(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        _ => None,
    }
}

/// Escapes the five XML markup characters (`"`, `'`, `<`, `>` and `&`) in `s`.  Every other
/// character (including any non-ASCII) is left untouched.  If `s` contains no markup characters,
/// it's returned without copying.
pub fn escape(s: &str) -> Cow<str> {
    if !s.chars().any(|c| entity(c).is_some()) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c) {
            Some(e) => escaped.push_str(e),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Writes `s` to `out`, escaped in the same way as [`escape`] but without building an
/// intermediate `String`.  Runs of characters which don't need escaping are written in one go.
pub fn write_escaped(out: &mut dyn Write, s: &str) -> io::Result<()> {
    let mut run_start = 0;
    for (i, c) in s.char_indices() {
        if let Some(e) = entity(c) {
            out.write_all(s[run_start..i].as_bytes())?;
            out.write_all(e.as_bytes())?;
            // All the markup characters are ASCII, so are exactly one byte long
            run_start = i + 1;
        }
    }
    out.write_all(s[run_start..].as_bytes())
}
