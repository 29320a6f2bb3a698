use std::io::{self, Write};

use svgdoc::{Circle, Document, Point, Polyline, Text};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut doc = Document::new();
    doc.add(Circle::new().center(Point::new(20.0, 20.0)).radius(10.0));
    doc.add(
        Polyline::new()
            .add_point(Point::new(0.0, 0.0))
            .add_point(Point::new(10.0, 10.0))
            .add_point(Point::new(20.0, 0.0)),
    );
    doc.add(
        Text::new()
            .position(Point::new(10.0, 100.0))
            .font_size(12)
            .font_family("Verdana")
            .data(r#"He said "hi" & <bye>"#),
    );

    // Write the document to stdout
    let stdout = io::stdout();
    let mut out = stdout.lock();
    doc.render(&mut out)?;
    writeln!(out)
}
