//! SVG serialization of a composed [`Document`].

use std::fmt::Write;

use crate::document::{Document, GeometryElement, Line};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `doc` as a standalone SVG document.
///
/// Elements are written in document order.
pub fn to_svg(doc: &Document) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = doc.width,
        h = doc.height,
    );

    for element in &doc.elements {
        match element {
            GeometryElement::Line(line) => write_line(&mut out, line),
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_line(out: &mut String, line: &Line) {
    let _ = writeln!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        escape_attr(&line.stroke_color),
        line.stroke_width,
    );
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
