use std::fmt::{self, Write as _};

use crate::chart::scene::{Diagram, GroupNode, Node, RectNode, TextNode};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize a diagram as a standalone SVG document.
///
/// Output depends only on the diagram: same tree, same bytes.
pub fn to_svg(diagram: &Diagram) -> String {
    SvgDocument(diagram).to_string()
}

struct SvgDocument<'a>(&'a Diagram);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        let canvas = d.canvas();
        writeln!(
            f,
            r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
            canvas.width, canvas.height
        )?;
        for node in d.nodes() {
            write_node(f, node, d.font_family(), 0)?;
        }
        f.write_str("</svg>\n")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, font: &str, depth: usize) -> fmt::Result {
    match node {
        Node::Rect(r) => write_rect(f, r, depth),
        Node::Text(t) => write_text(f, t, font, depth),
        Node::Group(g) => write_group(f, g, font, depth),
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

fn write_rect(f: &mut fmt::Formatter<'_>, r: &RectNode, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(
        f,
        r#"<rect x="{}" y="{}" width="{}" height="{}" stroke="{}" fill="{}" />"#,
        Num(r.rect.x0),
        Num(r.rect.y0),
        Num(r.rect.width()),
        Num(r.rect.height()),
        Escaped(r.stroke.as_svg()),
        Escaped(r.fill.as_svg()),
    )
}

fn write_text(f: &mut fmt::Formatter<'_>, t: &TextNode, font: &str, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    write!(
        f,
        r#"<text x="{}" y="{}" dominant-baseline="middle" text-anchor="middle" font-family="{}" font-size="{}" fill="{}""#,
        Num(t.pos.x),
        Num(t.pos.y),
        Escaped(font),
        Num(t.font_size),
        Escaped(t.fill.as_svg()),
    )?;
    if let Some(dy) = t.dy_em {
        write!(f, r#" dy="{}em""#, Num(dy))?;
    }
    writeln!(f, ">{}</text>", Escaped(&t.content))
}

fn write_group(f: &mut fmt::Formatter<'_>, g: &GroupNode, font: &str, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    if g.transform.is_identity() {
        f.write_str("<g>\n")?;
    } else {
        let t = g.transform.translate;
        write!(f, r#"<g transform="translate({},{})"#, Num(t.x), Num(t.y))?;
        if g.transform.scale != 1.0 {
            write!(f, " scale({})", Num(g.transform.scale))?;
        }
        f.write_str("\">\n")?;
    }
    for child in &g.children {
        write_node(f, child, font, depth + 1)?;
    }
    indent(f, depth)?;
    f.write_str("</g>\n")
}

/// SVG number: integral values without a fraction, others with at most 4 decimals.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() {
            return f.write_str("0");
        }
        let rounded = (v * 10_000.0).round() / 10_000.0;
        if rounded.fract() == 0.0 {
            // `as i64` also folds -0 into 0
            return write!(f, "{}", rounded as i64);
        }
        let mut s = format!("{rounded:.4}");
        while s.ends_with('0') {
            s.pop();
        }
        f.write_str(&s)
    }
}

/// XML-escaped text, valid both as element content and inside a double-quoted attribute.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;
