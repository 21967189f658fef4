//! Typed drawable tree for charts.
//!
//! A [`Diagram`] is built once with [`DiagramBuilder`] and never mutated afterwards. It is
//! serialized to SVG in one pass by [`crate::to_svg`], so renderers and tests work on nodes
//! instead of markup.

use crate::{
    foundation::core::{Canvas, Paint, Point, Rect, Transform2D},
    venue::layout::SeatId,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectNode {
    pub rect: Rect,
    pub fill: Paint,
    pub stroke: Paint,
}

impl RectNode {
    /// Outlined, unfilled rectangle.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: Paint::None,
            stroke: Paint::color("black"),
        }
    }

    pub fn fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn stroke(mut self, stroke: Paint) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Text centred on `pos`, both horizontally and vertically.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextNode {
    pub pos: Point,
    pub font_size: f64,
    pub content: String,
    pub fill: Paint,
    /// Extra downward shift, in em.
    pub dy_em: Option<f64>,
}

impl TextNode {
    pub fn new(pos: Point, font_size: f64, content: impl Into<String>) -> Self {
        Self {
            pos,
            font_size,
            content: content.into(),
            fill: Paint::color("black"),
            dy_em: None,
        }
    }

    pub fn fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn dy_em(mut self, dy: f64) -> Self {
        self.dy_em = Some(dy);
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GroupNode {
    pub transform: Transform2D,
    /// Set when the group is the glyph of a seat. Not written to the SVG.
    pub seat: Option<SeatId>,
    pub children: Vec<Node>,
}

impl GroupNode {
    pub fn new(transform: Transform2D) -> Self {
        Self {
            transform,
            seat: None,
            children: Vec::new(),
        }
    }

    pub fn seat(mut self, id: SeatId) -> Self {
        self.seat = Some(id);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Node {
    Rect(RectNode),
    Text(TextNode),
    Group(GroupNode),
}

impl From<RectNode> for Node {
    fn from(n: RectNode) -> Self {
        Self::Rect(n)
    }
}

impl From<TextNode> for Node {
    fn from(n: TextNode) -> Self {
        Self::Text(n)
    }
}

impl From<GroupNode> for Node {
    fn from(n: GroupNode) -> Self {
        Self::Group(n)
    }
}

impl Node {
    /// Bounding box in the parent's coordinate space. Text counts as its anchor point.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => r.rect,
            Self::Text(t) => Rect::from_points(t.pos, t.pos),
            Self::Group(g) => {
                let inner = union_bounds(&g.children);
                g.transform.to_affine().transform_rect_bbox(inner)
            }
        }
    }
}

/// Seat glyph as found in a built diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatGlyph<'a> {
    pub id: SeatId,
    pub center: Point,
    pub fill: &'a Paint,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagram {
    canvas: Canvas,
    font_family: String,
    nodes: Vec<Node>,
}

impl Diagram {
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Seat glyphs in drawing order, with the fill of their background square.
    pub fn seat_glyphs(&self) -> impl Iterator<Item = SeatGlyph<'_>> {
        self.nodes.iter().filter_map(|node| {
            let Node::Group(g) = node else {
                return None;
            };
            let id = g.seat?;
            let fill = g.children.iter().find_map(|c| match c {
                Node::Rect(r) => Some(&r.fill),
                _ => None,
            })?;
            Some(SeatGlyph {
                id,
                center: g.transform.to_affine() * Point::ORIGIN,
                fill,
            })
        })
    }

    /// Top-level text nodes (band titles and row letters).
    pub fn labels(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Bounding box of all geometry, in canvas space.
    pub fn bounds(&self) -> Rect {
        union_bounds(&self.nodes)
    }
}

fn union_bounds(nodes: &[Node]) -> Rect {
    nodes
        .iter()
        .map(Node::bounds)
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
}

pub struct DiagramBuilder {
    canvas: Canvas,
    font_family: String,
    nodes: Vec<Node>,
}

impl DiagramBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            font_family: "sans-serif".to_string(),
            nodes: Vec::new(),
        }
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn rect(self, rect: RectNode) -> Self {
        self.node(rect)
    }

    pub fn text(self, text: TextNode) -> Self {
        self.node(text)
    }

    pub fn group(self, group: GroupNode) -> Self {
        self.node(group)
    }

    pub fn build(self) -> Diagram {
        Diagram {
            canvas: self.canvas,
            font_family: self.font_family,
            nodes: self.nodes,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scene.rs"]
mod tests;
