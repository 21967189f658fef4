use crate::{
    chart::{
        scene::{Diagram, DiagramBuilder, GroupNode, RectNode, TextNode},
        svg::to_svg,
    },
    foundation::{
        core::{Canvas, Paint, Point, Rect, Transform2D},
        error::AtelierResult,
    },
    venue::{
        layout::{Cell, SeatId, SeatLayout},
        reservation::ReservationSet,
    },
};

/// Side of one grid cell.
pub const CELL_SIZE: f64 = 40.0;
/// Height of the stage and booth bands, in cells.
pub const BAND_CELLS: f64 = 2.0;
/// Seat glyphs are drawn at this scale around their cell centre.
pub const SEAT_SCALE: f64 = 1.6;
/// Side of a seat square before scaling.
pub const SEAT_BOX: f64 = 20.0;

pub const BAND_FILL: &str = "#8bc34a";
pub const RESERVED_FILL: &str = "#ffcccb";
pub const PREMIUM_FILL: &str = "yellow";

pub const STAGE_TITLE: &str = "Scène";
pub const BOOTH_TITLE: &str = "Régie";

const BAND_FONT_SIZE: f64 = 24.0;
const ROW_FONT_SIZE: f64 = 20.0;
const SEAT_FONT_SIZE: f64 = 9.0;

/// How a seat is shown. Derived at render time, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SeatStatus {
    Available,
    Premium,
    Reserved,
}

impl SeatStatus {
    /// Reserved wins over premium.
    pub fn resolve(id: SeatId, reserved: &ReservationSet) -> Self {
        if reserved.contains(&id) {
            Self::Reserved
        } else if id.is_premium() {
            Self::Premium
        } else {
            Self::Available
        }
    }

    pub fn fill(self) -> Paint {
        match self {
            Self::Available => Paint::None,
            Self::Premium => Paint::color(PREMIUM_FILL),
            Self::Reserved => Paint::color(RESERVED_FILL),
        }
    }
}

/// Canvas for `layout`: one spare cell left and right, bands plus a spare cell top and bottom.
pub fn chart_canvas(layout: &SeatLayout) -> Canvas {
    Canvas {
        width: (CELL_SIZE * (layout.width() as f64 + 2.0)) as u32,
        height: (CELL_SIZE * (layout.row_count() as f64 + 2.0 * BAND_CELLS + 2.0)) as u32,
    }
}

/// Centre of grid cell (`row`, `col`) on the canvas.
pub fn cell_center(row: usize, col: usize) -> Point {
    Point::new(
        CELL_SIZE * (col as f64 + 1.5),
        CELL_SIZE * (row as f64 + BAND_CELLS + 1.5),
    )
}

#[tracing::instrument(skip_all, fields(rows = layout.row_count(), reserved = reserved.len()))]
pub fn render_chart(layout: &SeatLayout, reserved: &ReservationSet) -> Diagram {
    let canvas = chart_canvas(layout);
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let band = CELL_SIZE * BAND_CELLS;

    let mut diagram = DiagramBuilder::new(canvas);
    diagram = band_nodes(diagram, Rect::new(0.0, 0.0, w, band), STAGE_TITLE);
    diagram = band_nodes(diagram, Rect::new(0.0, h - band, w, h), BOOTH_TITLE);

    for (r, (label, cells)) in layout.row_labels().iter().zip(layout.rows()).enumerate() {
        for (c, cell) in cells.iter().enumerate() {
            let pos = cell_center(r, c);
            match *cell {
                Cell::Empty => {}
                Cell::RowLabel => {
                    diagram = diagram.text(TextNode::new(pos, ROW_FONT_SIZE, label.to_string()));
                }
                Cell::Seat(n) => {
                    let id = SeatId::new(*label, n);
                    let status = SeatStatus::resolve(id, reserved);
                    diagram = diagram.group(seat_glyph(id, pos, status));
                }
            }
        }
    }

    let diagram = diagram.build();
    tracing::debug!(nodes = diagram.nodes().len(), "chart rendered");
    diagram
}

/// Render the hall's chart for `reserved` straight to SVG text.
pub fn render_venue_svg(reserved: &ReservationSet) -> AtelierResult<String> {
    let layout = SeatLayout::venue()?;
    Ok(to_svg(&render_chart(&layout, reserved)))
}

fn band_nodes(diagram: DiagramBuilder, area: Rect, title: &str) -> DiagramBuilder {
    let center = area.center();
    diagram
        .rect(
            RectNode::new(area)
                .fill(Paint::color(BAND_FILL))
                .stroke(Paint::None),
        )
        .text(
            TextNode::new(Point::new(center.x, center.y + 5.0), BAND_FONT_SIZE, title)
                .fill(Paint::color("white")),
        )
}

fn seat_glyph(id: SeatId, pos: Point, status: SeatStatus) -> GroupNode {
    let half = SEAT_BOX / 2.0;
    GroupNode::new(Transform2D::translate(pos.x, pos.y).with_scale(SEAT_SCALE))
        .seat(id)
        .child(RectNode::new(Rect::new(-half, -half, half, half)).fill(status.fill()))
        .child(TextNode::new(Point::ORIGIN, SEAT_FONT_SIZE, id.number.to_string()).dy_em(0.1))
}

#[cfg(test)]
#[path = "../../tests/unit/chart/render.rs"]
mod tests;
