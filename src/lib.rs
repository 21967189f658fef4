//! Atelier builds the static website of a small theater company and draws the seating chart of
//! its hall for every ticketed event.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: [`SeatLayout::venue`] expands the hall's row rules into a grid of cells.
//! 2. **Render**: [`render_chart`] turns `SeatLayout + ReservationSet` into a [`Diagram`]
//!    (a typed tree of rects, texts and seat groups).
//! 3. **Serialize**: [`to_svg`] writes the diagram as one SVG document; [`write_png`] can
//!    rasterize it for a preview.
//! 4. **Site**: [`build_site`] renders every page's Markdown, publishes page images and
//!    appends one chart per event record to the ticket page.
//!
//! Charts are pure functions of their reservations: the same set always produces byte-identical
//! SVG, and identifiers that name no seat are ignored.
#![forbid(unsafe_code)]

mod chart;
mod foundation;
mod site;
mod venue;

pub use chart::raster::{rasterize, write_png};
pub use chart::render::{
    BAND_FILL, CELL_SIZE, PREMIUM_FILL, RESERVED_FILL, SeatStatus, cell_center, chart_canvas,
    render_chart, render_venue_svg,
};
pub use chart::scene::{Diagram, DiagramBuilder, GroupNode, Node, RectNode, SeatGlyph, TextNode};
pub use chart::svg::to_svg;
pub use foundation::core::{Affine, Canvas, Paint, Point, Rect, Transform2D, Vec2};
pub use foundation::error::{AtelierError, AtelierResult};
pub use site::assets::{PageImage, copy_page_images, find_page_images, rewrite_image_refs};
pub use site::build::{BuildReport, PAGE_SOURCE, build_site};
pub use site::config::{PageConfig, SiteConfig};
pub use site::layouts::{PageContext, render_page, seating_fragment};
pub use site::markdown::render_markdown;
pub use venue::layout::{
    Cell, PREMIUM_THRESHOLD, Piece, PlacedSeat, ROW_LABELS, RowRule, SeatId, SeatLayout,
    VENUE_RULES, canonical_pattern,
};
pub use venue::reservation::{EventRecord, ReservationSet, find_event_records};
