//! Maud HTML layouts for site pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{site::config::PageConfig, venue::reservation::EventRecord};

/// Context passed to [`render_page`].
pub struct PageContext<'a> {
    pub lang: &'a str,
    pub organization: &'a str,
    pub copyright: &'a str,
    /// Title of the page being rendered (from its navigation entry).
    pub page_title: &'a str,
    /// Every page, in navigation order.
    pub nav: &'a [PageConfig],
    /// Rendered HTML body.
    pub content: &'a str,
}

/// Wrap rendered page content with the shared header, navigation and footer.
pub fn render_page(ctx: &PageContext) -> String {
    page_layout(ctx).into_string()
}

fn page_layout(ctx: &PageContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.lang) {
            head {
                meta charset="utf-8";
                link rel="stylesheet" href="static/style.css";
                title { (ctx.organization) " - " (ctx.page_title) }
            }
            body {
                header {
                    img src="static/logo.png" alt=(ctx.organization);
                    nav {
                        ul {
                            @for page in ctx.nav {
                                li { a href=(format!("{}.html", page.name)) { (page.title) } }
                            }
                        }
                    }
                }
                main {
                    (PreEscaped(ctx.content))
                }
                footer {
                    p { (ctx.copyright) }
                }
            }
        }
    }
}

/// Ticket box for one event: what/where/when over the seating chart.
pub fn seating_fragment(record: &EventRecord, chart_src: &str) -> String {
    html! {
        table class="seating" {
            tr {
                th { (record.what) }
                th { (record.venue) }
                th { (record.when) }
            }
            tr {
                td colspan="3" {
                    img src=(chart_src) alt=(format!("Plan de salle - {}", record.what));
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
#[path = "../../tests/unit/site/layouts.rs"]
mod tests;
