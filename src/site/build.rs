//! Whole-site assembly: pages, images, static files and one seating chart per event.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    chart::{render::render_chart, svg::to_svg},
    foundation::error::{AtelierError, AtelierResult},
    site::{
        assets::{STATIC_DIR, copy_page_images, find_page_images, rewrite_image_refs},
        config::SiteConfig,
        layouts::{PageContext, render_page, seating_fragment},
        markdown::render_markdown,
    },
    venue::{
        layout::SeatLayout,
        reservation::{EventRecord, find_event_records},
    },
};

/// Source file of every page, inside the page's source dir.
pub const PAGE_SOURCE: &str = "page.md";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub charts: usize,
    pub images: usize,
}

/// Build the static site from `source` into `output`.
///
/// `output` is wiped first, so it may not be (or contain) the source directory.
#[tracing::instrument(skip_all, fields(source = %source.display(), output = %output.display()))]
pub fn build_site(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
) -> AtelierResult<BuildReport> {
    config.validate()?;
    check_output_dir(source, output)?;

    if output.exists() {
        std::fs::remove_dir_all(output)
            .with_context(|| format!("remove output dir '{}'", output.display()))?;
    }
    let static_dir = output.join(STATIC_DIR);
    std::fs::create_dir_all(&static_dir)
        .with_context(|| format!("create output dir '{}'", static_dir.display()))?;

    for name in &config.static_files {
        let from = source.join(name);
        let to = static_dir.join(name);
        std::fs::copy(&from, &to)
            .with_context(|| format!("copy '{}' to '{}'", from.display(), to.display()))?;
        tracing::debug!(file = %name, "copied static file");
    }

    let mut report = BuildReport::default();
    let mut bodies = Vec::with_capacity(config.pages.len());
    for page in &config.pages {
        let dir = source.join(page.dir());
        let md_path = dir.join(PAGE_SOURCE);
        let md = std::fs::read_to_string(&md_path)
            .with_context(|| format!("read page '{}'", md_path.display()))?;

        let images = find_page_images(source, &dir)?;
        let html = rewrite_image_refs(&render_markdown(&md), &images);
        copy_page_images(&images, output)?;
        report.images += images.len();
        bodies.push(html);
    }

    let ticket_idx = config
        .pages
        .iter()
        .position(|p| p.name == config.ticket_page)
        .ok_or_else(|| {
            AtelierError::config(format!(
                "ticket page '{}' is not one of the pages",
                config.ticket_page
            ))
        })?;
    let ticket_dir = source.join(config.pages[ticket_idx].dir());
    for (record, svg) in render_event_charts(&ticket_dir)? {
        let chart_src = format!("{STATIC_DIR}/{}.svg", record.slug);
        let chart_path = output.join(&chart_src);
        std::fs::write(&chart_path, svg)
            .with_context(|| format!("write chart '{}'", chart_path.display()))?;
        tracing::info!(path = %chart_path.display(), reserved = record.reserved.len(), "wrote chart");

        bodies[ticket_idx].push_str(&seating_fragment(&record, &chart_src));
        report.charts += 1;
    }

    for (page, body) in config.pages.iter().zip(&bodies) {
        let html = render_page(&PageContext {
            lang: &config.lang,
            organization: &config.organization,
            copyright: &config.copyright,
            page_title: &page.title,
            nav: &config.pages,
            content: body,
        });
        let path = output.join(format!("{}.html", page.name));
        std::fs::write(&path, html).with_context(|| format!("write page '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote page");
        report.pages += 1;
    }

    Ok(report)
}

/// Parse every event record in `dir` and render its chart; results keep file-name order.
fn render_event_charts(dir: &Path) -> AtelierResult<Vec<(EventRecord, String)>> {
    let layout = SeatLayout::venue()?;
    let records = find_event_records(dir)?
        .iter()
        .map(|path| EventRecord::from_file(path))
        .collect::<AtelierResult<Vec<_>>>()?;

    for record in &records {
        let unmatched = record.reserved.unmatched(&layout);
        if !unmatched.is_empty() {
            tracing::warn!(event = %record.slug, ids = ?unmatched, "reserved ids match no seat");
        }
    }

    let svgs: Vec<String> = records
        .par_iter()
        .map(|record| to_svg(&render_chart(&layout, &record.reserved)))
        .collect();
    Ok(records.into_iter().zip(svgs).collect())
}

fn check_output_dir(source: &Path, output: &Path) -> AtelierResult<()> {
    let source = absolute(source)?;
    let output = absolute(output)?;
    if source.starts_with(&output) {
        return Err(AtelierError::config(format!(
            "output dir '{}' would overwrite source dir '{}'",
            output.display(),
            source.display()
        )));
    }
    Ok(())
}

fn absolute(path: &Path) -> AtelierResult<PathBuf> {
    // canonicalize needs the path to exist; the output dir may not yet
    let abs = match path.canonicalize() {
        Ok(p) => p,
        Err(_) => std::path::absolute(path)
            .with_context(|| format!("resolve path '{}'", path.display()))?,
    };
    Ok(abs)
}

#[cfg(test)]
#[path = "../../tests/unit/site/build.rs"]
mod tests;
