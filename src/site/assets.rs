use std::path::{Path, PathBuf};

use anyhow::Context as _;
use sha2::Digest as _;

use crate::foundation::error::AtelierResult;

pub const STATIC_DIR: &str = "static";

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// An image next to a page's `page.md`, and where it is published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageImage {
    pub source: PathBuf,
    /// Name as referenced from the page (`src="affiche.jpg"`).
    pub file_name: String,
    /// Output-relative path, `static/<hash><ext>`.
    pub published: String,
}

/// Images in `dir` (`.jpg`, `.jpeg`, `.png`, any case), sorted by file name.
///
/// Published names hash the path relative to `site_root`, so they do not depend on where the
/// site is checked out.
pub fn find_page_images(site_root: &Path, dir: &Path) -> AtelierResult<Vec<PageImage>> {
    let mut out = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("list images in '{}'", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("list images in '{}'", dir.display()))?
            .path();
        let Some(ext) = image_extension(&path) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let rel = path.strip_prefix(site_root).unwrap_or(&path);
        let hash = sha256_hex(rel.to_string_lossy().as_bytes());
        let published = format!("{STATIC_DIR}/{hash}.{ext}");
        out.push(PageImage {
            source: path,
            file_name,
            published,
        });
    }
    out.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(out)
}

/// Point `src="<file name>"` attributes at the published copies.
pub fn rewrite_image_refs(html: &str, images: &[PageImage]) -> String {
    let mut html = html.to_string();
    for img in images {
        let from = format!("src=\"{}\"", img.file_name);
        let to = format!("src=\"{}\"", img.published);
        html = html.replace(&from, &to);
    }
    html
}

pub fn copy_page_images(images: &[PageImage], out_root: &Path) -> AtelierResult<()> {
    for img in images {
        let dst = out_root.join(&img.published);
        std::fs::copy(&img.source, &dst).with_context(|| {
            format!("copy '{}' to '{}'", img.source.display(), dst.display())
        })?;
        tracing::debug!(from = %img.source.display(), to = %img.published, "copied image");
    }
    Ok(())
}

fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/site/assets.rs"]
mod tests;
