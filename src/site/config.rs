//! Site configuration.
//!
//! [`SiteConfig::default`] is the theater's own site; a JSON file with the same shape can
//! replace it (`atelier build --config site.json`).

use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{AtelierError, AtelierResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub organization: String,
    pub copyright: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Navigation order.
    pub pages: Vec<PageConfig>,
    /// Page that lists ticketed events; its source dir holds the `*.txt` records.
    pub ticket_page: String,
    /// Files copied verbatim from the source root into `static/`.
    #[serde(default = "default_static_files")]
    pub static_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Output name, `<name>.html`.
    pub name: String,
    /// Navigation label and title suffix.
    pub title: String,
    /// Source directory under the site root; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,
}

impl PageConfig {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            source_dir: None,
        }
    }

    pub fn source_dir(mut self, dir: impl Into<String>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    pub fn dir(&self) -> &str {
        self.source_dir.as_deref().unwrap_or(&self.name)
    }
}

fn default_lang() -> String {
    "fr".to_string()
}

fn default_static_files() -> Vec<String> {
    vec!["logo.png".to_string(), "style.css".to_string()]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            organization: "l'Atelier théâtral de Longueuil".to_string(),
            copyright: "© Atelier théâtral de Longueuil".to_string(),
            lang: default_lang(),
            pages: vec![
                PageConfig::new("index", "Accueil").source_dir("acceuil"),
                PageConfig::new("programme", "Programme"),
                PageConfig::new("qui-sommes-nous", "Qui sommes-nous ?"),
                PageConfig::new("realisations", "Réalisations"),
                PageConfig::new("commanditaires", "Commanditaires"),
                PageConfig::new("contact", "Contact"),
                PageConfig::new("vente-de-billets", "Vente de billets"),
            ],
            ticket_page: "vente-de-billets".to_string(),
            static_files: default_static_files(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_file(path: &Path) -> AtelierResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read site config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| AtelierError::config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AtelierResult<()> {
        if self.pages.is_empty() {
            return Err(AtelierError::config("site must have at least one page"));
        }

        let mut names = BTreeSet::new();
        for page in &self.pages {
            let name = page.name.trim();
            if name.is_empty() {
                return Err(AtelierError::config("page name must be non-empty"));
            }
            if name.contains(['/', '\\']) || page.dir().contains("..") {
                return Err(AtelierError::config(format!(
                    "page '{name}' must not contain path separators or '..'"
                )));
            }
            if !names.insert(name) {
                return Err(AtelierError::config(format!("duplicate page '{name}'")));
            }
        }

        if !names.contains(self.ticket_page.as_str()) {
            return Err(AtelierError::config(format!(
                "ticket page '{}' is not one of the pages",
                self.ticket_page
            )));
        }
        Ok(())
    }

    pub fn page(&self, name: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
