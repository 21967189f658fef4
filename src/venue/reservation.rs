use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{AtelierError, AtelierResult},
    venue::layout::{SeatId, SeatLayout},
};

/// Seat identifiers booked for one event.
///
/// Identifiers are free-form: anything that does not name a seat of the hall is kept but never
/// matches, so it cannot affect a chart.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReservationSet {
    seats: BTreeSet<String>,
}

impl ReservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return false;
        }
        self.seats.insert(id.to_string())
    }

    pub fn contains(&self, id: &SeatId) -> bool {
        self.seats.contains(&id.to_string())
    }

    pub fn contains_str(&self, id: &str) -> bool {
        self.seats.contains(id.trim())
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.seats.iter().map(String::as_str)
    }

    /// Identifiers that name no seat of `layout`, sorted.
    pub fn unmatched(&self, layout: &SeatLayout) -> Vec<&str> {
        self.iter()
            .filter(|id| {
                id.parse::<SeatId>()
                    .map(|seat| !layout.contains(&seat))
                    .unwrap_or(true)
            })
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReservationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// One ticketed event, as kept in a `*.txt` record next to the ticket page.
///
/// ```text
/// # comment lines start with '#'
/// Les Belles-sœurs          <- what
/// Salle Jean-Louis-Millette <- where
/// 12 avril, 20 h            <- when
/// A1
/// A24
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EventRecord {
    /// File stem of the record; names the chart file.
    pub slug: String,
    pub what: String,
    #[serde(rename = "where")]
    pub venue: String,
    pub when: String,
    pub reserved: ReservationSet,
}

impl EventRecord {
    /// Parse a record body. `slug` is empty; see [`EventRecord::from_file`].
    pub fn parse(text: &str) -> AtelierResult<Self> {
        let mut lines = text.lines().filter(|l| !l.starts_with('#'));

        let mut header = |name: &str| {
            lines
                .next()
                .map(|l| l.trim_end().to_string())
                .ok_or_else(|| {
                    AtelierError::record(format!("missing '{name}' line (need 3 header lines)"))
                })
        };
        let what = header("what")?;
        let venue = header("where")?;
        let when = header("when")?;

        let reserved = lines.map(str::trim).filter(|l| !l.is_empty()).collect();

        Ok(Self {
            slug: String::new(),
            what,
            venue,
            when,
            reserved,
        })
    }

    pub fn from_file(path: &Path) -> AtelierResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read event record '{}'", path.display()))?;
        let mut record = Self::parse(&text).map_err(|e| match e {
            AtelierError::Record(msg) => {
                AtelierError::record(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        record.slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| AtelierError::record(format!("no file name in '{}'", path.display())))?;
        Ok(record)
    }
}

/// Event records (`*.txt`) in `dir`, sorted by file name.
pub fn find_event_records(dir: &Path) -> AtelierResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("list records in '{}'", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("list records in '{}'", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/venue/reservation.rs"]
mod tests;
