//! Fixed seating plan of the hall.
//!
//! The plan is one canonical row pattern (two blocks of seats, each block split by an aisle
//! that carries the row letter) trimmed per row by declarative [`RowRule`]s. Odd seat numbers
//! run on the left and descend towards the aisle-side centre, even numbers run on the right and
//! ascend, so seats 1 and 2 always sit next to each other in the middle of the hall.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::foundation::error::{AtelierError, AtelierResult};

/// Seats numbered above this are premium.
pub const PREMIUM_THRESHOLD: u32 = 20;

/// Seats on each half of a full row.
pub const SEATS_PER_SIDE: u32 = 12;

/// Row letters front to back (no `I` row).
pub const ROW_LABELS: [char; 16] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
];

/// One grid position of the plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    /// Aisle or unused floor.
    Empty,
    /// Aisle position where the row letter is painted.
    RowLabel,
    /// A seat, numbered uniquely within its row.
    Seat(u32),
}

impl Cell {
    pub fn seat_number(self) -> Option<u32> {
        match self {
            Self::Seat(n) => Some(n),
            Self::Empty | Self::RowLabel => None,
        }
    }
}

/// Row letter + seat number, written without separator (`"B14"`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SeatId {
    pub row: char,
    pub number: u32,
}

impl SeatId {
    pub fn new(row: char, number: u32) -> Self {
        Self { row, number }
    }

    pub fn is_premium(self) -> bool {
        self.number > PREMIUM_THRESHOLD
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = AtelierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row = chars
            .next()
            .filter(|c| c.is_ascii_uppercase())
            .ok_or_else(|| AtelierError::record(format!("seat '{s}' must start with a row letter")))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AtelierError::record(format!(
                "seat '{s}' must end with a seat number"
            )));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| AtelierError::record(format!("seat number out of range in '{s}'")))?;
        if number == 0 {
            return Err(AtelierError::record(format!("seat '{s}' has number 0")));
        }
        Ok(Self { row, number })
    }
}

/// Piece of a row, taken from the canonical pattern or padded with empty floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    /// `n` empty cells.
    Pad(usize),
    /// Pattern cells `start..end`; negative bounds count from the end of the pattern.
    Slice { start: isize, end: isize },
}

/// How to cut `repeat` consecutive rows out of the canonical pattern.
#[derive(Clone, Copy, Debug)]
pub struct RowRule {
    pub repeat: usize,
    pub pieces: &'static [Piece],
}

/// Row shapes of the hall, front to back.
pub const VENUE_RULES: &[RowRule] = &[
    // A-B: full width
    RowRule {
        repeat: 2,
        pieces: &[Piece::Slice { start: 0, end: 30 }],
    },
    // C-K: outermost seat pair removed on each side
    RowRule {
        repeat: 8,
        pieces: &[
            Piece::Pad(2),
            Piece::Slice { start: 2, end: -2 },
            Piece::Pad(2),
        ],
    },
    // L: short on the right
    RowRule {
        repeat: 1,
        pieces: &[
            Piece::Pad(2),
            Piece::Slice { start: 2, end: -4 },
            Piece::Pad(4),
        ],
    },
    // M-P: centre section only
    RowRule {
        repeat: 4,
        pieces: &[
            Piece::Pad(6),
            Piece::Slice { start: 6, end: -6 },
            Piece::Pad(6),
        ],
    },
    // Q: centre section split around the control booth
    RowRule {
        repeat: 1,
        pieces: &[
            Piece::Pad(6),
            Piece::Slice { start: 6, end: 13 },
            Piece::Pad(4),
            Piece::Slice { start: -13, end: -6 },
            Piece::Pad(6),
        ],
    },
];

/// The full-width row every [`RowRule`] cuts from.
pub fn canonical_pattern() -> Vec<Cell> {
    let left: Vec<Cell> = (0..SEATS_PER_SIDE)
        .rev()
        .map(|i| Cell::Seat(i * 2 + 1))
        .collect();
    let right: Vec<Cell> = (0..SEATS_PER_SIDE)
        .map(|i| Cell::Seat(i * 2 + 2))
        .collect();
    let aisle = [Cell::Empty, Cell::RowLabel, Cell::Empty];
    let half = (SEATS_PER_SIDE / 2) as usize;

    let mut cells = Vec::with_capacity(left.len() + right.len() + 2 * aisle.len());
    cells.extend_from_slice(&left[..half]);
    cells.extend_from_slice(&aisle);
    cells.extend_from_slice(&left[half..]);
    cells.extend_from_slice(&right[..half]);
    cells.extend_from_slice(&aisle);
    cells.extend_from_slice(&right[half..]);
    cells
}

/// Seat at a grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedSeat {
    pub id: SeatId,
    pub row: usize,
    pub col: usize,
}

/// Validated grid of cells, one row per row letter. Every row has the same width.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SeatLayout {
    labels: Vec<char>,
    rows: Vec<Vec<Cell>>,
}

impl SeatLayout {
    /// The hall's seating plan.
    pub fn venue() -> AtelierResult<Self> {
        Self::from_rules(&canonical_pattern(), &ROW_LABELS, VENUE_RULES)
    }

    pub fn from_rules(pattern: &[Cell], labels: &[char], rules: &[RowRule]) -> AtelierResult<Self> {
        let mut rows = Vec::with_capacity(labels.len());
        for rule in rules {
            let row = apply_pieces(pattern, rule.pieces)?;
            for _ in 0..rule.repeat {
                rows.push(row.clone());
            }
        }
        Self::from_rows(labels.to_vec(), rows)
    }

    pub fn from_rows(labels: Vec<char>, rows: Vec<Vec<Cell>>) -> AtelierResult<Self> {
        if rows.is_empty() {
            return Err(AtelierError::layout("layout must have at least one row"));
        }
        if labels.len() != rows.len() {
            return Err(AtelierError::layout(format!(
                "{} row labels for {} rows",
                labels.len(),
                rows.len()
            )));
        }

        let width = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(AtelierError::layout(format!(
                "row '{}' has {} cells, expected {width}",
                labels[i],
                row.len()
            )));
        }

        let mut seen_labels = BTreeSet::new();
        for &label in &labels {
            if !seen_labels.insert(label) {
                return Err(AtelierError::layout(format!("duplicate row label '{label}'")));
            }
        }

        for (label, row) in labels.iter().zip(&rows) {
            let mut numbers = BTreeSet::new();
            for n in row.iter().filter_map(|c| c.seat_number()) {
                if n == 0 {
                    return Err(AtelierError::layout(format!("row '{label}' has seat number 0")));
                }
                if !numbers.insert(n) {
                    return Err(AtelierError::layout(format!(
                        "seat {label}{n} appears twice"
                    )));
                }
            }
        }

        Ok(Self { labels, rows })
    }

    pub fn row_labels(&self) -> &[char] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Every seat, row by row, left to right.
    pub fn seats(&self) -> impl Iterator<Item = PlacedSeat> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, cells)| {
            let label = self.labels[r];
            cells.iter().enumerate().filter_map(move |(c, cell)| {
                cell.seat_number().map(|n| PlacedSeat {
                    id: SeatId::new(label, n),
                    row: r,
                    col: c,
                })
            })
        })
    }

    pub fn seat_count(&self) -> usize {
        self.seats().count()
    }

    pub fn contains(&self, id: &SeatId) -> bool {
        self.labels
            .iter()
            .position(|&l| l == id.row)
            .is_some_and(|r| self.rows[r].contains(&Cell::Seat(id.number)))
    }
}

/// One line per row: `A: 23 21 . | . 11 ...` (`.` empty, `|` row label).
impl fmt::Display for SeatLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, row) in self.labels.iter().zip(&self.rows) {
            write!(f, "{label}:")?;
            for cell in row {
                match cell {
                    Cell::Empty => f.write_str(" .")?,
                    Cell::RowLabel => f.write_str(" |")?,
                    Cell::Seat(n) => write!(f, " {n}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn apply_pieces(pattern: &[Cell], pieces: &[Piece]) -> AtelierResult<Vec<Cell>> {
    let len = pattern.len() as isize;
    let resolve = |i: isize| if i < 0 { len + i } else { i };

    let mut row = Vec::with_capacity(pattern.len());
    for piece in pieces {
        match *piece {
            Piece::Pad(n) => row.extend(std::iter::repeat_n(Cell::Empty, n)),
            Piece::Slice { start, end } => {
                let (s, e) = (resolve(start), resolve(end));
                if s < 0 || e > len || s > e {
                    return Err(AtelierError::layout(format!(
                        "slice {start}..{end} is outside a {len}-cell pattern"
                    )));
                }
                row.extend_from_slice(&pattern[s as usize..e as usize]);
            }
        }
    }
    Ok(row)
}

#[cfg(test)]
#[path = "../../tests/unit/venue/layout.rs"]
mod tests;
