use super::*;

fn venue() -> SeatLayout {
    SeatLayout::venue().unwrap()
}

#[test]
fn canonical_pattern_shape() {
    let p = canonical_pattern();
    assert_eq!(p.len(), 30);
    assert_eq!(p[0], Cell::Seat(23));
    assert_eq!(&p[6..9], &[Cell::Empty, Cell::RowLabel, Cell::Empty]);
    assert_eq!(p[14], Cell::Seat(1));
    assert_eq!(p[15], Cell::Seat(2));
    assert_eq!(&p[21..24], &[Cell::Empty, Cell::RowLabel, Cell::Empty]);
    assert_eq!(p[29], Cell::Seat(24));
}

#[test]
fn venue_has_sixteen_rows_of_equal_width() {
    let layout = venue();
    assert_eq!(layout.row_count(), 16);
    assert_eq!(layout.row_labels(), &ROW_LABELS);
    assert!(layout.rows().iter().all(|r| r.len() == layout.width()));
    assert_eq!(layout.width(), 30);
    assert!(!layout.row_labels().contains(&'I'));
}

#[test]
fn every_row_shows_its_letter_twice() {
    let layout = venue();
    for row in layout.rows() {
        assert_eq!(row.iter().filter(|c| **c == Cell::RowLabel).count(), 2);
    }
}

#[test]
fn seat_counts_per_row() {
    let layout = venue();
    let per_row: Vec<usize> = layout
        .rows()
        .iter()
        .map(|r| r.iter().filter(|c| c.seat_number().is_some()).count())
        .collect();
    assert_eq!(
        per_row,
        vec![24, 24, 20, 20, 20, 20, 20, 20, 20, 20, 18, 12, 12, 12, 12, 8]
    );
    assert_eq!(layout.seat_count(), 282);
}

#[test]
fn back_row_is_split_by_the_booth() {
    let layout = venue();
    let q = &layout.rows()[15];
    let seats: Vec<u32> = q.iter().filter_map(|c| c.seat_number()).collect();
    assert_eq!(seats, vec![11, 9, 7, 5, 6, 8, 10, 12]);
    assert!(q[13..17].iter().all(|c| *c == Cell::Empty));
}

#[test]
fn contains_and_cell_lookup() {
    let layout = venue();
    assert!(layout.contains(&SeatId::new('A', 24)));
    assert!(layout.contains(&SeatId::new('Q', 12)));
    assert!(!layout.contains(&SeatId::new('Q', 1)));
    assert!(!layout.contains(&SeatId::new('C', 23)));
    assert!(!layout.contains(&SeatId::new('I', 1)));
    assert_eq!(layout.cell(0, 7), Some(Cell::RowLabel));
    assert_eq!(layout.cell(16, 0), None);
    assert_eq!(layout.cell(0, 30), None);
}

#[test]
fn seats_are_unique_across_the_hall() {
    let layout = venue();
    let ids: BTreeSet<SeatId> = layout.seats().map(|s| s.id).collect();
    assert_eq!(ids.len(), layout.seat_count());
}

#[test]
fn seat_id_parses_and_displays() {
    let id: SeatId = " B14 ".parse().unwrap();
    assert_eq!(id, SeatId::new('B', 14));
    assert_eq!(id.to_string(), "B14");
    assert!(!id.is_premium());
    assert!(SeatId::new('A', 21).is_premium());
    assert!(!SeatId::new('A', 20).is_premium());

    for bad in ["", "14", "b14", "B", "B1x", "B0", "B99999999999"] {
        assert!(bad.parse::<SeatId>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let err = SeatLayout::from_rows(
        vec!['A', 'B'],
        vec![vec![Cell::Seat(1), Cell::Seat(2)], vec![Cell::Seat(1)]],
    )
    .unwrap_err();
    assert!(err.to_string().contains("row 'B' has 1 cells"));
}

#[test]
fn from_rows_rejects_label_mismatch_and_duplicates() {
    assert!(SeatLayout::from_rows(vec!['A'], vec![vec![Cell::Seat(1)]; 2]).is_err());
    assert!(SeatLayout::from_rows(vec!['A', 'A'], vec![vec![Cell::Seat(1)]; 2]).is_err());
    assert!(SeatLayout::from_rows(vec!['A'], vec![vec![Cell::Seat(3), Cell::Seat(3)]]).is_err());
    assert!(SeatLayout::from_rows(vec!['A'], vec![vec![Cell::Seat(0)]]).is_err());
    assert!(SeatLayout::from_rows(vec![], vec![]).is_err());
}

#[test]
fn from_rules_rejects_bad_slices_and_widths() {
    let pattern = canonical_pattern();
    let out_of_range = [RowRule {
        repeat: 1,
        pieces: &[Piece::Slice { start: 0, end: 31 }],
    }];
    assert!(SeatLayout::from_rules(&pattern, &['A'], &out_of_range).is_err());

    let ragged = [
        RowRule {
            repeat: 1,
            pieces: &[Piece::Slice { start: 0, end: 30 }],
        },
        RowRule {
            repeat: 1,
            pieces: &[Piece::Pad(2), Piece::Slice { start: 2, end: -2 }],
        },
    ];
    let err = SeatLayout::from_rules(&pattern, &['A', 'B'], &ragged).unwrap_err();
    assert!(matches!(err, AtelierError::Layout(_)));
}

#[test]
fn display_matches_grid_notation() {
    let text = venue().to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(
        first,
        "A: 23 21 19 17 15 13 . | . 11 9 7 5 3 1 2 4 6 8 10 12 . | . 14 16 18 20 22 24"
    );
    assert_eq!(text.lines().count(), 16);
}
