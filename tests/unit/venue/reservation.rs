use super::*;

const RECORD: &str = "\
# Billetterie - saison 2024
Les Belles-soeurs
Salle Jean-Louis-Millette
12 avril, 20 h
A1

  A24  
# annulé: B3
A1
";

#[test]
fn parse_reads_header_and_reservations() {
    let rec = EventRecord::parse(RECORD).unwrap();
    assert_eq!(rec.what, "Les Belles-soeurs");
    assert_eq!(rec.venue, "Salle Jean-Louis-Millette");
    assert_eq!(rec.when, "12 avril, 20 h");
    assert_eq!(rec.reserved.len(), 2);
    assert!(rec.reserved.contains(&SeatId::new('A', 1)));
    assert!(rec.reserved.contains(&SeatId::new('A', 24)));
    assert!(!rec.reserved.contains_str("B3"));
    assert!(rec.slug.is_empty());
}

#[test]
fn parse_requires_three_header_lines() {
    let err = EventRecord::parse("# only a comment\nWhat\nWhere\n").unwrap_err();
    assert!(matches!(err, AtelierError::Record(_)));
    assert!(err.to_string().contains("'when'"));
    assert!(EventRecord::parse("").is_err());
}

#[test]
fn header_lines_are_taken_verbatim_even_when_blank() {
    let rec = EventRecord::parse("What\n\nWhen\nC5\n").unwrap();
    assert_eq!(rec.venue, "");
    assert_eq!(rec.when, "When");
    assert!(rec.reserved.contains_str("C5"));
}

#[test]
fn set_semantics_collapse_duplicates_and_blanks() {
    let set: ReservationSet = ["A1", " A1", "", "   ", "B2"].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["A1", "B2"]);
    assert!(!ReservationSet::new().contains_str("A1"));
    assert!(ReservationSet::new().is_empty());
}

#[test]
fn unmatched_lists_identifiers_naming_no_seat() {
    let layout = SeatLayout::venue().unwrap();
    let set: ReservationSet = ["A1", "Z99", "Q1", "I3", "hello", "C23"].into_iter().collect();
    assert_eq!(set.unmatched(&layout), vec!["C23", "I3", "Q1", "Z99", "hello"]);
}

#[test]
fn from_file_sets_slug_and_finds_records_sorted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b-soiree.txt"), RECORD).unwrap();
    std::fs::write(dir.path().join("a-matinee.txt"), "What\nWhere\nWhen\n").unwrap();
    std::fs::write(dir.path().join("page.md"), "# Billets").unwrap();

    let found = find_event_records(dir.path()).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a-matinee.txt", "b-soiree.txt"]);

    let rec = EventRecord::from_file(&found[1]).unwrap();
    assert_eq!(rec.slug, "b-soiree");
    assert_eq!(rec.reserved.len(), 2);
}

#[test]
fn from_file_reports_the_path_on_bad_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    std::fs::write(&path, "What\n").unwrap();
    let err = EventRecord::from_file(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("record error:"));
    assert!(msg.contains("short.txt"));
    assert_eq!(msg.matches("record error:").count(), 1);
}
