use super::*;

const ROW: [&str; 3] = ["Asha Rao", "Stage 3", "asha@clinic.in"];

#[test]
fn any_column_matches_case_insensitively() {
    assert!(row_matches(&ROW, "STAGE", None));
    assert!(row_matches(&ROW, "clinic", None));
    assert!(!row_matches(&ROW, "stage 5", None));
}

#[test]
fn specific_column_only_checks_that_cell() {
    assert!(row_matches(&ROW, "asha", Some(0)));
    assert!(!row_matches(&ROW, "stage", Some(0)));
}

#[test]
fn missing_column_hides_row() {
    assert!(!row_matches(&ROW, "asha", Some(7)));
}

#[test]
fn empty_term_shows_rows_with_cells() {
    assert!(row_matches(&ROW, "", None));
    let empty: [&str; 0] = [];
    assert!(!row_matches(&empty, "", None));
}

#[test]
fn owned_cells_are_accepted() {
    let cells = vec!["Ravi".to_owned(), "Stage 1".to_owned()];
    assert!(row_matches(&cells, "ravi", Some(0)));
}

#[test]
fn negative_column_index_searches_all_columns() {
    assert_eq!(column_from_index(Some(-1)), None);
    assert_eq!(column_from_index(Some(i32::MIN)), None);
    assert_eq!(column_from_index(None), None);
    assert!(row_matches(&ROW, "clinic", column_from_index(Some(-1))));
}

#[test]
fn non_negative_column_index_selects_that_column() {
    assert_eq!(column_from_index(Some(0)), Some(0));
    assert_eq!(column_from_index(Some(2)), Some(2));
    assert!(!row_matches(&ROW, "clinic", column_from_index(Some(0))));
}
