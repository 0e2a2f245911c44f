use proptest::prelude::*;
use sheet_average::columns::{CellRange, column_label};

fn label_to_position(label: &str) -> usize {
    label
        .bytes()
        .fold(0, |acc, letter| acc * 26 + usize::from(letter - b'A') + 1)
}

#[test]
fn column_label_matches_worksheet_letters() {
    assert_eq!(column_label(1), "A");
    assert_eq!(column_label(5), "E");
    assert_eq!(column_label(26), "Z");
    assert_eq!(column_label(2 * 26), "AZ");
    assert_eq!(column_label(1000), "ALL");
    assert_eq!(column_label(16_384), "XFD");
}

#[test]
fn appended_columns_report_their_range() {
    let range = CellRange::column(4, 10 + 1);
    assert_eq!(range.to_string(), "D1:D11");
}

proptest! {
    #[test]
    fn column_label_is_bijective(position in 1usize..200_000) {
        let label = column_label(position);
        prop_assert!(!label.is_empty());
        prop_assert!(label.bytes().all(|b| b.is_ascii_uppercase()));
        prop_assert_eq!(label_to_position(&label), position);
    }

    #[test]
    fn column_label_never_shrinks(position in 1usize..200_000) {
        prop_assert!(column_label(position + 1).len() >= column_label(position).len());
    }
}
