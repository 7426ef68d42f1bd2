// src/engine/decoder.rs
// Fixed-width record decoding of the centered cells.
//
// Layout per player (0-based, stride 9):
//   0 shirt number | 1 nationality | 2 spacer | 3 height | 4 foot
//   5 date joined  | 6 previous club | 7 contract expiry | 8 ---

use super::types::DecodedColumns;
use crate::config::consts::NOT_ASSIGNED;
use crate::config::options::{FieldOffsets, HeightPolicy};
use crate::core::sanitize::{clean_cell, clean_height, CellText};
use crate::error::ScrapeError;

/// Split `centered` into records of `layout.stride` cells and pull the tracked fields out of each.
/// Each output column has exactly `centered.len() / layout.stride` entries.
pub fn decode(
    centered: &[String],
    layout: &FieldOffsets,
    height_policy: HeightPolicy,
) -> Result<DecodedColumns, ScrapeError> {
    layout.validate()?;
    if centered.len() % layout.stride != 0 {
        return Err(ScrapeError::Misaligned { len: centered.len(), stride: layout.stride });
    }

    let mut cols = DecodedColumns::with_capacity(centered.len() / layout.stride);
    for record in centered.chunks_exact(layout.stride) {
        cols.numbers.push(text_field(&record[layout.number]));
        cols.heights.push(height_field(&record[layout.height], height_policy));
        cols.feet.push(text_field(&record[layout.foot]));
        cols.joined.push(text_field(&record[layout.joined]));
        cols.expiry.push(text_field(&record[layout.expiry]));
    }
    logd!(records = cols.numbers.len(), "decoded centered cells");
    Ok(cols)
}

fn text_field(raw: &str) -> String {
    match clean_cell(raw) {
        CellText::Value(v) => v,
        CellText::Empty | CellText::Invalid => s!(NOT_ASSIGNED),
    }
}

fn height_field(raw: &str, policy: HeightPolicy) -> String {
    match (clean_cell(raw), policy) {
        (CellText::Value(v), _) => clean_height(&v),
        (CellText::Invalid, _) | (CellText::Empty, HeightPolicy::Sentinel) => s!(NOT_ASSIGNED),
        (CellText::Empty, HeightPolicy::KeepEmpty) => s!(),
    }
}

/// Every player's name cell comes in a pair; keep the first of each.
pub fn first_of_pairs(names: &[String]) -> impl Iterator<Item = &String> {
    names.iter().step_by(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: &str, height: &str, foot: &str, joined: &str, expiry: &str) -> Vec<String> {
        [number, "flag", "", height, foot, joined, "club", expiry, "x"]
            .iter()
            .map(|s| s!(*s))
            .collect()
    }

    #[test]
    fn nine_n_cells_give_n_values_per_field() {
        for n in 0..5 {
            let cells: Vec<String> = (0..n)
                .flat_map(|i| record(&i.to_string(), "1,80m", "right", "Jul 1, 2020", "Jun 30, 2026"))
                .collect();
            let cols = decode(&cells, &FieldOffsets::default(), HeightPolicy::KeepEmpty).unwrap();
            for (_, len) in cols.columns() {
                assert_eq!(len, n);
            }
        }
    }

    #[test]
    fn fields_come_from_named_offsets() {
        let mut cells = record("10", "1,85m", "left", "Jul 1, 2021", "Jun 30, 2025");
        cells.extend(record("-", "", "\u{a0}", "", "Jun 30, 2027"));
        let cols = decode(&cells, &FieldOffsets::default(), HeightPolicy::KeepEmpty).unwrap();

        assert_eq!(cols.numbers, vec!["10", NOT_ASSIGNED]);
        assert_eq!(cols.heights, vec!["185", ""]);
        assert_eq!(cols.feet, vec!["left", NOT_ASSIGNED]);
        assert_eq!(cols.joined, vec!["Jul 1, 2021", NOT_ASSIGNED]);
        assert_eq!(cols.expiry, vec!["Jun 30, 2025", "Jun 30, 2027"]);
    }

    #[test]
    fn empty_height_follows_policy() {
        let cells = record("1", "  ", "right", "a", "b");
        let keep = decode(&cells, &FieldOffsets::default(), HeightPolicy::KeepEmpty).unwrap();
        let fix = decode(&cells, &FieldOffsets::default(), HeightPolicy::Sentinel).unwrap();
        assert_eq!(keep.heights, vec![""]);
        assert_eq!(fix.heights, vec![NOT_ASSIGNED]);
    }

    #[test]
    fn dashed_height_is_sentinel_under_both_policies() {
        let cells = record("1", "-", "right", "a", "b");
        let cols = decode(&cells, &FieldOffsets::default(), HeightPolicy::KeepEmpty).unwrap();
        assert_eq!(cols.heights, vec![NOT_ASSIGNED]);
    }

    #[test]
    fn partial_record_is_misaligned() {
        let mut cells = record("1", "1,80m", "right", "a", "b");
        cells.pop();
        let err = decode(&cells, &FieldOffsets::default(), HeightPolicy::KeepEmpty).unwrap_err();
        assert!(matches!(err, ScrapeError::Misaligned { len: 8, stride: 9 }));
    }

    #[test]
    fn custom_layout() {
        let layout = FieldOffsets { stride: 5, number: 0, height: 1, foot: 2, joined: 3, expiry: 4 };
        let cells: Vec<String> = ["7", "1,70m", "both", "x", "y"].iter().map(|s| s!(*s)).collect();
        let cols = decode(&cells, &layout, HeightPolicy::KeepEmpty).unwrap();
        assert_eq!(cols.numbers, vec!["7"]);
        assert_eq!(cols.heights, vec!["170"]);
        assert_eq!(cols.expiry, vec!["y"]);
    }

    #[test]
    fn eight_cell_records_with_default_offsets() {
        let layout = FieldOffsets { stride: 8, ..FieldOffsets::default() };
        let cells: Vec<String> = [
            "7", "Jan 1, 2000", "", "1,70m", "left", "Jul 1, 2020", "", "Jun 30, 2025",
            "8", "Jan 1, 2001", "", "", "right", "Aug 1, 2021", "", "Jun 30, 2027",
        ]
        .iter()
        .map(|s| s!(*s))
        .collect();
        let cols = decode(&cells, &layout, HeightPolicy::KeepEmpty).unwrap();
        assert_eq!(cols.numbers, vec!["7", "8"]);
        assert_eq!(cols.heights, vec!["170", ""]);
        assert_eq!(cols.feet, vec!["left", "right"]);
        assert_eq!(cols.expiry, vec!["Jun 30, 2025", "Jun 30, 2027"]);

        let err = decode(&cells, &FieldOffsets::default(), HeightPolicy::KeepEmpty).unwrap_err();
        assert!(matches!(err, ScrapeError::Misaligned { len: 16, stride: 9 }));
    }

    #[test]
    fn first_of_pairs_keeps_even_positions() {
        let names: Vec<String> = ["A", "A", "B", "B", "C"].iter().map(|s| s!(*s)).collect();
        let kept: Vec<&String> = first_of_pairs(&names).collect();
        assert_eq!(kept, vec!["A", "B", "C"]);
    }
}
