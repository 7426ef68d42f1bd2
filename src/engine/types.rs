// src/engine/types.rs

use crate::config::consts::HEADERS;

/// Flat text sequences collected from one roster page, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawCells {
    /// Name cells; each player contributes two consecutive entries, the first is the name.
    pub names: Vec<String>,
    /// Market value cells, one per player.
    pub prices: Vec<String>,
    /// Centered cells, one fixed-width record per player.
    pub centered: Vec<String>,
    /// Absolute profile URLs, one per player.
    pub links: Vec<String>,
}

/// Parallel columns decoded from the centered cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedColumns {
    pub numbers: Vec<String>,
    pub heights: Vec<String>,
    pub feet: Vec<String>,
    pub joined: Vec<String>,
    pub expiry: Vec<String>,
}

impl DecodedColumns {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            numbers: Vec::with_capacity(n),
            heights: Vec::with_capacity(n),
            feet: Vec::with_capacity(n),
            joined: Vec::with_capacity(n),
            expiry: Vec::with_capacity(n),
        }
    }

    pub fn columns(&self) -> [(&'static str, usize); 5] {
        [
            (HEADERS[2], self.numbers.len()),
            (HEADERS[3], self.heights.len()),
            (HEADERS[4], self.feet.len()),
            (HEADERS[6], self.joined.len()),
            (HEADERS[7], self.expiry.len()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRow {
    pub entry: usize,
    pub name: String,
    pub number: String,
    pub height: String,
    pub foot: String,
    /// Millions of EUR; 0.0 when unlisted.
    pub market_value: f64,
    pub joined: String,
    pub contract_expiry: String,
    pub profile: String,
}

impl PlayerRow {
    /// Cells in export column order (see `config::consts::HEADERS`).
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.entry.to_string(),
            self.name.clone(),
            self.number.clone(),
            self.height.clone(),
            self.foot.clone(),
            format_value(self.market_value),
            self.joined.clone(),
            self.contract_expiry.clone(),
            self.profile.clone(),
        ]
    }
}

/// Shortest round-trip form, always with a fractional part: 45.0, 0.8.
pub fn format_value(v: f64) -> String {
    format!("{v:?}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    pub rows: Vec<PlayerRow>,
    /// Players dropped because their price did not parse (`PricePolicy::SkipRow`).
    pub skipped: usize,
}

impl Roster {
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(PlayerRow::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_value_keeps_fraction() {
        assert_eq!(format_value(45.0), "45.0");
        assert_eq!(format_value(0.8), "0.8");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(12.5), "12.5");
    }

    #[test]
    fn decoded_column_labels_are_export_headers() {
        let labels: Vec<&str> = DecodedColumns::default().columns().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            ["Player #", "Player Height(cm)", "Preferred Foot", "Player Date Joined", "Contract Expiration Date"]
        );
        assert!(labels.iter().all(|l| HEADERS.contains(l)));
    }
}
