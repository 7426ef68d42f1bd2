// src/engine/assemble.rs

use std::mem::take;

use super::decoder::{decode, first_of_pairs};
use super::types::{PlayerRow, RawCells, Roster};
use crate::config::consts::HEADERS;
use crate::config::options::{ExtractOptions, PricePolicy};
use crate::core::sanitize::{clean_name, parse_price};
use crate::error::ScrapeError;

fn check_len(column: &'static str, expected: usize, found: usize) -> Result<(), ScrapeError> {
    if expected == found {
        Ok(())
    } else {
        Err(ScrapeError::LengthMismatch { column, expected, found })
    }
}

/// Build the roster from raw page cells.
///
/// The player count is the number of de-duplicated names. Every other column must have
/// exactly that many entries; otherwise the page layout has drifted and nothing is emitted.
pub fn assemble(cells: &RawCells, opts: &ExtractOptions) -> Result<Roster, ScrapeError> {
    let names: Vec<String> = first_of_pairs(&cells.names).map(|n| clean_name(n)).collect();
    if names.is_empty() {
        return Err(ScrapeError::NoPlayers);
    }
    let expected = names.len();

    let mut cols = decode(&cells.centered, &opts.layout, opts.height_policy)?;

    check_len(HEADERS[5], expected, cells.prices.len())?;
    for (column, found) in cols.columns() {
        check_len(column, expected, found)?;
    }
    check_len(HEADERS[8], expected, cells.links.len())?;
    logd!(players = expected, "columns aligned");

    let mut roster = Roster { rows: Vec::with_capacity(expected), skipped: 0 };
    for (i, name) in names.into_iter().enumerate() {
        let market_value = match parse_price(&cells.prices[i], &opts.prices) {
            Ok(v) => v,
            Err(e) => match opts.price_policy {
                PricePolicy::Zero => {
                    logw!(player = %name, "{e}; using 0.0");
                    0.0
                }
                PricePolicy::SkipRow => {
                    logw!(player = %name, "{e}; skipping row");
                    roster.skipped += 1;
                    continue;
                }
                PricePolicy::Fail => {
                    return Err(ScrapeError::Price { entry: i + 1, source: e });
                }
            },
        };

        roster.rows.push(PlayerRow {
            entry: roster.rows.len() + 1,
            name,
            number: take(&mut cols.numbers[i]),
            height: take(&mut cols.heights[i]),
            foot: take(&mut cols.feet[i]),
            market_value,
            joined: take(&mut cols.joined[i]),
            contract_expiry: take(&mut cols.expiry[i]),
            profile: cells.links[i].clone(),
        });
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::NOT_ASSIGNED;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    fn record(number: &str) -> Vec<String> {
        strings(&[number, "", "", "1,80m", "right", "Jul 1, 2022", "", "Jun 30, 2026", ""])
    }

    fn two_players() -> RawCells {
        let mut centered = record("10");
        centered.extend(record("-"));
        RawCells {
            names: strings(&["Jane Smith", "Jane Smith", "Amy Jones", "Amy Jones"]),
            prices: strings(&["€45.00m", "€800k"]),
            centered,
            links: strings(&[
                "https://www.transfermarkt.co.uk/jane-smith/profil/spieler/1",
                "https://www.transfermarkt.co.uk/amy-jones/profil/spieler/2",
            ]),
        }
    }

    #[test]
    fn builds_rows_in_order() {
        let roster = assemble(&two_players(), &ExtractOptions::default()).unwrap();
        assert_eq!(roster.rows.len(), 2);
        let (a, b) = (&roster.rows[0], &roster.rows[1]);
        assert_eq!((a.entry, a.name.as_str(), a.number.as_str()), (1, "Jane Smith", "10"));
        assert_eq!(a.market_value, 45.0);
        assert_eq!(a.height, "180");
        assert_eq!((b.entry, b.number.as_str(), b.market_value), (2, NOT_ASSIGNED, 0.8));
        assert!(b.profile.ends_with("/spieler/2"));
    }

    #[test]
    fn no_names_is_an_error() {
        let cells = RawCells::default();
        assert!(matches!(assemble(&cells, &ExtractOptions::default()), Err(ScrapeError::NoPlayers)));
    }

    #[test]
    fn short_price_column_is_reported() {
        let mut cells = two_players();
        cells.prices.pop();
        let err = assemble(&cells, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::LengthMismatch { column: "Market Val(EUR)", expected: 2, found: 1 }
        ));
    }

    #[test]
    fn extra_centered_record_is_reported() {
        let mut cells = two_players();
        cells.centered.extend(record("3"));
        let err = assemble(&cells, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, ScrapeError::LengthMismatch { column: "Player #", expected: 2, found: 3 }));
    }

    #[test]
    fn missing_link_is_reported() {
        let mut cells = two_players();
        cells.links.truncate(1);
        let err = assemble(&cells, &ExtractOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Player Profile"));
    }

    #[test]
    fn bad_price_policies() {
        let mut cells = two_players();
        cells.prices[0] = s!("€??");

        let mut opts = ExtractOptions::default();
        let zero = assemble(&cells, &opts).unwrap();
        assert_eq!(zero.rows[0].market_value, 0.0);
        assert_eq!(zero.skipped, 0);

        opts.price_policy = PricePolicy::SkipRow;
        let skip = assemble(&cells, &opts).unwrap();
        assert_eq!(skip.rows.len(), 1);
        assert_eq!(skip.skipped, 1);
        assert_eq!(skip.rows[0].entry, 1);
        assert_eq!(skip.rows[0].name, "Amy Jones");

        opts.price_policy = PricePolicy::Fail;
        let err = assemble(&cells, &opts).unwrap_err();
        assert!(matches!(err, ScrapeError::Price { entry: 1, .. }));
    }
}
