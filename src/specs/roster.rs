// src/specs/roster.rs
//! Squad page ("detailed view", `/kader/verein/<id>/saison_id/<year>/plus/1`).
//!
//! Cells used:
//! - `td.hauptlink`: player name, followed by a second matching cell per player
//! - `td.rechts.hauptlink`: market value
//! - `td.zentriert`: the nine-cell record per player (number, flag, …, contract expiry)
//! - `a[href]` containing `/profil/spieler`: player profile

use scraper::Html;

use crate::config::options::ExtractOptions;
use crate::core::html::{parse_document, select_hrefs, select_texts, selector};
use crate::core::sanitize::profile_links;
use crate::engine::RawCells;
use crate::error::ScrapeError;

pub fn collect(markup: &str, opts: &ExtractOptions) -> Result<RawCells, ScrapeError> {
    let doc = parse_document(markup);
    collect_from(&doc, opts)
}

pub fn collect_from(doc: &Html, opts: &ExtractOptions) -> Result<RawCells, ScrapeError> {
    let sel = &opts.selectors;
    let names = select_texts(doc, &selector(&sel.names)?);
    let prices = select_texts(doc, &selector(&sel.prices)?);
    let centered = select_texts(doc, &selector(&sel.centered)?);
    let hrefs = select_hrefs(doc, &selector(&sel.anchors)?);
    let links = profile_links(&hrefs[..], &opts.profile_marker, &opts.origin);

    logd!(
        names = names.len(),
        prices = prices.len(),
        centered = centered.len(),
        anchors = hrefs.len(),
        links = links.len(),
        "collected cells"
    );

    Ok(RawCells { names, prices, centered, links })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <a href="/luton-town/startseite/verein/1031">Club</a>
          <table class="items"><tbody>
            <tr class="odd">
              <td class="zentriert rueckennummer">10</td>
              <td class="posrela"><table class="inline-table">
                <tr><td class="hauptlink"><a href="/jane-smith/profil/spieler/1">Jane Smíth</a></td></tr>
              </table></td>
              <td class="zentriert">Jan 1, 1999 (25)</td>
              <td class="zentriert"><img title="England"/></td>
              <td class="zentriert">1,85m</td>
              <td class="zentriert">right</td>
              <td class="zentriert">Jul 1, 2022</td>
              <td class="zentriert"><a href="/x/startseite/verein/9"><img/></a></td>
              <td class="zentriert">Jun 30, 2026</td>
              <td class="zentriert"></td>
              <td class="rechts hauptlink"><a href="/jane-smith/marktwertverlauf/spieler/1">€45.00m</a></td>
            </tr>
          </tbody></table>
        </body></html>
    "#;

    #[test]
    fn collects_each_sequence() {
        let cells = collect(PAGE, &ExtractOptions::default()).unwrap();
        assert_eq!(cells.names.len(), 2);
        assert!(cells.names[0].contains("Jane Smíth"));
        assert_eq!(cells.prices, vec!["€45.00m"]);
        assert_eq!(cells.centered.len(), 9);
        assert_eq!(cells.centered[0], "10");
        assert_eq!(cells.centered[7], "Jun 30, 2026");
        assert_eq!(cells.links, vec!["https://www.transfermarkt.co.uk/jane-smith/profil/spieler/1"]);
    }

    #[test]
    fn bad_configured_selector() {
        let mut opts = ExtractOptions::default();
        opts.selectors.centered = s!("td[");
        assert!(matches!(collect(PAGE, &opts), Err(ScrapeError::Selector(_))));
    }
}
