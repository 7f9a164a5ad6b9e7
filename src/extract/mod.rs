//! Layered field extraction over a parsed FUTBIN player page.
//!
//! Extraction never fails: a field that cannot be recovered degrades to
//! `None` / empty instead of erroring, and the lookup still succeeds.

mod scripts;
mod selectors;
mod text;

use crate::domain::{CardInfo, PlatformPrices};
use scraper::{ElementRef, Html, Selector};

/// Name, rating and position, each resolved through its fallback chain.
pub fn extract_card(document: &Html) -> CardInfo {
    let name = first_text(document, &selectors::PLAYER_NAME)
        .or_else(|| first_text(document, &selectors::FIRST_HEADING))
        .unwrap_or_else(|| "Unknown".to_string());

    let rating = first_text(document, &selectors::RATING)
        .or_else(|| first_text(document, &selectors::RATING_FALLBACK))
        .and_then(|text| text::parse_rating(&text));

    let position = first_text(document, &selectors::POSITION)
        .or_else(|| first_text(document, &selectors::POSITION_FALLBACK))
        .unwrap_or_default();

    CardInfo {
        name,
        rating,
        position,
    }
}

/// Per-platform prices via three strategies, each filling only the slots
/// the previous ones left empty.
pub fn extract_prices(document: &Html) -> PlatformPrices {
    let mut prices = PlatformPrices::default();
    fill_from_targeted(document, &mut prices);
    fill_from_price_boxes(document, &mut prices);
    scripts::fill_from_scripts(document, &mut prices);
    prices
}

/// Strategy 1: selectors that name the platform directly. Within a chain,
/// stop at the first selector whose text parses.
fn fill_from_targeted(document: &Html, prices: &mut PlatformPrices) {
    for (platform, chain) in selectors::TARGETED_PRICES.iter() {
        for selector in chain {
            let price = first_text(document, selector).and_then(|text| text::parse_price(&text));
            if let Some(price) = price {
                prices.set(platform, price);
                break;
            }
        }
    }
}

/// Strategy 2: unlabelled price boxes in document order. Assumes the page
/// lists them in `PLATFORM_ORDER`; once every slot is filled the remaining
/// boxes are ignored.
fn fill_from_price_boxes(document: &Html, prices: &mut PlatformPrices) {
    for element in document.select(&selectors::PRICE_BOXES) {
        if let Some(price) = text::parse_price(&element_text(element)) {
            if let Some(slot) = prices.first_empty() {
                prices.set(slot, price);
            }
        }
    }
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn name_prefers_the_player_name_element() {
        let doc = document(r#"<div class="player_name_players_498">Vini Jr.</div><h1>Other</h1>"#);
        assert_eq!(extract_card(&doc).name, "Vini Jr.");
    }

    #[test]
    fn name_falls_back_to_the_first_heading() {
        let doc = document("<h1> Kylian Mbappé </h1><h1>Second</h1>");
        assert_eq!(extract_card(&doc).name, "Kylian Mbappé");
    }

    #[test]
    fn name_defaults_to_unknown() {
        assert_eq!(extract_card(&document("<p>No player here</p>")).name, "Unknown");
        assert_eq!(extract_card(&document("<h1>  </h1>")).name, "Unknown");
    }

    #[test]
    fn rating_parses_leading_digits() {
        let doc = document(r#"<div class="pcdisplay-rat">91 OVR</div>"#);
        assert_eq!(extract_card(&doc).rating, Some(91));
    }

    #[test]
    fn rating_falls_back_to_generic_class() {
        let doc = document(r#"<span class="rating">88</span>"#);
        assert_eq!(extract_card(&doc).rating, Some(88));
    }

    #[test]
    fn unparseable_rating_is_none() {
        let doc = document(r#"<div class="pcdisplay-rat">N/A</div>"#);
        assert_eq!(extract_card(&doc).rating, None);
        assert_eq!(extract_card(&document("<p>nothing</p>")).rating, None);
    }

    #[test]
    fn position_uses_fallback_chain() {
        let doc = document(r#"<div class="pcdisplay-pos"> ST </div>"#);
        assert_eq!(extract_card(&doc).position, "ST");

        let doc = document(r#"<div class="position">CAM</div>"#);
        assert_eq!(extract_card(&doc).position, "CAM");

        assert_eq!(extract_card(&document("<p>none</p>")).position, "");
    }

    #[test]
    fn targeted_selectors_fill_each_platform() {
        let doc = document(
            r#"
            <div class="ps-price">50,000</div>
            <span id="xbox-price">52.000</span>
            <div data-platform="pc">61 000</div>
        "#,
        );
        let prices = extract_prices(&doc);
        assert_eq!(prices.ps, Some(50_000));
        assert_eq!(prices.xbox, Some(52_000));
        assert_eq!(prices.pc, Some(61_000));
    }

    #[test]
    fn targeted_chain_skips_unparseable_matches() {
        // class variant is junk; the id variant supplies the price
        let doc = document(
            r#"
            <div class="ps-price">N/A</div>
            <div id="ps-price">1,500</div>
        "#,
        );
        assert_eq!(extract_prices(&doc).ps, Some(1_500));
    }

    #[test]
    fn targeted_beats_generic_boxes() {
        let doc = document(
            r#"
            <div class="ps-price">40,000</div>
            <div class="price-box">99,999</div>
        "#,
        );
        let prices = extract_prices(&doc);
        assert_eq!(prices.ps, Some(40_000));
        // the generic box lands on the next empty slot instead
        assert_eq!(prices.xbox, Some(99_999));
    }

    #[test]
    fn generic_boxes_assign_in_document_order() {
        let doc = document(
            r#"
            <div class="price-box">10,000</div>
            <div class="price_box">11,000</div>
            <div class="player-price">12,000</div>
            <div class="price-box">13,000</div>
        "#,
        );
        let prices = extract_prices(&doc);
        assert_eq!(prices.ps, Some(10_000));
        assert_eq!(prices.xbox, Some(11_000));
        assert_eq!(prices.pc, Some(12_000));
    }

    #[test]
    fn generic_boxes_skip_non_numeric_text() {
        let doc = document(
            r#"
            <div class="price-box">N/A</div>
            <div class="price-box">7,500</div>
        "#,
        );
        let prices = extract_prices(&doc);
        assert_eq!(prices.ps, Some(7_500));
        assert_eq!(prices.xbox, None);
    }

    #[test]
    fn script_fallback_fills_remaining_platforms() {
        let doc = document(
            r#"
            <div class="ps-price">50,000</div>
            <script>var data = { "xbox_price": 52000, "pc_price": 61000 };</script>
        "#,
        );
        let prices = extract_prices(&doc);
        assert_eq!(prices.ps, Some(50_000));
        assert_eq!(prices.xbox, Some(52_000));
        assert_eq!(prices.pc, Some(61_000));
    }

    #[test]
    fn script_fallback_never_overrides_dom_prices() {
        let doc = document(
            r#"
            <div class="ps-price">50,000</div>
            <script>ps_price: 1</script>
        "#,
        );
        assert_eq!(extract_prices(&doc).ps, Some(50_000));
    }

    #[test]
    fn script_patterns_match_case_insensitively() {
        let doc = document("<script>PS_PRICE: 4200</script>");
        assert_eq!(extract_prices(&doc).ps, Some(4_200));
    }

    #[test]
    fn page_without_prices_yields_empty_slots() {
        let doc = document("<h1>Retired Player</h1>");
        assert_eq!(extract_prices(&doc), PlatformPrices::default());
    }
}
