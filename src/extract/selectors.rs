//! CSS selectors for the FUTBIN player page.
//!
//! FUTBIN has shipped several revisions of its player-page markup, so every
//! lookup carries fallbacks and the price selectors exist in class, id and
//! data-attribute variants.

use crate::domain::PLATFORM_ORDER;
use once_cell::sync::Lazy;
use scraper::Selector;

fn parse(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}

/// Current player-name element; older pages only carry a plain `<h1>`.
pub(crate) static PLAYER_NAME: Lazy<Selector> =
    Lazy::new(|| parse(".player_name_players_498"));
pub(crate) static FIRST_HEADING: Lazy<Selector> = Lazy::new(|| parse("h1"));

pub(crate) static RATING: Lazy<Selector> = Lazy::new(|| parse(".pcdisplay-rat"));
pub(crate) static RATING_FALLBACK: Lazy<Selector> = Lazy::new(|| parse(".rating"));

pub(crate) static POSITION: Lazy<Selector> = Lazy::new(|| parse(".pcdisplay-pos"));
pub(crate) static POSITION_FALLBACK: Lazy<Selector> = Lazy::new(|| parse(".position"));

/// Unlabelled price containers scanned by the generic strategy.
pub(crate) static PRICE_BOXES: Lazy<Selector> =
    Lazy::new(|| parse(".price-box, .price_box, .player-price"));

pub(crate) static SCRIPTS: Lazy<Selector> = Lazy::new(|| parse("script"));

/// Per-platform selector chains for the targeted strategy, in
/// `PLATFORM_ORDER`. Within a chain the first parseable match wins.
pub(crate) static TARGETED_PRICES: Lazy<Vec<(&'static str, [Selector; 3])>> = Lazy::new(|| {
    PLATFORM_ORDER
        .into_iter()
        .map(|platform| {
            (
                platform,
                [
                    parse(&format!(".{platform}-price")),
                    parse(&format!("#{platform}-price")),
                    parse(&format!(r#"[data-platform="{platform}"]"#)),
                ],
            )
        })
        .collect()
});
