use crate::domain::{PlatformPrices, PLATFORM_ORDER};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::selectors;

/// `<key>_price` assignments embedded in the page's inline scripts, e.g.
/// `"ps_price": 50000` or `ps_price: 50000`.
static PRICE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    PLATFORM_ORDER
        .into_iter()
        .map(|platform| {
            let pattern = format!(r#"(?i){platform}_price['":\s]+(\d+)"#);
            (platform, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Strategy 3: scan inline script content for embedded price data. Only
/// fills platforms the DOM strategies left empty.
pub(crate) fn fill_from_scripts(document: &Html, prices: &mut PlatformPrices) {
    let script_content = document
        .select(&selectors::SCRIPTS)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    for (platform, pattern) in PRICE_PATTERNS.iter() {
        if prices.get(platform).is_some() {
            continue;
        }

        let price = pattern
            .captures(&script_content)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<u64>().ok())
            .filter(|price| *price > 0);

        if let Some(price) = price {
            prices.set(platform, price);
        }
    }
}
