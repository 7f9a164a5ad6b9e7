use crate::domain::{PriceQuery, PriceResponse};
use crate::error::Result;
use crate::extract;
use crate::fetcher::PageSource;
use chrono::{SecondsFormat, Utc};
use scraper::Html;
use tracing::info;

/// Resolves one price query end to end: fetch the player page, run the
/// extraction pipeline, pick the current price for the requested platform.
pub struct PriceService<S> {
    source: S,
    base_url: String,
}

impl<S: PageSource> PriceService<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        info!("Created new Price service");
        Self {
            source,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn player_url(&self, futbin_id: &str) -> String {
        format!("{}/26/player/{}", self.base_url, futbin_id)
    }

    pub async fn fetch_price(&self, query: &PriceQuery) -> Result<PriceResponse> {
        let url = self.player_url(&query.futbin_id);
        let html = self.source.fetch_page(&url).await?;

        let document = Html::parse_document(&html);
        let card = extract::extract_card(&document);
        let prices = extract::extract_prices(&document);
        let current_price = prices.select(&query.platform);

        info!(
            "Resolved {} ({}): {:?} on {}",
            card.name, query.futbin_id, current_price, query.platform
        );

        Ok(PriceResponse {
            futbin_id: query.futbin_id.clone(),
            name: card.name,
            rating: card.rating,
            position: card.position,
            prices,
            current_price,
            platform: query.platform.clone(),
            fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            url,
        })
    }
}
