use crate::error::{FetchError, Result};
use serde::Serialize;

/// Marketplace keys in the fixed assignment and fallback order.
pub const PLATFORM_ORDER: [&str; 3] = ["ps", "xbox", "pc"];

/// A validated price lookup request.
#[derive(Debug, Clone)]
pub struct PriceQuery {
    pub futbin_id: String,
    pub platform: String,
}

impl PriceQuery {
    /// Builds a query from raw query-string parameters. The id is required;
    /// the platform defaults to `ps` and is lowercased. Unknown platform
    /// strings are accepted and simply never match a price slot.
    pub fn from_params(futbin_id: Option<String>, platform: Option<String>) -> Result<Self> {
        let futbin_id = futbin_id
            .filter(|id| !id.is_empty())
            .ok_or(FetchError::MissingId)?;

        let platform = platform
            .filter(|p| !p.is_empty())
            .map(|p| p.to_lowercase())
            .unwrap_or_else(|| "ps".to_string());

        Ok(Self {
            futbin_id,
            platform,
        })
    }
}

/// Per-marketplace prices. Slots are filled opportunistically by the
/// extraction strategies; any subset, including none, is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xbox: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pc: Option<u64>,
}

impl PlatformPrices {
    pub fn get(&self, platform: &str) -> Option<u64> {
        match platform {
            "ps" => self.ps,
            "xbox" => self.xbox,
            "pc" => self.pc,
            _ => None,
        }
    }

    pub fn set(&mut self, platform: &str, price: u64) {
        match platform {
            "ps" => self.ps = Some(price),
            "xbox" => self.xbox = Some(price),
            "pc" => self.pc = Some(price),
            _ => {}
        }
    }

    /// First platform in `PLATFORM_ORDER` without a price yet.
    pub fn first_empty(&self) -> Option<&'static str> {
        PLATFORM_ORDER.into_iter().find(|p| self.get(p).is_none())
    }

    /// The price reported to the caller: the requested platform if filled,
    /// otherwise the first filled slot in `PLATFORM_ORDER`.
    pub fn select(&self, platform: &str) -> Option<u64> {
        self.get(platform)
            .or_else(|| PLATFORM_ORDER.iter().find_map(|p| self.get(p)))
    }
}

/// Card fields recovered from the page, all best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub name: String,
    pub rating: Option<u64>,
    pub position: String,
}

/// The successful response body. `rating` and `current_price` serialize as
/// null when absent; unfilled platform slots are omitted from `prices`.
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub futbin_id: String,
    pub name: String,
    pub rating: Option<u64>,
    pub position: String,
    pub prices: PlatformPrices,
    pub current_price: Option<u64>,
    pub platform: String,
    pub fetched_at: String,
    pub url: String,
}
