mod card;

pub use card::{CardInfo, PlatformPrices, PriceQuery, PriceResponse, PLATFORM_ORDER};
