mod pricing;

pub use pricing::PriceService;
