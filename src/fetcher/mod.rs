use crate::error::Result;
use std::future::Future;

pub mod futbin;

pub use futbin::FutbinClient;

/// Source of raw player-page HTML. The live implementation is
/// [`FutbinClient`]; tests substitute canned pages or failures.
pub trait PageSource: Send + Sync + 'static {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}
