use crate::error::{FetchError, Result};
use reqwest::Client;
use tracing::debug;

use super::PageSource;

/// Fetches player pages from the live FUTBIN site. One attempt per lookup;
/// failures surface directly to the caller.
#[derive(Clone)]
pub struct FutbinClient {
    client: Client,
}

impl FutbinClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for FutbinClient {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
