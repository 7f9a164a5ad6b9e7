use fc26_price_api::api;
use fc26_price_api::config::Config;
use fc26_price_api::error::Result;
use fc26_price_api::fetcher::FutbinClient;
use fc26_price_api::services::PriceService;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level);

    let source = FutbinClient::new(config.http_client.clone());
    let service = PriceService::new(source, config.args.base_url.clone());
    let app = api::router(service);

    let listener = tokio::net::TcpListener::bind(config.args.bind).await?;
    info!("Listening on http://{}", config.args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(level: &str) {
    let level = level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
