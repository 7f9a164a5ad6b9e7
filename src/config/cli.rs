use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Base URL of the FUTBIN site
    #[clap(long, env = "FUTBIN_BASE_URL", default_value = "https://www.futbin.com")]
    pub base_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
