pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod services;

pub use error::{FetchError, Result};
