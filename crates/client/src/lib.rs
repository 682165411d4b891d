mod client;
mod config;
mod error;
mod params;
mod retry;
mod store;

pub use client::ContentClient;
pub use config::{ApiConfig, RetryPolicy, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use params::{Populate, PublicationState, QueryParams};
pub use retry::with_retry;
pub use store::{PrefStore, AUTH_TOKEN_KEY, THEME_KEY};
