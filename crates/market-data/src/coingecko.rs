//! CoinGecko Client
//!
//! Fetches `/coins/markets` snapshots. Failures are converted to empty
//! snapshots at the trait surface; the underlying cause is logged and
//! never reaches the conversation layer.

use std::time::Duration;

use async_trait::async_trait;

use crate::client::MarketDataApi;
use crate::error::{MarketDataError, Result};
use crate::model::{CoinSnapshot, MarketCoin, MarketMovers};

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Hard per-request bound so a stalled upstream cannot hold a handler
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// CoinGecko `/coins/markets` client
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// One `/coins/markets` page with the given sort order
    async fn fetch_markets(&self, order: &str, per_page: usize) -> Result<Vec<CoinSnapshot>> {
        let per_page = per_page.to_string();
        let params = [
            ("vs_currency", "usd"),
            ("order", order),
            ("per_page", per_page.as_str()),
            ("page", "1"),
            ("price_change_percentage", "24h"),
        ];

        let response = self
            .http
            .get(format!("{}/coins/markets", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status(status.as_u16()));
        }

        let payload: serde_json::Value = response.json().await?;
        let serde_json::Value::Array(entries) = payload else {
            return Err(MarketDataError::UnexpectedPayload(
                "expected a JSON array".into(),
            ));
        };

        // Entries that fail to parse are dropped rather than failing
        // the whole snapshot.
        Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<MarketCoin>(entry).ok())
            .map(CoinSnapshot::from)
            .collect())
    }

    /// Shared failure policy: log the cause, degrade to empty
    async fn markets_or_empty(&self, order: &str, limit: usize) -> Vec<CoinSnapshot> {
        match self.fetch_markets(order, limit).await {
            Ok(coins) => coins,
            Err(err) => {
                tracing::warn!(order, error = %err, "CoinGecko fetch failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl MarketDataApi for CoinGeckoClient {
    async fn top_by_market_cap(&self, limit: usize) -> Vec<CoinSnapshot> {
        let mut coins = self.markets_or_empty("market_cap_desc", limit).await;
        coins.truncate(limit);
        coins
    }

    async fn movers_24h(&self, limit: usize) -> MarketMovers {
        // Two sequential fetches; no ordering dependency between them.
        let mut gainers = self.markets_or_empty("percent_change_24h_desc", limit).await;
        let mut losers = self.markets_or_empty("percent_change_24h_asc", limit).await;
        gainers.truncate(limit);
        losers.truncate(limit);

        MarketMovers { gainers, losers }
    }
}
