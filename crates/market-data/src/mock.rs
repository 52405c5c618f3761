//! Mock Market Data
//!
//! For tests and demos. Returns realistic static snapshots, or nothing
//! at all when configured to simulate an outage.

use async_trait::async_trait;

use crate::client::MarketDataApi;
use crate::model::{CoinSnapshot, MarketMovers};

/// Mock market data source with static snapshots
pub struct MockMarketData {
    top: Vec<CoinSnapshot>,
    gainers: Vec<CoinSnapshot>,
    losers: Vec<CoinSnapshot>,
    unavailable: bool,
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            top: vec![
                CoinSnapshot::new("btc", 97_500.0, 2.5),
                CoinSnapshot::new("eth", 3_450.0, 1.8),
                CoinSnapshot::new("sol", 195.0, 4.2),
                CoinSnapshot::new("ada", 0.95, -1.2),
                CoinSnapshot::new("doge", 0.38, 12.0),
            ],
            gainers: vec![
                CoinSnapshot::new("doge", 0.38, 12.0),
                CoinSnapshot::new("avax", 42.0, 5.5),
            ],
            losers: vec![
                CoinSnapshot::new("shib", 0.000022, -8.0),
                CoinSnapshot::new("ada", 0.95, -1.2),
            ],
            unavailable: false,
        }
    }

    /// Override the top-by-market-cap snapshot
    pub fn with_top(top: Vec<CoinSnapshot>) -> Self {
        Self {
            top,
            ..Self::new()
        }
    }

    /// Simulate an upstream outage: every fetch comes back empty
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl MarketDataApi for MockMarketData {
    async fn top_by_market_cap(&self, limit: usize) -> Vec<CoinSnapshot> {
        if self.unavailable {
            return Vec::new();
        }
        self.top.iter().take(limit).cloned().collect()
    }

    async fn movers_24h(&self, limit: usize) -> MarketMovers {
        if self.unavailable {
            return MarketMovers::default();
        }
        MarketMovers {
            gainers: self.gainers.iter().take(limit).cloned().collect(),
            losers: self.losers.iter().take(limit).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_capped_snapshot() {
        let mock = MockMarketData::new();

        let coins = mock.top_by_market_cap(3).await;
        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0].symbol, "btc");
    }

    #[tokio::test]
    async fn test_mock_outage_is_empty() {
        let mock = MockMarketData::unavailable();

        assert!(mock.top_by_market_cap(10).await.is_empty());
        assert!(mock.movers_24h(10).await.is_empty());
    }
}
