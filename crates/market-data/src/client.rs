//! Market Data Access
//!
//! Trait seam over the market API so the bot can run against the real
//! CoinGecko client or a mock in tests.

use async_trait::async_trait;

use crate::model::{CoinSnapshot, MarketMovers};

/// A source of market snapshots
///
/// Implementations are fail-soft: any upstream failure yields an empty
/// snapshot, never an error. Callers must treat "empty" as temporarily
/// unavailable and reply with a degraded message.
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    /// Up to `limit` coins ordered by market capitalization descending,
    /// 24h percent change included
    async fn top_by_market_cap(&self, limit: usize) -> Vec<CoinSnapshot>;

    /// Top gainers and losers by 24h percent change, each list capped
    /// at `limit`
    async fn movers_24h(&self, limit: usize) -> MarketMovers;
}
