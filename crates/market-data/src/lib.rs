//! # market-data
//!
//! CoinGecko market snapshot client for pulse-bot.
//!
//! A snapshot is a point-in-time read: fetched fresh on every request,
//! never cached or diffed against prior reads. The public fetch surface
//! is fail-soft by contract — any upstream failure degrades to an empty
//! snapshot and is logged, so callers render a "temporarily unavailable"
//! reply instead of crashing a handler.

pub mod client;
pub mod coingecko;
pub mod error;
pub mod mock;
pub mod model;

pub use client::MarketDataApi;
pub use coingecko::CoinGeckoClient;
pub use error::{MarketDataError, Result};
pub use mock::MockMarketData;
pub use model::{CoinSnapshot, MarketCoin, MarketMovers, biggest_mover};
