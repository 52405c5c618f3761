//! Market Snapshot Models
//!
//! Normalized views of the coin market. Snapshots are rebuilt on every
//! fetch; nothing here is persisted or mutated after construction.

use serde::Deserialize;

/// One coin in a market snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct CoinSnapshot {
    /// Ticker symbol as reported upstream (e.g. "btc")
    pub symbol: String,

    /// Current price in USD
    pub current_price: f64,

    /// 24-hour price change percentage; 0.0 when upstream omits it
    pub change_24h: f64,
}

impl CoinSnapshot {
    pub fn new(symbol: impl Into<String>, current_price: f64, change_24h: f64) -> Self {
        Self {
            symbol: symbol.into(),
            current_price,
            change_24h,
        }
    }
}

/// Wire shape of one entry of CoinGecko `/coins/markets`.
///
/// Both numeric fields are nullable upstream. The conversion into
/// [`CoinSnapshot`] is the single place defaults are applied; internal
/// code never re-checks field presence.
#[derive(Debug, Deserialize)]
pub struct MarketCoin {
    pub symbol: String,

    #[serde(default)]
    pub current_price: Option<f64>,

    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

impl From<MarketCoin> for CoinSnapshot {
    fn from(raw: MarketCoin) -> Self {
        Self {
            symbol: raw.symbol,
            current_price: raw.current_price.unwrap_or(0.0),
            change_24h: raw.price_change_percentage_24h.unwrap_or(0.0),
        }
    }
}

/// Gainers and losers over the last 24 hours, each capped by the caller
#[derive(Clone, Debug, Default)]
pub struct MarketMovers {
    /// Ordered by 24h percent change descending
    pub gainers: Vec<CoinSnapshot>,

    /// Ordered by 24h percent change ascending
    pub losers: Vec<CoinSnapshot>,
}

impl MarketMovers {
    /// True when both lists came back empty (upstream unavailable)
    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty()
    }
}

/// The coin with the largest absolute 24h change.
///
/// Ties resolve to the first occurrence in input order.
pub fn biggest_mover(coins: &[CoinSnapshot]) -> Option<&CoinSnapshot> {
    coins.iter().fold(None, |best, coin| match best {
        Some(current) if coin.change_24h.abs() > current.change_24h.abs() => Some(coin),
        Some(current) => Some(current),
        None => Some(coin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_conversion_defaults_missing_fields() {
        let raw: MarketCoin = serde_json::from_str(r#"{"symbol": "btc"}"#).unwrap();
        let snapshot = CoinSnapshot::from(raw);

        assert_eq!(snapshot.symbol, "btc");
        assert_eq!(snapshot.current_price, 0.0);
        assert_eq!(snapshot.change_24h, 0.0);
    }

    #[test]
    fn test_wire_conversion_null_change() {
        let raw: MarketCoin = serde_json::from_str(
            r#"{"symbol": "eth", "current_price": 3450.2, "price_change_percentage_24h": null}"#,
        )
        .unwrap();
        let snapshot = CoinSnapshot::from(raw);

        assert_eq!(snapshot.current_price, 3450.2);
        assert_eq!(snapshot.change_24h, 0.0);
    }

    #[test]
    fn test_biggest_mover_by_absolute_change() {
        let coins = vec![
            CoinSnapshot::new("btc", 97_500.0, 2.0),
            CoinSnapshot::new("doge", 0.38, -7.0),
            CoinSnapshot::new("sol", 195.0, 6.9),
        ];

        let mover = biggest_mover(&coins).unwrap();
        assert_eq!(mover.symbol, "doge");
        assert_eq!(mover.change_24h, -7.0);
    }

    #[test]
    fn test_biggest_mover_tie_keeps_first() {
        let coins = vec![
            CoinSnapshot::new("btc", 97_500.0, 5.0),
            CoinSnapshot::new("eth", 3_450.0, -5.0),
        ];

        assert_eq!(biggest_mover(&coins).unwrap().symbol, "btc");
    }

    #[test]
    fn test_biggest_mover_empty() {
        assert!(biggest_mover(&[]).is_none());
    }
}
