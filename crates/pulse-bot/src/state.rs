//! Application State

use std::sync::Arc;

use forecast::ForecastClient;
use market_data::MarketDataApi;

use crate::config::BotConfig;
use crate::gate::SubscriptionGate;

/// Shared application state, constructed once at startup
#[derive(Clone)]
pub struct AppState {
    /// Market data source (CoinGecko in production, mock in tests)
    pub market: Arc<dyn MarketDataApi>,

    /// Forecast client (degrades gracefully without a credential)
    pub forecast: Arc<ForecastClient>,

    /// Subscription gate over the required channel
    pub gate: SubscriptionGate,

    /// Static configuration
    pub config: Arc<BotConfig>,
}
