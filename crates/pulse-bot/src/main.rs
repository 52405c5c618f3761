//! pulse-bot
//!
//! Subscription-gated Telegram bot: CoinGecko market snapshots plus an
//! optional LLM market forecast. Updates are handled as independent
//! tasks by the dispatcher; each handler awaits its upstream calls
//! sequentially and converts every failure into a degraded reply.

mod config;
mod format;
mod gate;
mod handlers;
mod menu;
mod state;

use std::sync::Arc;

use teloxide::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forecast::ForecastClient;
use market_data::CoinGeckoClient;

use crate::config::BotConfig;
use crate::gate::SubscriptionGate;
use crate::handlers::{Command, handle_callback, handle_command};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Arc::new(BotConfig::from_env()?);
    let bot = Bot::new(config.bot_token.clone());

    if config.require_subscription {
        tracing::info!(channel = %config.required_channel, "subscription gating enabled");
    } else {
        tracing::warn!("subscription gating disabled (REQUIRE_SUBSCRIPTION=off)");
    }

    if config.groq_api_key.is_some() {
        tracing::info!(model = %config.forecast_model, "forecast feature enabled");
    } else {
        tracing::warn!("GROQ_API_KEY not set - forecast replies will explain the missing credential");
    }

    let gate = SubscriptionGate::new(
        bot.clone(),
        config.required_channel.clone(),
        config.require_subscription,
    );

    let state = AppState {
        market: Arc::new(CoinGeckoClient::new()?),
        forecast: Arc::new(ForecastClient::new(
            config.groq_api_key.clone(),
            config.forecast_model.clone(),
        )?),
        gate,
        config: config.clone(),
    };

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    tracing::info!("pulse-bot starting long polling");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
