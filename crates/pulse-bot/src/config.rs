//! Configuration
//!
//! Single validation point for environment configuration. Everything
//! the bot needs is read once at startup and carried explicitly in
//! [`BotConfig`]; there are no ambient singletons.

use anyhow::Context;
use url::Url;

const DEFAULT_CHANNEL: &str = "@bot_pro_bot_you";
const DEFAULT_CHANNEL_URL: &str = "https://t.me/bot_pro_bot_you";

/// Static bot configuration
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Telegram Bot API token
    pub bot_token: String,

    /// Groq API key; `None` degrades the forecast feature gracefully
    pub groq_api_key: Option<String>,

    /// Channel whose members may use the bot (e.g. "@my_channel")
    pub required_channel: String,

    /// Join link shown on the gating screen
    pub channel_url: Url,

    /// Disable to run without the subscription requirement
    pub require_subscription: bool,

    /// Chat-completions model used for forecasts
    pub forecast_model: String,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bot_token =
            std::env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN is not set")?;

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let required_channel = env_or("REQUIRED_CHANNEL", DEFAULT_CHANNEL);
        let channel_url = env_or("CHANNEL_URL", DEFAULT_CHANNEL_URL)
            .parse::<Url>()
            .context("CHANNEL_URL is not a valid URL")?;

        let require_subscription =
            parse_toggle(std::env::var("REQUIRE_SUBSCRIPTION").ok().as_deref());

        let forecast_model = env_or("FORECAST_MODEL", forecast::DEFAULT_MODEL);

        Ok(Self {
            bot_token,
            groq_api_key,
            required_channel,
            channel_url,
            require_subscription,
            forecast_model,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Gating defaults to on; only an explicit opt-out disables it
fn parse_toggle(value: Option<&str>) -> bool {
    match value {
        Some(raw) => !matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "0" | "false" | "off" | "no"
        ),
        None => true,
    }
}
