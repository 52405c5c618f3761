//! Conversation Handlers
//!
//! The dispatch layer: a command or button press comes in, the
//! subscription gate runs, data is fetched and formatted, and the
//! reply goes out as a new message or an in-place edit with the main
//! menu attached. Subscription is re-checked on every gated action;
//! nothing is trusted across updates.

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::format;
use crate::menu::{self, MenuAction};
use crate::state::AppState;

/// Coins shown per listing
const LISTING_LIMIT: usize = 10;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Show the main menu
    Start,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: AppState,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => start(bot, msg, state).await,
    }
}

/// Entry point: gating screen for strangers, market overview for members
async fn start(bot: Bot, msg: Message, state: AppState) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    if !state.gate.is_subscribed(user.id).await {
        bot.send_message(
            msg.chat.id,
            format::gate_message(state.config.channel_url.as_str()),
        )
        .reply_markup(menu::gate_keyboard(&state.config.channel_url))
        .await?;
        return Ok(());
    }

    let coins = state.market.top_by_market_cap(LISTING_LIMIT).await;
    bot.send_message(msg.chat.id, format::top_message(&coins))
        .reply_markup(menu::main_keyboard())
        .await?;

    Ok(())
}

pub async fn handle_callback(bot: Bot, q: CallbackQuery, state: AppState) -> ResponseResult<()> {
    let Some(action) = q.data.as_deref().and_then(MenuAction::parse) else {
        // Stale or foreign payload; just stop the button spinner.
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    match action {
        MenuAction::ConfirmSubscription => confirm_subscription(bot, q, state).await,
        MenuAction::Courses | MenuAction::Changes | MenuAction::Forecast => {
            menu_action(bot, q, state, action).await
        }
    }
}

/// "I've subscribed" pressed on the gating screen: re-check and either
/// swap the message to the main menu or keep the gate up
async fn confirm_subscription(bot: Bot, q: CallbackQuery, state: AppState) -> ResponseResult<()> {
    if state.gate.is_subscribed(q.from.id).await {
        if let Some(message) = q.message.as_ref() {
            let coins = state.market.top_by_market_cap(LISTING_LIMIT).await;
            bot.edit_message_text(message.chat.id, message.id, format::top_message(&coins))
                .reply_markup(menu::main_keyboard())
                .await?;
        }
        bot.answer_callback_query(q.id)
            .text("✅ Подписка подтверждена!")
            .await?;
    } else {
        bot.answer_callback_query(q.id)
            .text("❌ Ты ещё не подписался")
            .show_alert(true)
            .await?;
    }

    Ok(())
}

/// A main-menu button: re-validate the gate, then fetch, format and
/// edit the message in place
async fn menu_action(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
    action: MenuAction,
) -> ResponseResult<()> {
    if !state.gate.is_subscribed(q.from.id).await {
        bot.answer_callback_query(q.id)
            .text("❌ Сначала подпишись на канал!")
            .show_alert(true)
            .await?;
        return Ok(());
    }

    let text = match action {
        MenuAction::Courses => {
            let coins = state.market.top_by_market_cap(LISTING_LIMIT).await;
            format::courses_message(&coins)
        }
        MenuAction::Changes => {
            let movers = state.market.movers_24h(LISTING_LIMIT).await;
            format::changes_message(&movers)
        }
        MenuAction::Forecast => {
            let body = state.forecast.request_forecast().await;
            format::forecast_message(&body)
        }
        // Routed to confirm_subscription before we get here
        MenuAction::ConfirmSubscription => return Ok(()),
    };

    if let Some(message) = q.message.as_ref() {
        bot.edit_message_text(message.chat.id, message.id, text)
            .reply_markup(menu::main_keyboard())
            .await?;
    }
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
