//! Subscription Gate
//!
//! Fail-closed channel membership check. A lookup failure (network
//! error, user never interacted with the channel) counts as "not
//! subscribed"; the underlying error never reaches the user.

use teloxide::prelude::*;
use teloxide::types::{ChatMemberStatus, Recipient, UserId};

/// Membership check against the required channel
#[derive(Clone)]
pub struct SubscriptionGate {
    bot: Bot,
    channel: Recipient,
    required: bool,
}

impl SubscriptionGate {
    /// `required = false` turns the gate into a pass-through (the
    /// ungated bot variant, kept as an explicit toggle).
    pub fn new(bot: Bot, channel: impl Into<String>, required: bool) -> Self {
        Self {
            bot,
            channel: Recipient::ChannelUsername(channel.into()),
            required,
        }
    }

    /// Whether `user` may use the bot right now.
    ///
    /// Re-checked on every gated action; no result is cached between
    /// updates.
    pub async fn is_subscribed(&self, user: UserId) -> bool {
        if !self.required {
            return true;
        }

        match self.bot.get_chat_member(self.channel.clone(), user).await {
            Ok(member) => grants_access(member.status()),
            Err(err) => {
                tracing::warn!(user = %user, error = %err, "membership lookup failed, treating as not subscribed");
                false
            }
        }
    }
}

/// Channel roles that count as subscribed
fn grants_access(status: ChatMemberStatus) -> bool {
    matches!(
        status,
        ChatMemberStatus::Member | ChatMemberStatus::Administrator | ChatMemberStatus::Owner
    )
}
