//! Menu Actions & Keyboards
//!
//! The callback payload namespace is a closed enum, so dispatch in the
//! callback handler stays exhaustive and unknown payloads are dropped
//! at the parse step.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

/// Everything a button press can ask for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Plain top-10 price listing
    Courses,
    /// 24h gainers and losers
    Changes,
    /// LLM market forecast
    Forecast,
    /// "I've subscribed" re-check from the gating screen
    ConfirmSubscription,
}

impl MenuAction {
    /// Wire form carried in the callback payload
    pub fn as_callback(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Changes => "changes",
            Self::Forecast => "forecast",
            Self::ConfirmSubscription => "check_sub",
        }
    }

    /// Parse a callback payload; unknown payloads are `None`
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "courses" => Some(Self::Courses),
            "changes" => Some(Self::Changes),
            "forecast" => Some(Self::Forecast),
            "check_sub" => Some(Self::ConfirmSubscription),
            _ => None,
        }
    }
}

/// Persistent main menu attached to every active-state reply
pub fn main_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("Курсы", MenuAction::Courses.as_callback()),
            InlineKeyboardButton::callback("Изменения", MenuAction::Changes.as_callback()),
        ],
        vec![InlineKeyboardButton::callback(
            "Прогноз",
            MenuAction::Forecast.as_callback(),
        )],
    ])
}

/// Gating screen: join link plus the re-check button
pub fn gate_keyboard(channel_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            "Подписаться на канал",
            channel_url.clone(),
        )],
        vec![InlineKeyboardButton::callback(
            "Я подписался ✅",
            MenuAction::ConfirmSubscription.as_callback(),
        )],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_round_trip() {
        for action in [
            MenuAction::Courses,
            MenuAction::Changes,
            MenuAction::Forecast,
            MenuAction::ConfirmSubscription,
        ] {
            assert_eq!(MenuAction::parse(action.as_callback()), Some(action));
        }
    }

    #[test]
    fn test_unknown_payload_is_none() {
        assert_eq!(MenuAction::parse("stale_button"), None);
        assert_eq!(MenuAction::parse(""), None);
    }

    #[test]
    fn test_main_keyboard_layout() {
        let keyboard = main_keyboard();

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2);
        assert_eq!(keyboard.inline_keyboard[1].len(), 1);
    }
}
