//! Message Formatter
//!
//! Renders market snapshots and forecast bodies into reply texts. All
//! numeric rendering is deterministic and locale-independent: period
//! decimal separator, comma thousands grouping.

use market_data::{CoinSnapshot, MarketMovers, biggest_mover};

/// Shown whenever a market snapshot comes back empty
pub const MARKET_UNAVAILABLE: &str =
    "⚠️ Временные проблемы с CoinGecko. Попробуй через 30–60 секунд.";

/// Greeting view sent on /start: listing plus the biggest-mover callout
pub fn top_message(coins: &[CoinSnapshot]) -> String {
    if coins.is_empty() {
        return MARKET_UNAVAILABLE.to_string();
    }

    let mut text =
        String::from("Привет! Вот что на рынке прямо сейчас\n\nТоп-10 по капитализации:\n");

    for (i, coin) in coins.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} — {}   {:+.1}% {}\n",
            i + 1,
            coin.symbol.to_uppercase(),
            format_price(coin.current_price),
            coin.change_24h,
            mood_glyph(coin.change_24h)
        ));
    }

    if let Some(mover) = biggest_mover(coins) {
        text.push_str(&format!(
            "\nОбратить внимание: {} изменился на {:+.1}% — самое большое движение!",
            mover.symbol.to_uppercase(),
            mover.change_24h
        ));
    }

    text
}

/// "Курсы" view: plain listing, no glyphs, no callout
pub fn courses_message(coins: &[CoinSnapshot]) -> String {
    if coins.is_empty() {
        return MARKET_UNAVAILABLE.to_string();
    }

    let mut text = String::from("Курсы топ-10:\n\n");
    for (i, coin) in coins.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} — {}   {:+.1}%\n",
            i + 1,
            coin.symbol.to_uppercase(),
            format_price(coin.current_price),
            coin.change_24h
        ));
    }

    text
}

/// "Изменения" view: gainers block then losers block, input order kept
pub fn changes_message(movers: &MarketMovers) -> String {
    if movers.is_empty() {
        return MARKET_UNAVAILABLE.to_string();
    }

    let mut text = String::from("Изменения за 24ч\n\nГейнеры 🔥\n");
    for coin in &movers.gainers {
        text.push_str(&format!(
            "{}  {:+.1}%\n",
            coin.symbol.to_uppercase(),
            coin.change_24h
        ));
    }

    text.push_str("\nЛузеры 📉\n");
    for coin in &movers.losers {
        text.push_str(&format!(
            "{}  {:+.1}%\n",
            coin.symbol.to_uppercase(),
            coin.change_24h
        ));
    }

    text
}

/// "Прогноз" view wrapping whatever the model (or its error path) said
pub fn forecast_message(body: &str) -> String {
    format!("Прогноз на сегодня:\n\n{}", body)
}

/// Gating screen body with the join link
pub fn gate_message(channel_url: &str) -> String {
    format!(
        "👋 Чтобы пользоваться ботом — подпишись на наш канал!\n\n🔗 {}",
        channel_url
    )
}

/// Dollar price: comma-grouped whole dollars above $10, four decimals
/// otherwise. The branch boundary is strictly greater than 10.
fn format_price(price: f64) -> String {
    if price > 10.0 {
        format!("${}", group_thousands(price))
    } else {
        format!("${:.4}", price)
    }
}

/// Round to whole units and insert comma separators
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// 🔥 above +5%, 📉 below -5%, nothing in between (both strict)
fn mood_glyph(change: f64) -> &'static str {
    if change > 5.0 {
        "🔥"
    } else if change < -5.0 {
        "📉"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_data::CoinSnapshot;

    fn sample() -> Vec<CoinSnapshot> {
        vec![
            CoinSnapshot::new("btc", 97_500.0, 2.0),
            CoinSnapshot::new("doge", 0.38, -7.0),
            CoinSnapshot::new("sol", 195.0, 6.9),
        ]
    }

    #[test]
    fn test_top_message_one_line_per_coin_in_order() {
        let text = top_message(&sample());
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1. BTC"));
        assert!(lines[1].starts_with("2. DOGE"));
        assert!(lines[2].starts_with("3. SOL"));
    }

    #[test]
    fn test_top_message_names_biggest_mover() {
        let text = top_message(&sample());
        assert!(text.contains("Обратить внимание: DOGE изменился на -7.0%"));
    }

    #[test]
    fn test_top_message_empty_is_degraded_notice() {
        assert_eq!(top_message(&[]), MARKET_UNAVAILABLE);
        assert_eq!(courses_message(&[]), MARKET_UNAVAILABLE);
    }

    #[test]
    fn test_price_branch_boundary_is_strict() {
        // 10.0 exactly stays on the 4-decimal branch
        assert_eq!(format_price(10.0), "$10.0000");
        assert_eq!(format_price(10.01), "$10");
    }

    #[test]
    fn test_price_grouping() {
        assert_eq!(format_price(97_500.0), "$97,500");
        assert_eq!(format_price(1_234_567.0), "$1,234,567");
        assert_eq!(format_price(0.3812), "$0.3812");
    }

    #[test]
    fn test_change_sign_rendering() {
        let coins = vec![CoinSnapshot::new("btc", 97_500.0, 0.0)];
        assert!(courses_message(&coins).contains("+0.0%"));

        let coins = vec![CoinSnapshot::new("eth", 3_450.0, -5.0)];
        assert!(courses_message(&coins).contains("-5.0%"));
    }

    #[test]
    fn test_glyph_boundaries_are_strict() {
        assert_eq!(mood_glyph(5.0), "");
        assert_eq!(mood_glyph(5.1), "🔥");
        assert_eq!(mood_glyph(-5.0), "");
        assert_eq!(mood_glyph(-5.1), "📉");
        assert_eq!(mood_glyph(0.0), "");
    }

    #[test]
    fn test_changes_message_block_order_and_caps() {
        let movers = MarketMovers {
            gainers: (0..10)
                .map(|i| CoinSnapshot::new(format!("g{i}"), 1.0, 10.0 - i as f64))
                .collect(),
            losers: (0..10)
                .map(|i| CoinSnapshot::new(format!("l{i}"), 1.0, -10.0 + i as f64))
                .collect(),
        };

        let text = changes_message(&movers);
        let gainers_at = text.find("Гейнеры").unwrap();
        let losers_at = text.find("Лузеры").unwrap();
        assert!(gainers_at < losers_at);

        // Input order preserved, no re-sorting
        assert!(text.find("G0").unwrap() < text.find("G9").unwrap());

        let gainer_lines = text[gainers_at..losers_at]
            .lines()
            .filter(|line| line.starts_with('G'))
            .count();
        assert_eq!(gainer_lines, 10);

        let loser_lines = text[losers_at..]
            .lines()
            .filter(|line| line.starts_with('L'))
            .count();
        assert_eq!(loser_lines, 10);
    }

    #[test]
    fn test_changes_message_empty_is_degraded_notice() {
        assert_eq!(changes_message(&MarketMovers::default()), MARKET_UNAVAILABLE);
    }

    #[test]
    fn test_forecast_wrapping() {
        let text = forecast_message("Рынок спокоен.");
        assert!(text.starts_with("Прогноз на сегодня:\n\n"));
        assert!(text.ends_with("Рынок спокоен."));
    }
}
