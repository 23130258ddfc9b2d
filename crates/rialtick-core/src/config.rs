//! Process-wide aggregation configuration.
//!
//! Built once at startup and injected into every pipeline call; nothing in
//! the core mutates it afterwards. [`AggregationConfig::persian_market`]
//! carries the production constants (tgju endpoint, the three agency feeds,
//! keyword lists).

use serde::{Deserialize, Serialize};

use crate::domain::Unit;

/// One instrument tracked by the price flow: the upstream JSON key, the
/// label it renders under, and its display unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    pub key: String,
    pub label: String,
    pub unit: Unit,
}

impl InstrumentSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, unit: Unit) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit,
        }
    }
}

/// One RSS source consumed by the news flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSpec {
    pub name: String,
    pub url: String,
    /// Maximum headlines this source contributes to a digest.
    pub per_source_limit: usize,
    /// General feeds carry everything the agency publishes and need the
    /// economy keyword filter; topic-specific feeds are trusted as-is.
    pub filtered: bool,
}

impl FeedSpec {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        per_source_limit: usize,
        filtered: bool,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            per_source_limit,
            filtered,
        }
    }
}

/// Immutable configuration for both aggregation flows and the routing gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// tgju-style JSON endpoint: `{ "current": { <key>: { "p", "ts" } } }`.
    pub price_url: String,
    /// Instrument order here is the snapshot's quote order.
    pub instruments: Vec<InstrumentSpec>,
    /// Feed order here is the digest's source order.
    pub feeds: Vec<FeedSpec>,
    /// Substrings a title must contain to pass the filter on `filtered` feeds.
    pub economy_keywords: Vec<String>,
    /// Free-text substrings that route a message to the news flow.
    /// Checked before price triggers.
    pub news_triggers: Vec<String>,
    /// Free-text substrings that route a message to the price flow.
    pub price_triggers: Vec<String>,
    /// Channel the membership oracle is asked about.
    pub channel: String,
}

impl AggregationConfig {
    /// Production configuration for the Iranian free-market bot.
    pub fn persian_market() -> Self {
        Self {
            price_url: String::from("https://call5.tgju.org/ajax.json"),
            instruments: vec![
                InstrumentSpec::new("price_dollar_rl", "قیمت لحظه‌ای دلار", Unit::Toman),
                InstrumentSpec::new("sekee_real", "سکه امامی", Unit::Toman),
                InstrumentSpec::new("ons", "انس طلا جهانی", Unit::Usd),
            ],
            feeds: vec![
                FeedSpec::new(
                    "Tasnim",
                    "https://www.tasnimnews.com/fa/rss/feed/0/7/77/اقتصاد-ایران",
                    3,
                    false,
                ),
                FeedSpec::new("ISNA", "https://www.isna.ir/rss/tp/34", 3, false),
                // General firehose feed; only economic headlines survive.
                FeedSpec::new("IRNA", "https://www.irna.ir/rss", 3, true),
            ],
            economy_keywords: [
                "اقتصاد", "اقتصادی", "بانک", "ارز", "پول", "بورس", "سکه", "دلار",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            news_triggers: vec![String::from("اخبار")],
            price_triggers: ["دلار", "سکه", "طلا", "ارز", "قیمت"]
                .into_iter()
                .map(String::from)
                .collect(),
            channel: String::from("@sarasoo"),
        }
    }

    /// Hard upper bound on digest length regardless of feed contents.
    pub fn digest_cap(&self) -> usize {
        self.feeds.iter().map(|feed| feed.per_source_limit).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_config_caps_digest_at_nine() {
        let config = AggregationConfig::persian_market();
        assert_eq!(config.digest_cap(), 9);
        assert_eq!(config.instruments.len(), 3);
    }

    #[test]
    fn only_the_general_feed_is_filtered() {
        let config = AggregationConfig::persian_market();
        let filtered: Vec<&str> = config
            .feeds
            .iter()
            .filter(|feed| feed.filtered)
            .map(|feed| feed.name.as_str())
            .collect();
        assert_eq!(filtered, vec!["IRNA"]);
    }
}
