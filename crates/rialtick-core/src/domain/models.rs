use serde::{Deserialize, Serialize};

use crate::domain::UtcDateTime;

/// Display unit an instrument is quoted in.
///
/// Upstream quotes local instruments in rials (the minor unit); those are
/// divided by 10 into tomans before display. Hard-currency instruments are
/// already in USD and pass through unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Toman,
    Usd,
}

/// One normalized instrument value.
///
/// Never mutated after construction; built fresh on every request and
/// discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentQuote {
    pub label: String,
    /// Raw price string exactly as the upstream sent it.
    pub raw_value: String,
    /// Converted numeric value; 0.0 when the raw string did not parse.
    pub value: f64,
    pub unit: Unit,
    pub observed_at: UtcDateTime,
}

impl InstrumentQuote {
    /// Render the value with a fixed thousands-separator convention,
    /// independent of process locale. USD gets two decimals, toman renders
    /// as a grouped integer.
    pub fn display_value(&self) -> String {
        match self.unit {
            Unit::Usd => group_with_decimals(self.value),
            Unit::Toman => group_integer(self.value),
        }
    }
}

/// Complete set of instrument quotes from one normalization run.
///
/// All-or-nothing: if any configured instrument were missing upstream, the
/// snapshot would not have been constructed at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Wall-clock time of normalization, not derived from upstream.
    pub fetched_at: UtcDateTime,
    /// Quotes in configured instrument order.
    pub quotes: Vec<InstrumentQuote>,
}

impl PriceSnapshot {
    pub fn get(&self, label: &str) -> Option<&InstrumentQuote> {
        self.quotes.iter().find(|quote| quote.label == label)
    }

    /// Most recent per-instrument observation, used for the freshness line.
    pub fn last_observed_at(&self) -> Option<UtcDateTime> {
        self.quotes.iter().map(|quote| quote.observed_at).max()
    }
}

/// One news headline attributed to its source feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub link: String,
    pub source: String,
}

/// Merged, capped, filtered headlines from one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsDigest {
    pub headlines: Vec<Headline>,
}

impl NewsDigest {
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.headlines.len()
    }
}

/// Outcome of one membership check. Recomputed on every request; membership
/// can change at any moment so a cached decision would be a stale gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipDecision {
    pub user_id: i64,
    pub allowed: bool,
    pub checked_at: UtcDateTime,
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn group_integer(value: f64) -> String {
    group_digits(&format!("{}", value.trunc() as i64))
}

fn group_with_decimals(value: f64) -> String {
    let rendered = format!("{value:.2}");
    match rendered.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_digits(integer)),
        None => group_digits(&rendered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(value: f64, unit: Unit) -> InstrumentQuote {
        InstrumentQuote {
            label: String::from("x"),
            raw_value: String::new(),
            value,
            unit,
            observed_at: UtcDateTime::from_unix(1_700_000_000),
        }
    }

    #[test]
    fn toman_renders_as_grouped_integer() {
        assert_eq!(quote(123_456.0, Unit::Toman).display_value(), "123,456");
        assert_eq!(quote(950.9, Unit::Toman).display_value(), "950");
        assert_eq!(quote(0.0, Unit::Toman).display_value(), "0");
    }

    #[test]
    fn usd_renders_with_two_decimals_and_grouping() {
        assert_eq!(quote(1_950.55, Unit::Usd).display_value(), "1,950.55");
        assert_eq!(quote(2_000.0, Unit::Usd).display_value(), "2,000.00");
        assert_eq!(quote(5.5, Unit::Usd).display_value(), "5.50");
    }

    #[test]
    fn snapshot_reports_most_recent_observation() {
        let older = UtcDateTime::from_unix(1_700_000_000);
        let newer = UtcDateTime::from_unix(1_700_000_600);
        let snapshot = PriceSnapshot {
            fetched_at: UtcDateTime::now(),
            quotes: vec![
                InstrumentQuote {
                    observed_at: newer,
                    ..quote(1.0, Unit::Toman)
                },
                InstrumentQuote {
                    observed_at: older,
                    ..quote(2.0, Unit::Usd)
                },
            ],
        };

        assert_eq!(snapshot.last_observed_at(), Some(newer));
    }
}
