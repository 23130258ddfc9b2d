//! Price normalization flow.
//!
//! Fetches the upstream JSON document once per request and converts the
//! configured instrument entries into a [`PriceSnapshot`]. The snapshot is
//! all-or-nothing: a missing instrument or missing `p`/`ts` sub-field fails
//! the whole run, while garbage *inside* a present field degrades to a safe
//! default (0.0 for the number, normalization wall-clock for the timestamp).

use std::sync::Arc;

use serde_json::Value;

use crate::config::AggregationConfig;
use crate::domain::{InstrumentQuote, PriceSnapshot, Unit, UtcDateTime};
use crate::error::PriceError;
use crate::http_client::{HttpClient, HttpRequest};

/// Fetch the configured price endpoint and normalize the response.
pub async fn fetch_snapshot(
    http: &Arc<dyn HttpClient>,
    config: &AggregationConfig,
) -> Result<PriceSnapshot, PriceError> {
    let response = http.execute(HttpRequest::get(&config.price_url)).await?;
    if !response.is_success() {
        return Err(PriceError::Status {
            status: response.status,
        });
    }
    normalize(&response.body, config, UtcDateTime::now())
}

/// Normalize one upstream document into a snapshot.
///
/// Pure apart from the injected `now`, which becomes both the snapshot's
/// `fetched_at` and the fallback for malformed per-instrument timestamps.
pub fn normalize(
    body: &str,
    config: &AggregationConfig,
    now: UtcDateTime,
) -> Result<PriceSnapshot, PriceError> {
    let document: Value = serde_json::from_str(body)?;
    let current = document
        .get("current")
        .and_then(Value::as_object)
        .ok_or(PriceError::MissingSection)?;

    let mut quotes = Vec::with_capacity(config.instruments.len());
    for spec in &config.instruments {
        let entry = current.get(&spec.key).ok_or_else(|| missing(&spec.key))?;
        let raw = entry
            .get("p")
            .and_then(Value::as_str)
            .ok_or_else(|| missing(&spec.key))?;
        let ts = entry
            .get("ts")
            .and_then(Value::as_str)
            .ok_or_else(|| missing(&spec.key))?;

        let mut value = parse_price(raw);
        if spec.unit == Unit::Toman {
            // Upstream quotes local instruments in rials.
            value /= 10.0;
        }

        quotes.push(InstrumentQuote {
            label: spec.label.clone(),
            raw_value: raw.to_owned(),
            value,
            unit: spec.unit,
            observed_at: UtcDateTime::parse_upstream(ts).unwrap_or(now),
        });
    }

    Ok(PriceSnapshot {
        fetched_at: now,
        quotes,
    })
}

fn missing(key: &str) -> PriceError {
    PriceError::MissingField {
        key: key.to_owned(),
    }
}

/// Strip thousands commas and parse. Anything that still does not parse, or
/// parses negative, degrades to 0.0 instead of failing the snapshot.
fn parse_price(raw: &str) -> f64 {
    raw.replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}
