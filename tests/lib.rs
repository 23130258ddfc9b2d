// Shared doubles and fixtures for the behavior tests.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub use rialtick_core::{
    AggregationConfig, AggregationService, ChatMemberStatus, FeedSpec, Gate, InstrumentSpec,
    MembershipError, MembershipOracle, NewsAggregator, Reply, Unit,
};
use rialtick_core::{HttpClient, HttpError, HttpRequest, HttpResponse};
pub use std::sync::Arc;

pub const PRICE_URL: &str = "https://price.example.test/ajax.json";
pub const FEED_A: &str = "https://a.example.test/rss";
pub const FEED_B: &str = "https://b.example.test/rss";
pub const FEED_C: &str = "https://c.example.test/rss";

/// Transport double answering from a per-URL script. Unknown URLs fail the
/// way a dead host would.
#[derive(Default)]
pub struct ScriptedHttpClient {
    responses: HashMap<String, Result<HttpResponse, HttpError>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses
            .insert(url.to_owned(), Ok(HttpResponse::ok(body)));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(
            url.to_owned(),
            Ok(HttpResponse {
                status,
                body: String::new(),
            }),
        );
        self
    }

    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.responses
            .insert(url.to_owned(), Err(HttpError::new(message)));
        self
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let result = self
            .responses
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Err(HttpError::new(format!("no route to {}", request.url))));
        Box::pin(async move { result })
    }
}

/// Oracle double with a fixed answer; `None` simulates a raised error.
pub struct FixedOracle {
    status: Option<ChatMemberStatus>,
}

impl FixedOracle {
    pub fn reporting(status: ChatMemberStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn failing() -> Self {
        Self { status: None }
    }
}

impl MembershipOracle for FixedOracle {
    fn member_status<'a>(
        &'a self,
        _user_id: i64,
        _channel: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ChatMemberStatus, MembershipError>> + Send + 'a>> {
        let status = self.status;
        Box::pin(async move {
            status.ok_or_else(|| MembershipError::new("membership backend unreachable"))
        })
    }
}

/// Three-source config against scripted hosts: two topic feeds and one
/// filtered general feed, two headlines each.
pub fn test_config() -> AggregationConfig {
    AggregationConfig {
        price_url: String::from(PRICE_URL),
        instruments: vec![
            InstrumentSpec::new("price_dollar_rl", "دلار", Unit::Toman),
            InstrumentSpec::new("ons", "انس طلا", Unit::Usd),
        ],
        feeds: vec![
            FeedSpec::new("SourceA", FEED_A, 2, false),
            FeedSpec::new("SourceB", FEED_B, 2, false),
            FeedSpec::new("SourceC", FEED_C, 2, true),
        ],
        economy_keywords: vec![String::from("اقتصاد"), String::from("دلار")],
        news_triggers: vec![String::from("اخبار")],
        price_triggers: vec![String::from("دلار"), String::from("قیمت")],
        channel: String::from("@testchannel"),
    }
}

pub fn rss(items: &[(&str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(title, link)| format!("<item><title>{title}</title><link>{link}</link></item>"))
        .collect();
    format!("<rss><channel><title>ch</title>{body}</channel></rss>")
}

pub fn price_document() -> &'static str {
    r#"{
        "current": {
            "price_dollar_rl": { "p": "1,234,560", "ts": "2024-05-01 12:34:56" },
            "ons": { "p": "1,950.55", "ts": "2024-05-01 12:00:00" }
        }
    }"#
}
