//! Core aggregation pipeline for rialtick.
//!
//! This crate contains:
//! - Normalized domain models for instrument quotes and news headlines
//! - The price normalization flow against the tgju-style JSON upstream
//! - The per-source-isolated RSS news aggregation flow
//! - The fail-closed membership gate and free-text intent routing
//! - An HTTP transport abstraction with a reqwest production client
//!
//! The chat transport, command syntax, and credential loading live outside
//! this crate; it is stateless between requests and caches nothing.

pub mod config;
pub mod domain;
pub mod error;
pub mod freshness;
pub mod gate;
pub mod http_client;
pub mod news;
pub mod prices;
pub mod service;

pub use config::{AggregationConfig, FeedSpec, InstrumentSpec};
pub use domain::{
    Headline, InstrumentQuote, MembershipDecision, NewsDigest, PriceSnapshot, Unit, UtcDateTime,
};
pub use error::{FeedError, MembershipError, PriceError};
pub use freshness::format_age;
pub use gate::{classify, ChatMemberStatus, Gate, Intent, MembershipOracle};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use news::NewsAggregator;
pub use service::{AggregationService, Reply};
