//! Request orchestration: gate, route, run the matching flow.

use std::sync::Arc;

use crate::config::AggregationConfig;
use crate::domain::{NewsDigest, PriceSnapshot};
use crate::gate::{classify, Gate, Intent, MembershipOracle};
use crate::http_client::HttpClient;
use crate::news::NewsAggregator;
use crate::prices;

/// Outcome of one inbound request, ready for the dispatcher to render.
///
/// Hard failures collapse into [`Reply::Unavailable`]; the raw error never
/// crosses this boundary, so the dispatcher can only show its generic
/// localized "try again later" message.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Prices(PriceSnapshot),
    News(NewsDigest),
    MembershipRequired,
    Unrecognized,
    Unavailable,
}

/// Ties the gate and both aggregation flows together behind one entry point.
///
/// Holds no per-request state; every call builds its result from scratch.
pub struct AggregationService {
    config: Arc<AggregationConfig>,
    http: Arc<dyn HttpClient>,
    gate: Gate,
}

impl AggregationService {
    pub fn new(
        config: AggregationConfig,
        http: Arc<dyn HttpClient>,
        oracle: Arc<dyn MembershipOracle>,
    ) -> Self {
        let channel = config.channel.clone();
        Self {
            config: Arc::new(config),
            http,
            gate: Gate::new(oracle, channel),
        }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Handle a free-text message: gate first, then keyword routing.
    pub async fn handle_text(&self, user_id: i64, text: &str) -> Reply {
        if !self.gate.authorize(user_id).await.allowed {
            return Reply::MembershipRequired;
        }
        match classify(text, &self.config) {
            Intent::News => Reply::News(self.news().await),
            Intent::Price => self.price_reply().await,
            Intent::Unrecognized => Reply::Unrecognized,
        }
    }

    /// Handle an explicit price command (already routed by the dispatcher).
    pub async fn handle_price(&self, user_id: i64) -> Reply {
        if !self.gate.authorize(user_id).await.allowed {
            return Reply::MembershipRequired;
        }
        self.price_reply().await
    }

    /// Handle an explicit news command.
    pub async fn handle_news(&self, user_id: i64) -> Reply {
        if !self.gate.authorize(user_id).await.allowed {
            return Reply::MembershipRequired;
        }
        Reply::News(self.news().await)
    }

    async fn price_reply(&self) -> Reply {
        match prices::fetch_snapshot(&self.http, &self.config).await {
            Ok(snapshot) => Reply::Prices(snapshot),
            Err(error) => {
                tracing::error!(%error, "price flow failed");
                Reply::Unavailable
            }
        }
    }

    async fn news(&self) -> NewsDigest {
        NewsAggregator::new(Arc::clone(&self.http), Arc::clone(&self.config))
            .digest()
            .await
    }
}
