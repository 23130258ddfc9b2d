//! Access gate and free-text routing.
//!
//! Both aggregation flows share a single precondition: the requesting user
//! must be a confirmed member of the configured channel. The check is
//! recomputed on every request and fails closed; an unreachable membership
//! oracle must never bypass the gate.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AggregationConfig;
use crate::domain::{MembershipDecision, UtcDateTime};
use crate::error::MembershipError;

/// Membership status as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMemberStatus {
    Member,
    Creator,
    Administrator,
    Restricted,
    Left,
    Kicked,
}

impl ChatMemberStatus {
    /// Only active membership grants access; restricted and departed users
    /// are treated the same as strangers.
    pub const fn grants_access(self) -> bool {
        matches!(self, Self::Member | Self::Creator | Self::Administrator)
    }
}

/// External membership-check collaborator.
pub trait MembershipOracle: Send + Sync {
    fn member_status<'a>(
        &'a self,
        user_id: i64,
        channel: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ChatMemberStatus, MembershipError>> + Send + 'a>>;
}

/// Gate consulted before either aggregation flow runs.
pub struct Gate {
    oracle: Arc<dyn MembershipOracle>,
    channel: String,
}

impl Gate {
    pub fn new(oracle: Arc<dyn MembershipOracle>, channel: impl Into<String>) -> Self {
        Self {
            oracle,
            channel: channel.into(),
        }
    }

    /// Check the user against the channel. Oracle failures deny access.
    pub async fn authorize(&self, user_id: i64) -> MembershipDecision {
        let allowed = match self.oracle.member_status(user_id, &self.channel).await {
            Ok(status) => status.grants_access(),
            Err(error) => {
                tracing::warn!(user_id, error = %error, "membership check failed, denying");
                false
            }
        };
        MembershipDecision {
            user_id,
            allowed,
            checked_at: UtcDateTime::now(),
        }
    }
}

/// Which flow a free-text message resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Price,
    News,
    Unrecognized,
}

/// Classify a free-text message by substring containment.
///
/// News triggers are checked first so a message mentioning both news and a
/// price keyword ("اخبار دلار") routes to the news flow.
pub fn classify(text: &str, config: &AggregationConfig) -> Intent {
    let trimmed = text.trim();
    if config
        .news_triggers
        .iter()
        .any(|trigger| trimmed.contains(trigger.as_str()))
    {
        return Intent::News;
    }
    if config
        .price_triggers
        .iter()
        .any(|trigger| trimmed.contains(trigger.as_str()))
    {
        return Intent::Price;
    }
    Intent::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_membership_grants_access() {
        assert!(ChatMemberStatus::Member.grants_access());
        assert!(ChatMemberStatus::Creator.grants_access());
        assert!(ChatMemberStatus::Administrator.grants_access());
        assert!(!ChatMemberStatus::Restricted.grants_access());
        assert!(!ChatMemberStatus::Left.grants_access());
        assert!(!ChatMemberStatus::Kicked.grants_access());
    }

    #[test]
    fn news_triggers_take_priority_over_price_triggers() {
        let config = AggregationConfig::persian_market();
        assert_eq!(classify("اخبار دلار", &config), Intent::News);
        assert_eq!(classify("قیمت سکه چنده؟", &config), Intent::Price);
        assert_eq!(classify("سلام", &config), Intent::Unrecognized);
    }
}
