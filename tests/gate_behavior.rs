//! Behavior-driven tests for the access gate.
//!
//! The gate is the sole precondition for both flows and must fail closed:
//! an unreachable membership backend denies, it never allows.

use rialtick_tests::*;

fn gate(oracle: FixedOracle) -> Gate {
    Gate::new(Arc::new(oracle), "@testchannel")
}

#[tokio::test]
async fn active_membership_statuses_are_allowed() {
    for status in [
        ChatMemberStatus::Member,
        ChatMemberStatus::Creator,
        ChatMemberStatus::Administrator,
    ] {
        let decision = gate(FixedOracle::reporting(status)).authorize(42).await;
        assert!(decision.allowed, "{status:?} must be allowed");
        assert_eq!(decision.user_id, 42);
    }
}

#[tokio::test]
async fn departed_or_restricted_statuses_are_denied() {
    for status in [
        ChatMemberStatus::Left,
        ChatMemberStatus::Kicked,
        ChatMemberStatus::Restricted,
    ] {
        let decision = gate(FixedOracle::reporting(status)).authorize(42).await;
        assert!(!decision.allowed, "{status:?} must be denied");
    }
}

#[tokio::test]
async fn an_oracle_failure_denies_instead_of_allowing() {
    let decision = gate(FixedOracle::failing()).authorize(42).await;
    assert!(!decision.allowed);
}

#[tokio::test]
async fn a_denied_user_never_reaches_either_pipeline() {
    // Given: a transport that would answer price and news requests
    let http = ScriptedHttpClient::new()
        .ok(PRICE_URL, price_document())
        .ok(FEED_A, rss(&[("تیتر", "https://a/1")]));
    let service = AggregationService::new(
        test_config(),
        Arc::new(http),
        Arc::new(FixedOracle::reporting(ChatMemberStatus::Left)),
    );

    // Then: every entry point short-circuits at the gate
    assert_eq!(service.handle_price(42).await, Reply::MembershipRequired);
    assert_eq!(service.handle_news(42).await, Reply::MembershipRequired);
    assert_eq!(
        service.handle_text(42, "قیمت دلار").await,
        Reply::MembershipRequired
    );
}

#[tokio::test]
async fn a_failing_oracle_blocks_the_pipelines_too() {
    let http = ScriptedHttpClient::new().ok(PRICE_URL, price_document());
    let service = AggregationService::new(
        test_config(),
        Arc::new(http),
        Arc::new(FixedOracle::failing()),
    );

    assert_eq!(service.handle_price(42).await, Reply::MembershipRequired);
}
