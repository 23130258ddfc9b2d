use std::future::Future;
use std::pin::Pin;

use rialtick_core::{ChatMemberStatus, MembershipError, MembershipOracle};

/// Oracle for terminal use: whoever runs the binary operates it, so every
/// check reports active membership. The real bot wires a platform-backed
/// oracle here instead.
pub struct TerminalOracle;

impl MembershipOracle for TerminalOracle {
    fn member_status<'a>(
        &'a self,
        _user_id: i64,
        _channel: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ChatMemberStatus, MembershipError>> + Send + 'a>> {
        Box::pin(async move { Ok(ChatMemberStatus::Member) })
    }
}
