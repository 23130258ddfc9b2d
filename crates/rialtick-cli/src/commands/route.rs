use rialtick_core::AggregationService;

use crate::error::CliError;
use crate::progress::{ProgressIndicator, StderrProgress};
use crate::render;

pub async fn run(service: &AggregationService, user_id: i64, text: &str) -> Result<String, CliError> {
    if text.trim().is_empty() {
        return Err(CliError::Command(String::from(
            "route requires a non-empty message text",
        )));
    }

    let progress = StderrProgress;
    let handle = progress.show("⏳ در حال پردازش پیام...");
    let reply = service.handle_text(user_id, text).await;
    progress.dismiss(handle);
    Ok(render::reply(&reply))
}
