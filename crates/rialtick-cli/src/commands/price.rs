use rialtick_core::AggregationService;

use crate::error::CliError;
use crate::progress::{ProgressIndicator, StderrProgress};
use crate::render;

pub async fn run(service: &AggregationService, user_id: i64) -> Result<String, CliError> {
    let progress = StderrProgress;
    let handle = progress.show("⏳ در حال دریافت اطلاعات...");
    let reply = service.handle_price(user_id).await;
    progress.dismiss(handle);
    Ok(render::reply(&reply))
}
