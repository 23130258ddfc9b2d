//! Persian message rendering for pipeline results.
//!
//! Formats mirror the bot's chat messages: price lines with unit suffixes
//! and a freshness footer, numbered Markdown-style headline lists, and the
//! generic localized fallbacks. Raw error details never appear here.

use rialtick_core::{format_age, NewsDigest, PriceSnapshot, Reply, Unit, UtcDateTime};

pub fn reply(reply: &Reply) -> String {
    match reply {
        Reply::Prices(snapshot) => price_message(snapshot, UtcDateTime::now()),
        Reply::News(digest) => news_message(digest),
        Reply::MembershipRequired => String::from(
            "❗ برای استفاده از این ربات، ابتدا باید عضو کانال ما شوید:\n👉 https://t.me/sarasoo",
        ),
        Reply::Unrecognized => {
            String::from("متوجه نشدم. برای مشاهده راهنما دستور /help را ارسال کنید.")
        }
        Reply::Unavailable => String::from("❌ خطا در دریافت داده‌ها. لطفاً بعداً تلاش کنید."),
    }
}

pub fn price_message(snapshot: &PriceSnapshot, now: UtcDateTime) -> String {
    let mut lines: Vec<String> = snapshot
        .quotes
        .iter()
        .map(|quote| match quote.unit {
            Unit::Usd => format!("📉 {}: {} دلار", quote.label, quote.display_value()),
            Unit::Toman => format!("💵 {}: {} تومان", quote.label, quote.display_value()),
        })
        .collect();

    if let Some(last) = snapshot.last_observed_at() {
        lines.push(format!("(به‌روزرسانی: {})", format_age(last, now)));
    }

    // Trailing double spaces keep right-to-left lines from reflowing.
    lines.join("  \n")
}

pub fn news_message(digest: &NewsDigest) -> String {
    if digest.is_empty() {
        return String::from("هیچ تیتر اقتصادی پیدا نشد. لطفاً بعداً تلاش کنید.");
    }

    let mut lines = vec![String::from("📰 تیترهای اقتصادی جدید:")];
    for (index, headline) in digest.headlines.iter().enumerate() {
        lines.push(format!(
            "{}. [{}]({})",
            index + 1,
            headline.title,
            headline.link
        ));
    }
    lines.join("\n")
}
