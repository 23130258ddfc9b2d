//! News aggregation flow.
//!
//! Each configured RSS source is fetched and parsed independently; a broken
//! feed is logged and contributes nothing, it never aborts the digest.
//! Headlines keep source-declaration order, then feed order within a source.
//! No cross-source dedup happens: the same story from two agencies is two
//! distinct attributions.

use std::sync::Arc;

use quick_xml::events::Event;
use quick_xml::Reader;
use tokio::task::JoinSet;

use crate::config::{AggregationConfig, FeedSpec};
use crate::domain::{Headline, NewsDigest};
use crate::error::FeedError;
use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Aggregates headlines across the configured feeds.
pub struct NewsAggregator {
    http: Arc<dyn HttpClient>,
    config: Arc<AggregationConfig>,
}

impl NewsAggregator {
    pub fn new(http: Arc<dyn HttpClient>, config: Arc<AggregationConfig>) -> Self {
        Self { http, config }
    }

    /// Fetch every feed concurrently and merge the surviving headlines.
    ///
    /// This operation has no hard failure mode; the worst case is an empty
    /// digest when every source is down.
    pub async fn digest(&self) -> NewsDigest {
        let mut tasks = JoinSet::new();
        for (index, feed) in self.config.feeds.iter().enumerate() {
            let http = Arc::clone(&self.http);
            let url = feed.url.clone();
            tasks.spawn(async move { (index, http.execute(HttpRequest::get(url)).await) });
        }

        let mut responses: Vec<Option<Result<HttpResponse, HttpError>>> =
            self.config.feeds.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            if let Ok((index, result)) = joined {
                responses[index] = Some(result);
            }
        }

        let mut headlines = Vec::new();
        for (feed, response) in self.config.feeds.iter().zip(responses) {
            match source_headlines(feed, response, &self.config.economy_keywords) {
                Ok(mut survived) => headlines.append(&mut survived),
                Err(error) => {
                    tracing::warn!(source = %feed.name, %error, "skipping news source");
                }
            }
        }

        // Final safety cap; per-source limits already bound each contribution.
        headlines.truncate(self.config.digest_cap());
        NewsDigest { headlines }
    }
}

fn source_headlines(
    feed: &FeedSpec,
    response: Option<Result<HttpResponse, HttpError>>,
    keywords: &[String],
) -> Result<Vec<Headline>, FeedError> {
    let response = match response {
        Some(result) => result?,
        None => return Err(FeedError::Fetch(HttpError::new("fetch task was aborted"))),
    };
    if !response.is_success() {
        return Err(FeedError::Status {
            status: response.status,
        });
    }
    headlines_for_feed(&response.body, feed, keywords)
}

/// Extract this feed's contribution from one RSS document.
///
/// Topic-specific feeds are trusted: the first `per_source_limit` items are
/// taken before any filtering. General feeds get the keyword filter over the
/// whole item list and contribute the first `per_source_limit` matches.
fn headlines_for_feed(
    xml: &str,
    feed: &FeedSpec,
    keywords: &[String],
) -> Result<Vec<Headline>, FeedError> {
    let mut items = parse_items(xml)?;
    if !feed.filtered {
        items.truncate(feed.per_source_limit);
    }

    let mut headlines = Vec::new();
    for item in items {
        let title = item.title.trim();
        let link = item.link.trim();
        if title.is_empty() || link.is_empty() {
            continue;
        }
        if feed.filtered && !contains_any(title, keywords) {
            continue;
        }
        headlines.push(Headline {
            title: title.to_owned(),
            link: link.to_owned(),
            source: feed.name.clone(),
        });
        if headlines.len() == feed.per_source_limit {
            break;
        }
    }
    Ok(headlines)
}

/// Case-preserving substring containment, not tokenized matching.
fn contains_any(title: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword.as_str()))
}

#[derive(Debug, Default)]
struct RawItem {
    title: String,
    link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemField {
    Title,
    Link,
}

/// Pull `<item><title/><link/></item>` pairs out of an RSS document in
/// document order. Titles wrapped in CDATA (Tasnim does this) are handled.
fn parse_items(xml: &str) -> Result<Vec<RawItem>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut inside_item = false;
    let mut field: Option<ItemField> = None;
    let mut current = RawItem::default();

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"item" => {
                    inside_item = true;
                    current = RawItem::default();
                }
                b"title" if inside_item => field = Some(ItemField::Title),
                b"link" if inside_item => field = Some(ItemField::Link),
                _ => field = None,
            },
            Event::Text(text) if inside_item => {
                if let Some(target) = field {
                    let unescaped = text.unescape()?;
                    push_field(&mut current, target, &unescaped);
                }
            }
            Event::CData(cdata) if inside_item => {
                if let Some(target) = field {
                    let inner = cdata.into_inner();
                    let raw = String::from_utf8_lossy(&inner);
                    push_field(&mut current, target, &raw);
                }
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"item" => {
                    inside_item = false;
                    items.push(std::mem::take(&mut current));
                }
                b"title" | b"link" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(items)
}

fn push_field(item: &mut RawItem, field: ItemField, text: &str) {
    match field {
        ItemField::Title => item.title.push_str(text),
        ItemField::Link => item.link.push_str(text),
    }
}
