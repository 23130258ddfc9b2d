//! Domain types produced by the aggregation pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`InstrumentQuote`] | One normalized instrument value |
//! | [`PriceSnapshot`] | All-or-nothing set of quotes from one run |
//! | [`Headline`] | One attributed news headline |
//! | [`NewsDigest`] | Merged, capped headlines from one run |
//! | [`MembershipDecision`] | Ephemeral outcome of one gate check |
//! | [`Unit`] | Display unit (toman or USD) |
//! | [`UtcDateTime`] | UTC-normalized timestamp |
//!
//! Everything here is assembled per request and discarded after rendering;
//! nothing is persisted or shared across requests.

mod models;
mod timestamp;

pub use models::{Headline, InstrumentQuote, MembershipDecision, NewsDigest, PriceSnapshot, Unit};
pub use timestamp::UtcDateTime;
