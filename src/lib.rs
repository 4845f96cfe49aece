//! Live scores scraped from the scorespro RSS feeds.
//!
//! One feed per sport, one `<item>` per match. The item text is a
//! semi-structured summary string which [`extract`] turns into named
//! fields by positional search; [`scores`] exposes the lookups built on
//! top of that.

pub mod error;
pub mod extract;
pub mod feed;
mod http_client;
pub mod record;
pub mod scores;
pub mod sports;

pub use error::{Error, Result};
pub use feed::FeedItem;
pub use record::MatchRecord;
pub use scores::{all_matches, find_match, find_match_in, get_sport_scores, parse_live_feed};
