use roxmltree::{Document, Node};

use crate::error::{Error, Result};
use crate::http_client::http_client;

const FEED_URL_BASE: &str = "http://www.scorespro.com/rss2";

/// One `<item>` of a live feed, reduced to the four text nodes the
/// extractor reads.
#[derive(Debug, Clone, Default)]
pub struct FeedItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub guid: Option<String>,
}

/// One blocking GET against the per-sport live feed. The body comes back
/// verbatim; non-2xx statuses and transport failures surface unchanged.
pub fn fetch_live_xml(sport: &str) -> Result<Vec<u8>> {
    let url = format!("{FEED_URL_BASE}/live-{sport}.xml");
    log::debug!("fetching {url}");
    let response = http_client()?.get(&url).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Walks `root -> channel -> item` and keeps the items in document order.
/// Anything that is not well-formed XML with a `channel` child means the
/// feed for this sport is unavailable or has changed shape.
pub fn decode_feed(sport: &str, raw: &[u8]) -> Result<Vec<FeedItem>> {
    let text = std::str::from_utf8(raw).map_err(|_| Error::sport(sport))?;
    let doc = Document::parse(text).map_err(|err| {
        log::warn!("unparseable {sport} feed: {err}");
        Error::sport(sport)
    })?;

    let channel = doc
        .root_element()
        .children()
        .find(|node| node.has_tag_name("channel"))
        .ok_or_else(|| Error::sport(sport))?;

    Ok(channel
        .children()
        .filter(|node| node.has_tag_name("item"))
        .map(|item| FeedItem {
            title: child_text(item, "title"),
            description: child_text(item, "description"),
            pub_date: child_text(item, "pubDate"),
            guid: child_text(item, "guid"),
        })
        .collect())
}

fn child_text(item: Node<'_, '_>, tag: &str) -> Option<String> {
    item.children()
        .find(|child| child.has_tag_name(tag))
        .and_then(|child| child.text())
        .map(str::to_string)
}
