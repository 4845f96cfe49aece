//! Positional parser for the feed's match summary strings.
//!
//! The upstream format is not a grammar: fields sit between the first
//! `(`/`)` pair, the literal token `vs`, a `:`, and (for soccer) two
//! hyphens. Every search is first-occurrence and every missing delimiter
//! is a hard error for that item.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::feed::FeedItem;

/// Extracts the named fields from one item's summary text. The enclosing
/// item is a required side input: `match_time` (non-soccer), `match_date`
/// and `match_link` come from its sibling text nodes.
pub fn parse_match_info(
    text: &str,
    item: &FeedItem,
    soccer: bool,
) -> Result<HashMap<String, String>> {
    let mut info = HashMap::new();

    let i_open = locate(text, "(")?;
    let i_close = locate(text, ")")?;
    // A `)` sitting before the `(` slices to nothing, not an error.
    let league = text.get(i_open + 1..i_close).unwrap_or("");
    info.insert("league".to_string(), league.trim().to_string());

    let rest = &text[i_close + 1..];
    let i_vs = locate(rest, "vs")?;
    let after_vs = &rest[i_vs + 2..];
    let i_colon = locate(after_vs, ":")?;
    info.insert("home_team".to_string(), team_name(&rest[..i_vs]));
    info.insert("away_team".to_string(), team_name(&after_vs[..i_colon]));

    // Everything from the colon onwards carries score and time.
    let tail = &after_vs[i_colon..];
    if soccer {
        let i_hyph = locate(tail, "-")?;
        let end = past_hyphen(tail, i_hyph);
        info.insert("match_score".to_string(), tail[1..end].trim().to_string());
        let tail = &tail[i_hyph + 1..];
        let i_hyph = locate(tail, "-")?;
        info.insert(
            "match_time".to_string(),
            tail[i_hyph + 1..].trim().to_string(),
        );
    } else {
        info.insert("match_score".to_string(), tail[1..].trim().to_string());
        info.insert(
            "match_time".to_string(),
            node_text(&item.description, "description")?.to_string(),
        );
    }

    info.insert(
        "match_date".to_string(),
        node_text(&item.pub_date, "pubDate")?.to_string(),
    );
    info.insert(
        "match_link".to_string(),
        node_text(&item.guid, "guid")?.to_string(),
    );

    Ok(info)
}

fn locate(text: &str, token: &str) -> Result<usize> {
    text.find(token)
        .ok_or_else(|| Error::Parsing(format!("no '{token}' in match text '{text}'")))
}

fn team_name(raw: &str) -> String {
    raw.replace('#', " ").trim().to_string()
}

// End of the soccer score slice: one character past the hyphen, on a
// UTF-8 boundary. The feed writes the away score directly after the
// hyphen, so the slice keeps its first character.
fn past_hyphen(text: &str, i_hyph: usize) -> usize {
    let after = &text[i_hyph + 1..];
    i_hyph + 1 + after.chars().next().map_or(0, char::len_utf8)
}

fn node_text<'a>(value: &'a Option<String>, node: &str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .ok_or_else(|| Error::Parsing(format!("item is missing its {node} node")))
}
