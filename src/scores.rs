//! The public lookups: one sport, one specific pairing, or everything.

use std::collections::HashMap;

use regex::RegexBuilder;

use crate::error::{Error, Result};
use crate::extract::parse_match_info;
use crate::feed::{decode_feed, fetch_live_xml};
use crate::record::MatchRecord;
use crate::sports;

/// Decodes a raw feed body into match records, in feed order. Soccer items
/// carry their summary in `description`; every other sport uses `title`.
/// A feed with zero items is an empty list, not an error.
pub fn parse_live_feed(sport: &str, raw: &[u8]) -> Result<Vec<MatchRecord>> {
    let items = decode_feed(sport, raw)?;
    let soccer = sport == sports::SOCCER;

    let mut matches = Vec::with_capacity(items.len());
    for item in &items {
        let (text, node) = if soccer {
            (item.description.as_deref(), "description")
        } else {
            (item.title.as_deref(), "title")
        };
        let text =
            text.ok_or_else(|| Error::Parsing(format!("item is missing its {node} node")))?;
        let info = parse_match_info(text, item, soccer)?;
        matches.push(MatchRecord::from_info(sport, info)?);
    }
    log::debug!("parsed {} live {sport} matches", matches.len());
    Ok(matches)
}

/// Live scores for every match currently in one sport's feed.
pub fn get_sport_scores(sport: &str) -> Result<Vec<MatchRecord>> {
    let sport = sport.to_lowercase();
    let raw = fetch_live_xml(&sport)?;
    parse_live_feed(&sport, &raw)
}

/// Live score for a single match, located by team names. Both names are
/// case-insensitive regex patterns.
pub fn find_match(sport: &str, team1: &str, team2: &str) -> Result<MatchRecord> {
    let sport = sport.to_lowercase();
    let matches = get_sport_scores(&sport)?;
    find_match_in(&matches, &sport, team1, team2).map(MatchRecord::clone)
}

/// First record in feed order whose teams satisfy the search condition.
/// The condition is lopsided: `team1` hitting the home side (or `team2`
/// hitting the home side) is sufficient by itself, while `team2` otherwise
/// only constrains the away side.
pub fn find_match_in<'a>(
    matches: &'a [MatchRecord],
    sport: &str,
    team1: &str,
    team2: &str,
) -> Result<&'a MatchRecord> {
    let team1_re = RegexBuilder::new(team1).case_insensitive(true).build()?;
    let team2_re = RegexBuilder::new(team2).case_insensitive(true).build()?;

    matches
        .iter()
        .find(|found| {
            team1_re.is_match(&found.home_team)
                || (team1_re.is_match(&found.away_team) && team2_re.is_match(&found.away_team))
                || team2_re.is_match(&found.home_team)
        })
        .ok_or_else(|| Error::no_match(sport, team1, team2))
}

/// Live scores for every known sport, keyed by sport tag. Fetches run
/// sequentially over [`sports::ALL`]; the first failing sport aborts the
/// whole call.
pub fn all_matches() -> Result<HashMap<String, Vec<MatchRecord>>> {
    let mut matches = HashMap::new();
    for sport in sports::ALL {
        matches.insert(sport.to_string(), get_sport_scores(sport)?);
    }
    Ok(matches)
}
