use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// One live match, built fresh on every query and immutable afterwards.
/// Scores stay strings: the feed leaves them blank or non-numeric for
/// matches that have not started.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: String,
    pub away_score: String,
    pub league: String,
    pub match_date: DateTime<Utc>,
    pub match_time: String,
    pub match_link: String,
    /// The full extracted field map, named fields included.
    pub raw: HashMap<String, String>,
}

impl MatchRecord {
    /// Builds a record from the extractor's field map. The score splits on
    /// its first `-`; the date must be an RFC-2822-style `pubDate`.
    pub fn from_info(sport: &str, info: HashMap<String, String>) -> Result<Self> {
        let score = field(&info, "match_score")?;
        let (home_score, away_score) = score
            .split_once('-')
            .ok_or_else(|| Error::Parsing(format!("no '-' in match score '{score}'")))?;

        let raw_date = field(&info, "match_date")?;
        let match_date = DateTime::parse_from_rfc2822(raw_date)
            .map_err(|err| Error::Parsing(format!("bad match date '{raw_date}': {err}")))?
            .with_timezone(&Utc);

        Ok(MatchRecord {
            sport: sport.to_string(),
            home_team: field(&info, "home_team")?.to_string(),
            away_team: field(&info, "away_team")?.to_string(),
            home_score: home_score.to_string(),
            away_score: away_score.to_string(),
            league: field(&info, "league")?.to_string(),
            match_date,
            match_time: field(&info, "match_time")?.to_string(),
            match_link: field(&info, "match_link")?.to_string(),
            raw: info,
        })
    }

    /// Looks up any extracted field by its feed name, promoted or not.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).map(String::as_str)
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

fn field<'a>(info: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    info.get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::Parsing(format!("extracted fields are missing {key}")))
}
