use thiserror::Error;

/// Crate-wide errors. Nothing is retried or suppressed; every failure
/// carries enough context to name the sport or item that produced it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("live feed for {sport} is unavailable or malformed")]
    Sport { sport: String },

    #[error("malformed match entry: {0}")]
    Parsing(String),

    #[error("no live match for '{team1}' / '{team2}' in {sport}")]
    Match {
        sport: String,
        team1: String,
        team2: String,
    },

    #[error("invalid team pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn sport(sport: &str) -> Self {
        Error::Sport {
            sport: sport.to_string(),
        }
    }

    pub(crate) fn no_match(sport: &str, team1: &str, team2: &str) -> Self {
        Error::Match {
            sport: sport.to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
