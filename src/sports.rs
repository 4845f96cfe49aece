//! The sports scorespro publishes a live feed for. Tags double as the
//! `{sport}` slot in the feed URL and as keys in [`crate::all_matches`].

pub const BASEBALL: &str = "baseball";
pub const BASKETBALL: &str = "basketball";
pub const HOCKEY: &str = "hockey";
pub const FOOTBALL: &str = "football";
pub const RUGBY_UNION: &str = "rugby-union";
pub const RUGBY_LEAGUE: &str = "rugby-league";
pub const TENNIS: &str = "tennis";
pub const SOCCER: &str = "soccer";
pub const HANDBALL: &str = "handball";
pub const VOLLEYBALL: &str = "volleyball";

pub const ALL: [&str; 10] = [
    BASEBALL,
    BASKETBALL,
    HOCKEY,
    FOOTBALL,
    RUGBY_UNION,
    RUGBY_LEAGUE,
    TENNIS,
    SOCCER,
    HANDBALL,
    VOLLEYBALL,
];
