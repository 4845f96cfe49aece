use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use livescores::{Error, parse_live_feed};

fn read_fixture(name: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read(path).expect("fixture file should be readable")
}

fn soccer_item(description: &str) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <item>
      <description>{description}</description>
      <pubDate>Sat, 01 Mar 2025 15:04:05 GMT</pubDate>
      <guid>http://www.scorespro.com/soccer/match/1</guid>
    </item>
  </channel>
</rss>"#
    )
    .into_bytes()
}

#[test]
fn parses_soccer_fixture() {
    let raw = read_fixture("live_soccer.xml");
    let matches = parse_live_feed("soccer", &raw).expect("fixture should parse");
    assert_eq!(matches.len(), 2);

    let first = &matches[0];
    assert_eq!(first.sport, "soccer");
    assert_eq!(first.league, "Premier League");
    assert_eq!(first.home_team, "Arsenal");
    assert_eq!(first.away_team, "Chelsea");
    assert_eq!(first.home_score, "2");
    assert_eq!(first.away_score, "1");
    assert_eq!(first.match_time, "78'");
    assert_eq!(first.match_link, "http://www.scorespro.com/soccer/match/1001");
    assert_eq!(
        first.match_date,
        Utc.with_ymd_and_hms(2025, 3, 1, 15, 4, 5).unwrap()
    );

    let second = &matches[1];
    assert_eq!(second.home_team, "Real Madrid");
    assert_eq!(second.away_team, "FC Barcelona");
    assert_eq!(second.home_score, "0");
    assert_eq!(second.away_score, "0");
    assert_eq!(second.match_time, "HT");
}

#[test]
fn parses_basketball_fixture_from_titles() {
    let raw = read_fixture("live_basketball.xml");
    let matches = parse_live_feed("basketball", &raw).expect("fixture should parse");
    assert_eq!(matches.len(), 2);

    let first = &matches[0];
    assert_eq!(first.league, "NBA");
    assert_eq!(first.home_team, "Lakers");
    assert_eq!(first.away_team, "Celtics");
    assert_eq!(first.home_score, "101");
    assert_eq!(first.away_score, "98");
    assert_eq!(first.match_time, "Q4 2:30");
    assert_eq!(first.field("match_score"), Some("101-98"));

    let second = &matches[1];
    assert_eq!(second.home_team, "Real Madrid");
    assert_eq!(second.away_team, "Panathinaikos");
    assert_eq!(second.match_time, "FT");
}

#[test]
fn team_names_come_back_clean() {
    let raw = read_fixture("live_soccer.xml");
    for record in parse_live_feed("soccer", &raw).expect("fixture should parse") {
        for team in [&record.home_team, &record.away_team] {
            assert_eq!(team.trim(), team.as_str());
            assert!(!team.contains('#'));
        }
    }
}

#[test]
fn empty_feed_is_an_empty_list() {
    let raw = read_fixture("live_empty.xml");
    let matches = parse_live_feed("handball", &raw).expect("fixture should parse");
    assert!(matches.is_empty());
}

#[test]
fn malformed_xml_names_the_sport() {
    let err = parse_live_feed("hockey", b"this is not xml").unwrap_err();
    assert!(matches!(err, Error::Sport { sport } if sport == "hockey"));
}

#[test]
fn feed_without_channel_names_the_sport() {
    let err = parse_live_feed("tennis", b"<rss version=\"2.0\"></rss>").unwrap_err();
    assert!(matches!(err, Error::Sport { sport } if sport == "tennis"));
}

#[test]
fn missing_vs_token_is_a_parsing_error() {
    let raw = soccer_item("(Premier League) Arsenal - Chelsea: 2-1 - 78'");
    let err = parse_live_feed("soccer", &raw).unwrap_err();
    assert!(matches!(err, Error::Parsing(_)));
}

#[test]
fn truncated_away_score_follows_the_feed_shape() {
    // The score slice ends one character past its hyphen, so a multi-digit
    // away score loses everything after its first digit.
    let raw = soccer_item("(Cup) Alpha vs Beta: 10-12 - HT");
    let matches = parse_live_feed("soccer", &raw).expect("fixture should parse");
    assert_eq!(matches[0].home_score, "10");
    assert_eq!(matches[0].away_score, "1");
    assert_eq!(matches[0].match_time, "HT");
}

#[test]
fn unparseable_pub_date_is_a_parsing_error() {
    let raw = r#"<rss version="2.0"><channel><item>
        <title>(NHL) Rangers vs Bruins: 3-2</title>
        <description>P3 10:00</description>
        <pubDate>sometime tomorrow</pubDate>
        <guid>http://www.scorespro.com/hockey/match/9</guid>
        </item></channel></rss>"#;
    let err = parse_live_feed("hockey", raw.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Parsing(_)));
}

#[test]
fn score_without_hyphen_is_a_parsing_error() {
    let raw = r#"<rss version="2.0"><channel><item>
        <title>(NHL) Rangers vs Bruins: </title>
        <description>Not Started</description>
        <pubDate>Sat, 01 Mar 2025 15:04:05 GMT</pubDate>
        <guid>http://www.scorespro.com/hockey/match/10</guid>
        </item></channel></rss>"#;
    let err = parse_live_feed("hockey", raw.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Parsing(_)));
}
