use std::fs;
use std::path::PathBuf;

use picks_terminal::picks_fetch::parse_picks_json;
use picks_terminal::state::PickDirection;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_picks_fixture() {
    let raw = read_fixture("picks.json");
    let picks = parse_picks_json(&raw).expect("fixture should parse");
    assert_eq!(picks.len(), 4);

    assert_eq!(picks[0].player, "Jayson Tatum");
    assert_eq!(picks[0].line, 27.5);
    assert_eq!(picks[0].predicted, 31.2);
    assert_eq!(picks[0].pick, PickDirection::Over);
    assert_eq!(picks[0].confidence, 80.0);
    assert_eq!(
        picks[0].game_time.as_deref(),
        Some("2026-01-15T19:30:00-05:00")
    );

    assert_eq!(picks[1].pick, PickDirection::Under);
}

#[test]
fn null_game_time_and_missing_game_time_are_equivalent() {
    let raw = read_fixture("picks.json");
    let picks = parse_picks_json(&raw).expect("fixture should parse");
    // Brunson carries an explicit null, Booker omits the key entirely.
    assert!(picks[2].game_time.is_none());
    assert!(picks[3].game_time.is_none());
}

#[test]
fn unknown_fields_are_ignored() {
    let raw = r#"[{"player":"X","line":10.5,"predicted":12.0,"pick":"OVER",
                   "confidence":70,"team":"BOS","opponent":"NYK"}]"#;
    let picks = parse_picks_json(raw).expect("extra fields should not fail parsing");
    assert_eq!(picks.len(), 1);
}

#[test]
fn empty_and_null_bodies_parse_to_empty_slates() {
    assert!(parse_picks_json("").expect("empty body").is_empty());
    assert!(parse_picks_json("  \n ").expect("blank body").is_empty());
    assert!(parse_picks_json("null").expect("null body").is_empty());
    assert!(parse_picks_json("[]").expect("empty array").is_empty());
}

#[test]
fn malformed_body_is_an_error_not_a_panic() {
    assert!(parse_picks_json("{ not json").is_err());
    assert!(parse_picks_json(r#"[{"player":"X"}]"#).is_err());
    assert!(parse_picks_json(r#"[{"player":"X","line":1,"predicted":2,"pick":"PUSH","confidence":50}]"#).is_err());
}
