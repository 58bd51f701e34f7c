use std::fs;
use std::path::PathBuf;

use footy_web::api::{TodayPredictions, parse_live_scores, parse_predictions, parse_save_ack};
use footy_web::error::ApiError;
use footy_web::model::{MatchStatus, MinuteLabel};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_non_empty_predictions() {
    let raw = read_fixture("predict_today.json");
    let TodayPredictions::Ready(records) = parse_predictions(&raw).expect("fixture should parse")
    else {
        panic!("non-empty success response should be ready");
    };
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].match_info.home_team, "Arsenal");
    assert_eq!(records[0].match_info.away_team, "Chelsea");
    assert_eq!(records[0].outcome(), "Home Win");
    assert_eq!(records[0].probability("Home Win"), "45.2%");
    assert_eq!(records[0].probability("Draw"), "27.1%");
    assert_eq!(records[0].probability("Away Win"), "27.7%");
    assert_eq!(records[1].outcome(), "Draw");
}

#[test]
fn empty_prediction_list_is_the_empty_state() {
    let raw = read_fixture("predict_today_empty.json");
    assert_eq!(
        parse_predictions(&raw).expect("fixture should parse"),
        TodayPredictions::Empty
    );
}

#[test]
fn error_status_is_the_empty_state_not_an_error() {
    let raw = read_fixture("predict_today_error.json");
    assert_eq!(
        parse_predictions(&raw).expect("fixture should parse"),
        TodayPredictions::Empty
    );
}

#[test]
fn garbage_predictions_body_is_a_parse_error() {
    let err = parse_predictions("<html>gateway timeout</html>").unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn parses_live_matches() {
    let raw = read_fixture("live_scores.json");
    let matches = parse_live_scores(&raw).expect("fixture should parse");
    assert_eq!(matches.len(), 3);

    let in_play = &matches[0];
    assert_eq!(in_play.status, MatchStatus::InPlay);
    assert_eq!(in_play.minute_label(), MinuteLabel::Elapsed(Some(37)));
    assert_eq!(in_play.score_pair(), ("2".to_string(), "1".to_string()));
    assert_eq!(in_play.competition_name(), "Premier League");

    let scheduled = &matches[1];
    assert_eq!(scheduled.status, MatchStatus::Scheduled);
    assert_eq!(
        scheduled.minute_label(),
        MinuteLabel::KickOff("2025-03-08T19:45:00Z".to_string())
    );
    assert_eq!(scheduled.score_pair(), ("-".to_string(), "-".to_string()));
}

#[test]
fn unknown_status_survives_verbatim() {
    let raw = read_fixture("live_scores.json");
    let matches = parse_live_scores(&raw).expect("fixture should parse");
    let postponed = &matches[2];
    assert_eq!(
        postponed.status,
        MatchStatus::Other("POSTPONED".to_string())
    );
    assert_eq!(postponed.status.wire_label(), "POSTPONED");
    assert!(postponed.status.badge().is_none());
    // null full-time numbers still render as placeholders
    assert_eq!(postponed.score_pair(), ("-".to_string(), "-".to_string()));
    // no competition block at all
    assert_eq!(postponed.competition_name(), "");
}

#[test]
fn error_payload_beats_the_matches_list() {
    let raw = read_fixture("live_scores_error.json");
    let err = parse_live_scores(&raw).unwrap_err();
    assert_eq!(err, ApiError::Api("connection refused".to_string()));
}

#[test]
fn error_payload_without_message_reports_the_error_field() {
    let err = parse_live_scores(r#"{"error": "No matches found", "matches": []}"#).unwrap_err();
    assert_eq!(err, ApiError::Api("No matches found".to_string()));
}

#[test]
fn garbage_live_scores_body_is_a_parse_error() {
    let err = parse_live_scores("not json at all").unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn save_ack_success() {
    let body = r#"{"status": "success", "message": "Prediction saved successfully"}"#;
    assert!(parse_save_ack(body).is_ok());
}

#[test]
fn save_ack_failure_carries_the_message() {
    let body = r#"{"status": "error", "message": "database unavailable"}"#;
    assert_eq!(
        parse_save_ack(body).unwrap_err(),
        ApiError::Api("database unavailable".to_string())
    );
}

#[test]
fn save_ack_garbage_is_a_parse_error() {
    assert!(matches!(
        parse_save_ack("").unwrap_err(),
        ApiError::Malformed(_)
    ));
}
