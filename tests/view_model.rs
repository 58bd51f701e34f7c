use footy_web::model::{
    FullTimeScore, LiveMatch, MatchStatus, MinuteLabel, Score, TeamRef,
};

fn live(status: &str, minute: Option<u32>, score: Option<Score>) -> LiveMatch {
    LiveMatch {
        competition: None,
        home_team: TeamRef {
            name: "Arsenal".to_string(),
        },
        away_team: TeamRef {
            name: "Chelsea".to_string(),
        },
        score,
        status: MatchStatus::from(status.to_string()),
        minute,
        utc_date: "2025-03-08T15:00:00Z".to_string(),
    }
}

#[test]
fn in_play_with_minute_shows_elapsed_minutes() {
    let m = live("IN_PLAY", Some(37), None);
    assert_eq!(m.minute_label(), MinuteLabel::Elapsed(Some(37)));
}

#[test]
fn in_play_without_minute_shows_nothing() {
    let m = live("IN_PLAY", None, None);
    assert_eq!(m.minute_label(), MinuteLabel::Elapsed(None));
}

#[test]
fn every_other_status_falls_back_to_kickoff_time() {
    for status in ["SCHEDULED", "PAUSED", "FINISHED", "POSTPONED"] {
        let m = live(status, Some(90), None);
        assert_eq!(
            m.minute_label(),
            MinuteLabel::KickOff("2025-03-08T15:00:00Z".to_string()),
            "status {status} should not show a minute"
        );
    }
}

#[test]
fn missing_score_renders_placeholders() {
    assert_eq!(
        live("SCHEDULED", None, None).score_pair(),
        ("-".to_string(), "-".to_string())
    );
}

#[test]
fn partial_score_renders_one_placeholder() {
    let score = Score {
        full_time: Some(FullTimeScore {
            home: Some(2),
            away: None,
        }),
    };
    assert_eq!(
        live("IN_PLAY", Some(51), Some(score)).score_pair(),
        ("2".to_string(), "-".to_string())
    );
}

#[test]
fn badge_table_matches_the_fixed_mapping() {
    let cases = [
        ("IN_PLAY", "LIVE", "badge bg-success"),
        ("PAUSED", "HT", "badge bg-warning"),
        ("FINISHED", "FT", "badge bg-secondary"),
        ("SCHEDULED", "Upcoming", "badge bg-primary"),
    ];
    for (wire, label, class) in cases {
        let status = MatchStatus::from(wire.to_string());
        let badge = status.badge().expect("known status should have a badge");
        assert_eq!(badge.label, label);
        assert_eq!(badge.class, class);
        assert_eq!(status.wire_label(), wire);
    }
}

#[test]
fn unknown_status_has_no_badge_and_keeps_its_text() {
    let status = MatchStatus::from("AWARDED".to_string());
    assert!(status.badge().is_none());
    assert_eq!(status.wire_label(), "AWARDED");
    assert_eq!(String::from(status), "AWARDED");
}
