use std::collections::BTreeMap;
use std::rc::Rc;

use footy_web::model::{GoalMarkets, OutcomeProbabilities, SavedPrediction, SubmittedPrediction};
use footy_web::state::saved::{SavedAction, SavedPredictions};
use footy_web::state::submitted::{RECENT_LIMIT, SubmittedHistory};
use yew::Reducible;

fn sample(id: u64) -> SavedPrediction {
    SavedPrediction {
        id,
        date: "3/8/2025".to_string(),
        home_team: "Arsenal".to_string(),
        away_team: "Chelsea".to_string(),
        match_outcome: "Home Win".to_string(),
        probabilities: OutcomeProbabilities {
            home_win: "45.2%".to_string(),
            draw: "27.1%".to_string(),
            away_win: "27.7%".to_string(),
        },
        goals: GoalMarkets {
            over15: "Yes".to_string(),
            over25: "No".to_string(),
            btts: "Yes".to_string(),
        },
    }
}

fn submission(stamp: &str) -> SubmittedPrediction {
    SubmittedPrediction {
        home_team: "Arsenal".to_string(),
        away_team: "Chelsea".to_string(),
        predictions: BTreeMap::from([("Match Outcome".to_string(), "Home Win".to_string())]),
        timestamp: stamp.to_string(),
    }
}

#[test]
fn add_appends_exactly_one_record() {
    let store = Rc::new(SavedPredictions::default());
    let store = store.reduce(SavedAction::Add(sample(1741442530000)));
    assert_eq!(store.items.len(), 1);
    assert_eq!(store.items[0].id, 1741442530000);

    let store = store.reduce(SavedAction::Add(sample(1741442531000)));
    assert_eq!(store.items.len(), 2);
}

#[test]
fn delete_removes_exactly_that_id() {
    let store = Rc::new(SavedPredictions {
        items: vec![sample(1), sample(2), sample(3)],
    });
    let store = store.reduce(SavedAction::Delete(2));
    let ids: Vec<u64> = store.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn deleting_the_last_entry_leaves_the_list_empty() {
    let store = Rc::new(SavedPredictions {
        items: vec![sample(7)],
    });
    let store = store.reduce(SavedAction::Delete(7));
    assert!(store.items.is_empty());
}

#[test]
fn deleting_an_unknown_id_changes_nothing() {
    let store = Rc::new(SavedPredictions {
        items: vec![sample(1)],
    });
    let store = store.reduce(SavedAction::Delete(99));
    assert_eq!(store.items.len(), 1);
}

#[test]
fn saved_prediction_round_trips_with_camel_case_keys() {
    let raw = serde_json::to_string(&sample(1741442530000)).unwrap();
    assert!(raw.contains("\"homeTeam\""));
    assert!(raw.contains("\"matchOutcome\""));
    assert!(raw.contains("\"homeWin\""));
    assert!(raw.contains("\"over15\""));
    assert!(raw.contains("\"btts\""));
    let back: SavedPrediction = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, sample(1741442530000));
}

#[test]
fn recent_history_is_capped_and_newest_first() {
    let items: Vec<SubmittedPrediction> = (0..7)
        .map(|i| submission(&format!("2025-03-08T12:0{i}:00.000Z")))
        .collect();
    let history = SubmittedHistory {
        items: items.clone(),
    };
    let recent = history.recent();
    assert_eq!(recent.len(), RECENT_LIMIT);
    assert_eq!(recent[0], &items[6]);
    assert_eq!(recent[4], &items[2]);
}

#[test]
fn short_history_shows_everything() {
    let history = SubmittedHistory {
        items: vec![submission("2025-03-08T12:00:00.000Z")],
    };
    assert_eq!(history.recent().len(), 1);
}

#[test]
fn submitted_prediction_serializes_like_the_backend_payload() {
    let raw = serde_json::to_string(&submission("2025-03-08T12:00:00.000Z")).unwrap();
    assert!(raw.contains("\"homeTeam\""));
    assert!(raw.contains("\"awayTeam\""));
    assert!(raw.contains("\"predictions\""));
    assert!(raw.contains("\"timestamp\""));
}
