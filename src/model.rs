//! Wire records and view-model helpers shared by the page controllers.
//! Shapes mirror what the backend actually serves; everything client-side
//! is read-only except the two persisted prediction lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group key under which the backend nests the match-outcome prediction
/// and its probability map.
pub const OUTCOME_GROUP: &str = "Match Outcome";
pub const HOME_WIN: &str = "Home Win";
pub const DRAW: &str = "Draw";
pub const AWAY_WIN: &str = "Away Win";

// ---------------- Server-origin records -----------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MatchInfo {
    pub competition: String,
    /// RFC 3339 kickoff instant; formatted to local HH:MM for display.
    pub kickoff: String,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
}

/// One backend-produced prediction for today's card list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "match")]
    pub match_info: MatchInfo,
    /// Free-form label -> value map; the headline entry is [`OUTCOME_GROUP`].
    #[serde(default)]
    pub predictions: BTreeMap<String, String>,
    /// Group -> category -> percent string (e.g. "45.2%"). The percent
    /// string drives both the bar width style and the bar label.
    #[serde(default)]
    pub probabilities: BTreeMap<String, BTreeMap<String, String>>,
}

impl PredictionRecord {
    pub fn outcome(&self) -> &str {
        self.predictions
            .get(OUTCOME_GROUP)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Percent string for one outcome category, empty when absent.
    pub fn probability(&self, category: &str) -> &str {
        self.probabilities
            .get(OUTCOME_GROUP)
            .and_then(|group| group.get(category))
            .map(String::as_str)
            .unwrap_or("")
    }
}

// ---------------- Live matches -----------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompetitionRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FullTimeScore {
    #[serde(default)]
    pub home: Option<i64>,
    #[serde(default)]
    pub away: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Score {
    #[serde(rename = "fullTime", default)]
    pub full_time: Option<FullTimeScore>,
}

/// Match lifecycle state as the upstream feed names it. Unknown strings
/// are preserved verbatim so new feed states render instead of crashing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    InPlay,
    HalfTime,
    Finished,
    Scheduled,
    Other(String),
}

impl From<String> for MatchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "IN_PLAY" => MatchStatus::InPlay,
            "PAUSED" => MatchStatus::HalfTime,
            "FINISHED" => MatchStatus::Finished,
            "SCHEDULED" => MatchStatus::Scheduled,
            _ => MatchStatus::Other(value),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        status.wire_label().to_string()
    }
}

/// Badge label/style pair for a recognized status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

impl MatchStatus {
    pub fn badge(&self) -> Option<Badge> {
        let badge = match self {
            MatchStatus::InPlay => Badge {
                label: "LIVE",
                class: "badge bg-success",
            },
            MatchStatus::HalfTime => Badge {
                label: "HT",
                class: "badge bg-warning",
            },
            MatchStatus::Finished => Badge {
                label: "FT",
                class: "badge bg-secondary",
            },
            MatchStatus::Scheduled => Badge {
                label: "Upcoming",
                class: "badge bg-primary",
            },
            MatchStatus::Other(_) => return None,
        };
        Some(badge)
    }

    pub fn wire_label(&self) -> &str {
        match self {
            MatchStatus::InPlay => "IN_PLAY",
            MatchStatus::HalfTime => "PAUSED",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Other(value) => value,
        }
    }
}

/// What the minute slot of a live-match card should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MinuteLabel {
    /// In play: elapsed minutes, blank when the feed omits them.
    Elapsed(Option<u32>),
    /// Any other state: the kickoff instant, formatted by the caller.
    KickOff(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiveMatch {
    #[serde(default)]
    pub competition: Option<CompetitionRef>,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamRef,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamRef,
    #[serde(default)]
    pub score: Option<Score>,
    pub status: MatchStatus,
    #[serde(default)]
    pub minute: Option<u32>,
    #[serde(rename = "utcDate", default)]
    pub utc_date: String,
}

impl LiveMatch {
    pub fn competition_name(&self) -> &str {
        self.competition
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    pub fn minute_label(&self) -> MinuteLabel {
        if self.status == MatchStatus::InPlay {
            MinuteLabel::Elapsed(self.minute)
        } else {
            MinuteLabel::KickOff(self.utc_date.clone())
        }
    }

    /// Home/away score strings, `"-"` wherever the feed has no number yet.
    pub fn score_pair(&self) -> (String, String) {
        let full_time = self.score.as_ref().and_then(|s| s.full_time.as_ref());
        let display = |side: Option<i64>| {
            side.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
        };
        (
            display(full_time.and_then(|ft| ft.home)),
            display(full_time.and_then(|ft| ft.away)),
        )
    }
}

// ---------------- Persisted records -----------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeProbabilities {
    pub home_win: String,
    pub draw: String,
    pub away_win: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalMarkets {
    pub over15: String,
    pub over25: String,
    pub btts: String,
}

/// A user-authored prediction captured from the page and kept in local
/// storage. `id` is the creation time in ms; uniqueness rests on that
/// alone, no further dedup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrediction {
    pub id: u64,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub match_outcome: String,
    pub probabilities: OutcomeProbabilities,
    pub goals: GoalMarkets,
}

/// A prediction the backend acknowledged saving; mirrored into the
/// second local list and shown in the recent-history widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedPrediction {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub predictions: BTreeMap<String, String>,
    /// ISO-8601 submission instant.
    pub timestamp: String,
}
