//! Typed bindings over the load-bearing elements of the host pages.
//!
//! Element ids/classes are the contract between the server-rendered
//! markup and this crate; they are resolved here, once, into named slots
//! so the controllers never carry selector strings themselves.

use crate::model::{GoalMarkets, OutcomeProbabilities, SavedPrediction, SubmittedPrediction};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

const NOTIFICATION_MS: i32 = 3000;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

fn select(selector: &str) -> Option<HtmlSelectElement> {
    query(selector).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
}

fn input(id: &str) -> Option<HtmlInputElement> {
    by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

fn slot_text(slot: &Option<Element>) -> String {
    slot.as_ref()
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

fn slot_value(slot: &Option<HtmlSelectElement>) -> String {
    slot.as_ref().map(|s| s.value()).unwrap_or_default()
}

/// The on-page prediction display a user-authored save is captured from.
/// Missing slots contribute empty strings, mirroring a page that shows
/// no result yet.
pub struct PredictionSource {
    home_select: Option<HtmlSelectElement>,
    away_select: Option<HtmlSelectElement>,
    outcome: Option<Element>,
    home_win: Option<Element>,
    draw: Option<Element>,
    away_win: Option<Element>,
    over15: Option<Element>,
    over25: Option<Element>,
    btts: Option<Element>,
}

impl PredictionSource {
    pub fn resolve() -> Self {
        Self {
            home_select: select("select[name=\"homeTeam\"]"),
            away_select: select("select[name=\"awayTeam\"]"),
            outcome: query(".match-outcome"),
            home_win: query(".home-win-prob"),
            draw: query(".draw-prob"),
            away_win: query(".away-win-prob"),
            over15: query(".over-1-5"),
            over25: query(".over-2-5"),
            btts: query(".btts"),
        }
    }

    pub fn capture(&self, id: u64, date: String) -> SavedPrediction {
        SavedPrediction {
            id,
            date,
            home_team: slot_value(&self.home_select),
            away_team: slot_value(&self.away_select),
            match_outcome: slot_text(&self.outcome),
            probabilities: OutcomeProbabilities {
                home_win: slot_text(&self.home_win),
                draw: slot_text(&self.draw),
                away_win: slot_text(&self.away_win),
            },
            goals: GoalMarkets {
                over15: slot_text(&self.over15),
                over25: slot_text(&self.over25),
                btts: slot_text(&self.btts),
            },
        }
    }
}

/// The hidden team inputs and the JSON payload embedded in the page that
/// a backend submission is built from.
pub struct SubmissionSource {
    home: Option<HtmlInputElement>,
    away: Option<HtmlInputElement>,
    payload: Option<Element>,
}

impl SubmissionSource {
    pub fn resolve() -> Self {
        Self {
            home: input("homeTeamSelected"),
            away: input("awayTeamSelected"),
            payload: by_id("predictionsData"),
        }
    }

    /// None when the page carries no parseable prediction payload.
    pub fn capture(&self, timestamp: String) -> Option<SubmittedPrediction> {
        let predictions = serde_json::from_str(&slot_text(&self.payload)).ok()?;
        Some(SubmittedPrediction {
            home_team: self.home.as_ref().map(|i| i.value()).unwrap_or_default(),
            away_team: self.away.as_ref().map(|i| i.value()).unwrap_or_default(),
            predictions,
            timestamp,
        })
    }
}

// ---------------- Shared page side effects -----------------

/// Refresh the shared `#lastUpdated` label, if the page has one.
pub fn set_last_updated(label: &str) {
    if let Some(el) = by_id("lastUpdated") {
        el.set_text_content(Some(label));
    }
}

/// Append a `div.notification` to the body and remove it after 3 s.
pub fn flash_notification(message: &str) {
    let Some(doc) = document() else { return };
    let Ok(el) = doc.create_element("div") else {
        return;
    };
    el.set_class_name("notification");
    el.set_text_content(Some(message));
    let Some(body) = doc.body() else { return };
    if body.append_child(&el).is_err() {
        return;
    }
    if let Some(win) = web_sys::window() {
        let node = el.clone();
        let remove = Closure::wrap(Box::new(move || node.remove()) as Box<dyn FnMut()>);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.as_ref().unchecked_ref(),
            NOTIFICATION_MS,
        );
        remove.forget();
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

pub fn show_block(el: &HtmlElement) {
    let _ = el.style().set_property("display", "block");
}
