use crate::api::{self, TodayPredictions};
use crate::dom;
use crate::model::PredictionRecord;
use crate::util::{clog, last_updated_label};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::prediction_card::PredictionCard;

#[derive(Clone, PartialEq)]
enum PanelState {
    Loading,
    Ready(Vec<PredictionRecord>),
    Empty,
    Failed,
}

/// Today's prediction cards: one fetch on mount, then a terminal state.
/// The spinner exists only while `Loading`, so it is gone after any
/// outcome.
#[function_component(TodayPanel)]
pub fn today_panel() -> Html {
    let state = use_state(|| PanelState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                clog("Fetching today's predictions...");
                match api::fetch_today_predictions().await {
                    Ok(TodayPredictions::Ready(records)) => {
                        dom::set_last_updated(&last_updated_label());
                        state.set(PanelState::Ready(records));
                    }
                    Ok(TodayPredictions::Empty) => state.set(PanelState::Empty),
                    Err(err) => {
                        clog(&format!("Error fetching predictions: {err}"));
                        state.set(PanelState::Failed);
                    }
                }
            });
            || ()
        });
    }

    match &*state {
        PanelState::Loading => html! {
            <div class="loading-spinner">{"Loading..."}</div>
        },
        PanelState::Empty => html! {
            <div class="alert alert-info">{"No matches available for prediction at the moment."}</div>
        },
        PanelState::Failed => html! {
            <div class="alert alert-danger">{"Error loading predictions. Please try again later."}</div>
        },
        PanelState::Ready(records) => html! {
            <>
                { for records.iter().map(|record| html! { <PredictionCard record={record.clone()} /> }) }
            </>
        },
    }
}
