use crate::api;
use crate::dom;
use crate::error::ApiError;
use crate::model::SubmittedPrediction;
use crate::state::{SubmittedAction, SubmittedHistory};
use crate::storage;
use crate::util::{self, clog, format_timestamp};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Recent submission history, fed by the page's save button. A
/// prediction only enters the local history once the backend has
/// acknowledged it.
#[function_component(SavePanel)]
pub fn save_panel() -> Html {
    let history = use_reducer(SubmittedHistory::load);

    {
        let items = history.items.clone();
        use_effect_with(items, move |items| {
            storage::store_list(storage::SUBMITTED_PREDICTIONS_KEY, items);
            || ()
        });
    }

    {
        let dispatcher = history.dispatcher();
        use_effect_with((), move |_| {
            let button = dom::by_id("savePredictionButton");
            let source = dom::SubmissionSource::resolve();
            let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let Some(payload) = source.capture(util::now_iso()) else {
                    clog("No prediction payload on page; nothing to save");
                    return;
                };
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    match api::submit_prediction(&payload).await {
                        Ok(()) => {
                            dom::alert("✅ Prediction saved successfully!");
                            dispatcher.dispatch(SubmittedAction::Record(payload));
                        }
                        Err(ApiError::Api(_)) => {
                            dom::alert("❌ Failed to save prediction.");
                        }
                        Err(err) => {
                            clog(&format!("Error saving prediction: {err}"));
                            dom::alert("❌ Error saving prediction.");
                        }
                    }
                });
            }) as Box<dyn FnMut(_)>);
            if let Some(button) = &button {
                button
                    .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                    .unwrap();
            }
            move || {
                if let Some(button) = &button {
                    let _ = button
                        .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    html! {
        <>
            { for history.recent().into_iter().map(|p| html! {
                <SubmittedCard prediction={p.clone()} />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SubmittedCardProps {
    pub prediction: SubmittedPrediction,
}

/// One history entry; its details panel expands and collapses on its
/// own, independent of the other entries.
#[function_component(SubmittedCard)]
pub fn submitted_card(props: &SubmittedCardProps) -> Html {
    let expanded = use_state(|| false);
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let p = &props.prediction;
    html! {
        <div class="saved-prediction-card">
            <div class="d-flex justify-content-between align-items-center">
                <div>
                    <strong>{ &p.home_team }</strong>{" vs "}<strong>{ &p.away_team }</strong>
                    <div class="small text-muted">
                        { format!("Saved at: {}", format_timestamp(&p.timestamp)) }
                    </div>
                </div>
                <button class="btn btn-sm btn-outline-primary toggle-details" onclick={toggle}>
                    { if *expanded { "Hide ▲" } else { "Details ▼" } }
                </button>
            </div>
            { if *expanded {
                html! {
                    <div class="prediction-details" style="margin-top:10px;">
                        { for p.predictions.iter().map(|(key, value)| html! {
                            <div><strong>{ format!("{key}:") }</strong>{ format!(" {value}") }</div>
                        }) }
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
