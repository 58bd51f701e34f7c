use crate::dom;
use crate::model::SavedPrediction;
use crate::state::{SavedAction, SavedPredictions};
use crate::storage;
use crate::util;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// The user's saved predictions. Additions arrive through a delegated
/// click on any `.save-prediction` button elsewhere on the page, which
/// captures the currently displayed selection.
#[function_component(SavedList)]
pub fn saved_list() -> Html {
    let store = use_reducer(SavedPredictions::load);

    // Write-through: persist the whole list after every mutation.
    {
        let items = store.items.clone();
        use_effect_with(items, move |items| {
            storage::store_list(storage::SAVED_PREDICTIONS_KEY, items);
            || ()
        });
    }

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            let document = dom::document().expect("should have a document on window");
            let source = dom::PredictionSource::resolve();
            let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
                let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                else {
                    return;
                };
                if !target.matches(".save-prediction").unwrap_or(false) {
                    return;
                }
                e.prevent_default();
                let prediction = source.capture(util::now_millis(), util::local_date_label());
                dispatcher.dispatch(SavedAction::Add(prediction));
                dom::flash_notification("Prediction saved successfully!");
            }) as Box<dyn FnMut(_)>);
            document
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = document
                    .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            }
        });
    }

    if store.items.is_empty() {
        return html! { <p>{"No predictions saved yet"}</p> };
    }

    let on_delete = {
        let store = store.clone();
        Callback::from(move |id: u64| {
            store.dispatch(SavedAction::Delete(id));
            dom::flash_notification("Prediction deleted");
        })
    };

    html! {
        <>
            { for store.items.iter().map(|p| html! {
                <SavedItem prediction={p.clone()} on_delete={on_delete.clone()} />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SavedItemProps {
    pub prediction: SavedPrediction,
    pub on_delete: Callback<u64>,
}

#[function_component(SavedItem)]
pub fn saved_item(props: &SavedItemProps) -> Html {
    let p = &props.prediction;
    let delete = {
        let cb = props.on_delete.clone();
        let id = p.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    html! {
        <div class="prediction-item">
            <div class="prediction-header">
                <span class="date">{ &p.date }</span>
                <button class="btn-delete" onclick={delete}>{"×"}</button>
            </div>
            <div class="match-teams">
                { format!("{} vs {}", p.home_team, p.away_team) }
            </div>
            <div class="prediction-details">
                <div class="outcome">
                    <strong>{"Outcome:"}</strong>{ format!(" {}", p.match_outcome) }
                </div>
                <div class="goals">
                    <div>{ format!("Over 1.5: {}", p.goals.over15) }</div>
                    <div>{ format!("Over 2.5: {}", p.goals.over25) }</div>
                    <div>{ format!("BTTS: {}", p.goals.btts) }</div>
                </div>
            </div>
        </div>
    }
}
