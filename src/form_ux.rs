//! Three independent, stateless form behaviors, each attached once at
//! load and inert when its elements are absent. They live for the page
//! lifetime, so their closures are forgotten rather than kept for
//! removal.

use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, HtmlOptionElement, HtmlSelectElement};

const SCROLL_DELAY_MS: i32 = 500;

/// Selecting a team in one dropdown disables that team in the other.
pub fn init_team_exclusivity() {
    let home = dom::query("select[name=\"homeTeam\"]")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
    let away = dom::query("select[name=\"awayTeam\"]")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
    let (Some(home), Some(away)) = (home, away) else {
        return;
    };

    let update = {
        let home = home.clone();
        let away = away.clone();
        Rc::new(move || {
            let home_value = home.value();
            let away_value = away.value();
            disable_matching(&home, &away_value);
            disable_matching(&away, &home_value);
        })
    };

    for select in [&home, &away] {
        let update = update.clone();
        let cb = Closure::wrap(Box::new(move |_: Event| update()) as Box<dyn FnMut(_)>);
        let _ = select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn disable_matching(select: &HtmlSelectElement, taken: &str) {
    for i in 0..select.length() {
        if let Some(option) = select
            .item(i)
            .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
        {
            option.set_disabled(option.value() == taken);
        }
    }
}

/// On submit, swap the form for the loading indicator. There is no
/// re-enable path: the submission navigates the page.
pub fn init_submit_spinner() {
    let Some(form) = dom::by_id("predictionForm") else {
        return;
    };
    let Ok(form_el) = form.clone().dyn_into::<HtmlElement>() else {
        return;
    };
    let spinner = dom::by_id("loadingSpinner");
    let cb = Closure::wrap(Box::new(move |_: Event| {
        dom::hide(&form_el);
        if let Some(spinner) = spinner.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            dom::show_block(spinner);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// On submit, give the results a moment to land, then scroll to them.
pub fn init_scroll_to_results() {
    let Some(form) = dom::by_id("predictionForm") else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |_: Event| {
        let Some(win) = web_sys::window() else { return };
        let scroll = Closure::wrap(Box::new(move || {
            if let Some(section) = dom::by_id("predictionResultsSection") {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut()>);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            scroll.as_ref().unchecked_ref(),
            SCROLL_DELAY_MS,
        );
        scroll.forget();
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
    cb.forget();
}
