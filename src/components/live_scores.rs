use crate::api;
use crate::dom;
use crate::model::{LiveMatch, MatchStatus, MinuteLabel};
use crate::util::{clog, format_kickoff, last_updated_label};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const REFRESH_INTERVAL_MS: i32 = 180_000;

#[derive(Clone, PartialEq)]
enum ScoresState {
    Loading,
    Ready(Vec<LiveMatch>),
    Failed(String),
}

/// Live scoreboard: one cycle immediately, then every three minutes for
/// the page lifetime. Cycles are independent; a failed one reports and
/// the next simply tries again.
#[function_component(LiveScores)]
pub fn live_scores() -> Html {
    let state = use_state(|| ScoresState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let refresh = {
                let state = state.clone();
                Rc::new(move || {
                    state.set(ScoresState::Loading);
                    let state = state.clone();
                    spawn_local(async move {
                        clog("Fetching live scores...");
                        match api::fetch_live_scores().await {
                            Ok(matches) => {
                                dom::set_last_updated(&last_updated_label());
                                state.set(ScoresState::Ready(matches));
                            }
                            Err(err) => state.set(ScoresState::Failed(err.to_string())),
                        }
                    });
                })
            };
            refresh();
            let tick = {
                let refresh = refresh.clone();
                Closure::wrap(Box::new(move || refresh()) as Box<dyn FnMut()>)
            };
            let interval_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    REFRESH_INTERVAL_MS,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(interval_id);
                drop(tick);
            }
        });
    }

    match &*state {
        ScoresState::Loading => html! {
            <div class="text-center p-4">
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
            </div>
        },
        ScoresState::Failed(message) => html! {
            <div class="alert alert-danger" role="alert">
                <i class="fas fa-exclamation-circle"></i>
                { format!(" Error loading live scores: {message}") }
            </div>
        },
        ScoresState::Ready(matches) if matches.is_empty() => html! {
            <div class="text-center p-4">
                <i class="fas fa-calendar-times"></i>
                <p class="mb-0">{"No live matches currently"}</p>
            </div>
        },
        ScoresState::Ready(matches) => html! {
            <>
                { for matches.iter().map(|m| html! { <LiveMatchCard live={m.clone()} /> }) }
            </>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LiveMatchCardProps {
    pub live: LiveMatch,
}

#[function_component(LiveMatchCard)]
pub fn live_match_card(props: &LiveMatchCardProps) -> Html {
    let m = &props.live;
    let minute = match m.minute_label() {
        MinuteLabel::Elapsed(Some(min)) => format!("{min}'"),
        MinuteLabel::Elapsed(None) => String::new(),
        MinuteLabel::KickOff(utc) => format_kickoff(&utc),
    };
    let (home_score, away_score) = m.score_pair();
    html! {
        <div class="live-match-card">
            <div class="match-header">
                <span class="competition-name">{ m.competition_name() }</span>
                <span class="match-minute">{ minute }</span>
            </div>
            <div class="match-teams">
                <div class="team home">
                    <span class="team-name">{ &m.home_team.name }</span>
                    <span class="score">{ home_score }</span>
                </div>
                <div class="score-divider">{"-"}</div>
                <div class="team away">
                    <span class="team-name">{ &m.away_team.name }</span>
                    <span class="score">{ away_score }</span>
                </div>
            </div>
            <div class="match-status">
                { status_badge(&m.status) }
            </div>
        </div>
    }
}

// Unrecognized statuses render verbatim, without badge styling.
fn status_badge(status: &MatchStatus) -> Html {
    match status.badge() {
        Some(badge) => html! { <span class={badge.class}>{ badge.label }</span> },
        None => html! { { status.wire_label().to_string() } },
    }
}
