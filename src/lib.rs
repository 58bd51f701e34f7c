//! Browser behavior layer for the footy prediction pages.
//!
//! Each page controller mounts into (or binds onto) a load-bearing
//! element when the current page has it and stays inert otherwise, so
//! one bundle serves every page of the site.

pub mod api;
pub mod components;
pub mod dom;
pub mod error;
pub mod form_ux;
pub mod model;
pub mod state;
pub mod storage;
pub mod util;

use components::live_scores::LiveScores;
use components::pitch::PitchScene;
use components::save_panel::SavePanel;
use components::saved_list::SavedList;
use components::today_panel::TodayPanel;
use yew::BaseComponent;

/// Page bootstrap: attach the form behaviors and mount every controller
/// whose root element exists on this page.
pub fn start() {
    form_ux::init_team_exclusivity();
    form_ux::init_submit_spinner();
    form_ux::init_scroll_to_results();

    mount_by_id::<TodayPanel>("live-predictions");
    mount_by_id::<LiveScores>("liveScores");
    mount_by_selector::<SavedList>(".today-predictions");
    mount_by_id::<SavePanel>("savedPredictionsList");
    mount_by_id::<PitchScene>("threejs-container");
}

fn mount_by_id<C>(id: &str)
where
    C: BaseComponent,
    C::Properties: Default,
{
    if let Some(root) = dom::by_id(id) {
        yew::Renderer::<C>::with_root(root).render();
    }
}

fn mount_by_selector<C>(selector: &str)
where
    C: BaseComponent,
    C::Properties: Default,
{
    if let Some(root) = dom::query(selector) {
        yew::Renderer::<C>::with_root(root).render();
    }
}
