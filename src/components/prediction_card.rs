use crate::model::{AWAY_WIN, DRAW, HOME_WIN, PredictionRecord};
use crate::util::format_kickoff;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PredictionCardProps {
    pub record: PredictionRecord,
}

#[function_component(PredictionCard)]
pub fn prediction_card(props: &PredictionCardProps) -> Html {
    let record = &props.record;
    let info = &record.match_info;
    html! {
        <div class="prediction-card">
            <div class="match-info">
                <span class="competition">{ &info.competition }</span>
                <span class="kickoff">{ format_kickoff(&info.kickoff) }</span>
            </div>
            <div class="teams">
                <span class="home-team">{ &info.home_team }</span>
                <span class="vs">{"vs"}</span>
                <span class="away-team">{ &info.away_team }</span>
            </div>
            <div class="prediction">
                <h4>{ format!("Predicted Outcome: {}", record.outcome()) }</h4>
                <div class="probabilities">
                    <ProbabilityBar label="Home Win" percent={record.probability(HOME_WIN).to_string()} />
                    <ProbabilityBar label="Draw" percent={record.probability(DRAW).to_string()} />
                    <ProbabilityBar label="Away Win" percent={record.probability(AWAY_WIN).to_string()} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProbabilityBarProps {
    pub label: &'static str,
    /// Percent string straight from the backend; used unchanged for both
    /// the fill width and the readout.
    pub percent: String,
}

#[function_component(ProbabilityBar)]
pub fn probability_bar(props: &ProbabilityBarProps) -> Html {
    html! {
        <div class="prob-bar">
            <label>{ props.label }</label>
            <div class="bar">
                <div class="fill" style={format!("width: {}", props.percent)}></div>
            </div>
            <span>{ &props.percent }</span>
        </div>
    }
}
