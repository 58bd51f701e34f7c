//! Server-acknowledged submission history. The full list is retained in
//! storage; only the most recent entries render.

use crate::model::SubmittedPrediction;
use crate::storage;
use std::rc::Rc;
use yew::Reducible;

/// How many history entries the recent widget shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmittedHistory {
    pub items: Vec<SubmittedPrediction>,
}

impl SubmittedHistory {
    pub fn load() -> Self {
        Self {
            items: storage::load_list(storage::SUBMITTED_PREDICTIONS_KEY),
        }
    }

    /// Newest first, capped at [`RECENT_LIMIT`].
    pub fn recent(&self) -> Vec<&SubmittedPrediction> {
        self.items.iter().rev().take(RECENT_LIMIT).collect()
    }
}

pub enum SubmittedAction {
    Record(SubmittedPrediction),
}

impl Reducible for SubmittedHistory {
    type Action = SubmittedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            SubmittedAction::Record(prediction) => items.push(prediction),
        }
        Rc::new(Self { items })
    }
}
