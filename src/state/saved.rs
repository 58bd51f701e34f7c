//! User-authored prediction list. Mutations run through the reducer;
//! the owning component persists the whole list after every change.

use crate::model::SavedPrediction;
use crate::storage;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedPredictions {
    pub items: Vec<SavedPrediction>,
}

impl SavedPredictions {
    pub fn load() -> Self {
        Self {
            items: storage::load_list(storage::SAVED_PREDICTIONS_KEY),
        }
    }
}

pub enum SavedAction {
    Add(SavedPrediction),
    Delete(u64),
}

impl Reducible for SavedPredictions {
    type Action = SavedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            SavedAction::Add(prediction) => items.push(prediction),
            SavedAction::Delete(id) => items.retain(|p| p.id != id),
        }
        Rc::new(Self { items })
    }
}
