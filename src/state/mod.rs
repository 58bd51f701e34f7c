pub mod saved;
pub mod submitted;

pub use saved::{SavedAction, SavedPredictions};
pub use submitted::{SubmittedAction, SubmittedHistory};
