pub mod live_scores;
pub mod pitch;
pub mod prediction_card;
pub mod save_panel;
pub mod saved_list;
pub mod today_panel;
