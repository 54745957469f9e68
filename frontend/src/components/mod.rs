pub mod assignment_card;
pub mod assignment_list;
pub mod assignment_modal;
pub mod badge;
pub mod hero;
pub mod stats_grid;
