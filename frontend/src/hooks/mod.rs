pub mod use_locale;
pub mod use_selection;
