pub mod language;
pub mod user_prefs;
