//! Shared data layer for the PrintHub marketplace client.
//!
//! There is no real backend yet. Everything in this crate returns hard-coded
//! sample data; the UI layer adds fixed delays in front of these calls to
//! stand in for future API latency.

pub mod auth;
pub mod catalog;
pub mod prefs;
pub mod quotes;
pub mod store;

pub type ApiError = anyhow::Error;
