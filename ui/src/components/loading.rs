//! Full-area loading overlay with a counted handle.
//!
//! Balanced show/hide pairs share a single overlay node and a counter.
//! Hiding an overlay that was never shown is a no-op.

use dioxus::prelude::*;

/// Pure overlay state, kept separate from the signal so the semantics are
/// unit-testable.
#[derive(Clone, PartialEq, Debug)]
pub struct OverlayState {
    count: u32,
    message: String,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            count: 0,
            message: "Loading...".to_string(),
        }
    }
}

impl OverlayState {
    pub fn show(&mut self, message: &str) {
        self.count += 1;
        self.message = message.to_string();
    }

    /// Saturates at zero: hiding an unshown overlay changes nothing.
    pub fn hide(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn is_visible(&self) -> bool {
        self.count > 0
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Context handle controlling the app-wide overlay.
#[derive(Clone, Copy)]
pub struct LoadingHandle {
    state: Signal<OverlayState>,
}

impl LoadingHandle {
    pub fn new(state: Signal<OverlayState>) -> Self {
        Self { state }
    }

    pub fn show(&mut self, message: &str) {
        self.state.write().show(message);
    }

    pub fn hide(&mut self) {
        self.state.write().hide();
    }
}

#[component]
pub fn LoadingOverlay() -> Element {
    let handle = use_context::<LoadingHandle>();
    let state = handle.state.read();
    if !state.is_visible() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "loading-overlay",
            div {
                class: "loading-content",
                div { class: "loading-spinner" }
                div { class: "loading-message", "{state.message()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_by_default() {
        assert!(!OverlayState::default().is_visible());
    }

    #[test]
    fn hiding_an_unshown_overlay_is_a_no_op() {
        let mut state = OverlayState::default();
        state.hide();
        state.hide();
        assert!(!state.is_visible());
    }

    #[test]
    fn nested_shows_need_matching_hides() {
        let mut state = OverlayState::default();
        state.show("Loading...");
        state.show("Still loading...");
        assert!(state.is_visible());
        assert_eq!(state.message(), "Still loading...");

        state.hide();
        assert!(state.is_visible());
        state.hide();
        assert!(!state.is_visible());
    }
}
