//! Defines the mutable, reactive state for the application's UI.

use api::auth::User;
use api::prefs::language::Language;
use dioxus::prelude::*;

/// One line in the mock cart. Lines are never deduplicated: adding the same
/// service twice yields two lines. The cart is in-memory only and empties on
/// reload.
#[derive(Clone, PartialEq, Debug)]
pub struct CartLine {
    pub service_id: u32,
    pub name: String,
    /// Unit price in EGP.
    pub unit_price: f64,
    pub quantity: u32,
    pub vendor: String,
}

/// Identifies which application modal is open. At most one is tracked at a
/// time; opening another replaces it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ModalId {
    QuoteRequest,
    ConfirmQuote(u32),
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub language: Signal<Language>,
    /// The mock authenticated user. `None` when signed out.
    pub user: Signal<Option<User>>,
    pub cart: Signal<Vec<CartLine>>,
    pub active_modal: Signal<Option<ModalId>>,
}

impl AppStateMut {
    /// Opens `id`, replacing whatever modal was tracked before.
    pub fn open_modal(&mut self, id: ModalId) {
        self.active_modal.set(Some(id));
    }

    /// Closing when nothing is open is a no-op.
    pub fn close_modal(&mut self) {
        if self.active_modal.peek().is_some() {
            self.active_modal.set(None);
        }
    }

    pub fn is_modal_open(&self, id: ModalId) -> bool {
        *self.active_modal.read() == Some(id)
    }

    // TODO: look up the clicked service once a real catalog API exists. The
    // original frontend appends this fixed line no matter which service was
    // clicked, and that behavior is preserved.
    pub fn add_to_cart(&mut self, service_id: u32) {
        self.cart.write().push(stub_cart_line(service_id));
    }

    pub fn remove_cart_line(&mut self, index: usize) {
        let mut cart = self.cart.write();
        if index < cart.len() {
            cart.remove(index);
        }
    }

    pub fn cart_count(&self) -> usize {
        self.cart.read().len()
    }
}

/// The hard-coded line the original "add to cart" always produces.
pub fn stub_cart_line(service_id: u32) -> CartLine {
    CartLine {
        service_id,
        name: "Business Cards".to_string(),
        unit_price: 250.0,
        quantity: 1,
        vendor: "PrintPro Egypt".to_string(),
    }
}

pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .map(|line| line.unit_price * line.quantity as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_lines_are_not_deduplicated() {
        let mut lines = Vec::new();
        lines.push(stub_cart_line(1));
        lines.push(stub_cart_line(1));
        assert_eq!(lines.len(), 2);
        assert_eq!(cart_total(&lines), 500.0);
    }

    #[test]
    fn stub_line_ignores_the_clicked_service() {
        let line = stub_cart_line(42);
        assert_eq!(line.service_id, 42);
        assert_eq!(line.name, "Business Cards");
        assert_eq!(line.unit_price, 250.0);
        assert_eq!(line.vendor, "PrintPro Egypt");
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }
}
