//! The in-memory cart. Contents do not survive a reload.

use dioxus::prelude::*;

use crate::app_state_mut::cart_total;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Container;
use crate::currency::format_egp;
use crate::i18n::tr;
use crate::AppStateMut;
use crate::Screen;

#[component]
pub fn Cart() -> Element {
    let mut state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();
    let lines = state_mut.cart.read().clone();
    let total = cart_total(&lines);

    rsx! {
        Container {
            h2 { {tr(language, "cart")} }
            if lines.is_empty() {
                EmptyState {
                    title: "Your cart is empty".to_string(),
                    description: Some("Browse the catalog and add a service to get started.".to_string()),
                    icon: Some(rsx! { i { class: "fas fa-shopping-cart" } }),
                    primary_action: Some(rsx! {
                        Button {
                            on_click: move |_| active_screen.set(Screen::Services { query: None }),
                            {tr(language, "services")}
                        }
                    }),
                }
            } else {
                table {
                    thead {
                        tr {
                            th { "Service" }
                            th { "Vendor" }
                            th { "Qty" }
                            th { "Price" }
                            th { "" }
                        }
                    }
                    tbody {
                        for (index, line) in lines.iter().cloned().enumerate() {
                            tr {
                                key: "{index}",
                                td { "{line.name}" }
                                td { "{line.vendor}" }
                                td { "{line.quantity}" }
                                td { {format_egp(line.unit_price * line.quantity as f64, language)} }
                                td {
                                    button {
                                        class: "cart-remove",
                                        title: "Remove from cart",
                                        onclick: move |_| state_mut.remove_cart_line(index),
                                        "\u{00D7}"
                                    }
                                }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            th { colspan: 3, "Total" }
                            th { colspan: 2, {format_egp(total, language)} }
                        }
                    }
                }
                Button {
                    on_click: move |_| active_screen.set(Screen::Quotes),
                    {tr(language, "compare_quotes")}
                }
            }
        }
    }
}
