//! Quote comparison: vendor quote cards, a sortable comparison table, and
//! the select-confirm-checkout flow.

use std::time::Duration;

use api::quotes;
use dioxus::prelude::*;

use crate::compat;
use crate::components::data_table::DataTable;
use crate::components::data_table::DataTableOptions;
use crate::components::loading::LoadingHandle;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::ConfirmModal;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::currency::format_egp;
use crate::i18n::tr;
use crate::AppStateMut;
use crate::ModalId;
use crate::Screen;

const SELECT_DELAY: Duration = Duration::from_millis(1000);
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[component]
pub fn Quotes() -> Element {
    let mut state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();
    let mut loading = use_context::<LoadingHandle>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();
    let all = quotes::quotes_for_request();

    let mut confirmed = move |quote_id: u32| {
        state_mut.close_modal();
        spawn(async move {
            loading.show("Processing your selection...");
            compat::sleep(SELECT_DELAY).await;
            loading.hide();
            toasts.push(
                "Quote selected successfully! Redirecting to checkout...",
                Severity::Success,
            );
            compat::sleep(REDIRECT_DELAY).await;
            active_screen.set(Screen::Checkout(quote_id));
        });
    };

    let pending = all.first().map(|q| q.service.clone()).unwrap_or_default();
    let rows: Vec<Vec<String>> = all
        .iter()
        .map(|quote| {
            vec![
                quote.vendor.clone(),
                format!("{:.0}", quote.price),
                format!("{} days", quote.delivery_days),
                format!("{:.1}", quote.vendor_rating),
            ]
        })
        .collect();

    rsx! {
        Container {
            header {
                class: "quotes-header",
                h2 { {tr(language, "compare_quotes")} }
                p { "Quotes received for your {pending} request." }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| compat::print_page(),
                    i { class: "fas fa-print" }
                    " Print"
                }
            }

            Grid {
                for quote in all.iter().cloned() {
                    {
                        let quote_id = quote.id;
                        rsx! {
                            Card {
                                h4 { "{quote.vendor}" }
                                p { class: "quote-price", {format_egp(quote.price, language)} }
                                p { "Delivery in {quote.delivery_days} days" }
                                p { "\u{2605} {quote.vendor_rating}" }
                                small { "{quote.notes}" }
                                Button {
                                    on_click: move |_| state_mut.open_modal(ModalId::ConfirmQuote(quote_id)),
                                    "Select"
                                }
                            }
                        }
                    }
                }
            }

            section {
                h3 { "Side by side" }
                DataTable {
                    headers: vec![
                        "Vendor".to_string(),
                        "Price (EGP)".to_string(),
                        "Delivery".to_string(),
                        "Rating".to_string(),
                    ],
                    rows,
                    options: DataTableOptions {
                        searchable: false,
                        ..Default::default()
                    },
                }
            }

            {
                let pending_confirm = match *state_mut.active_modal.read() {
                    Some(ModalId::ConfirmQuote(quote_id)) => Some(quote_id),
                    _ => None,
                };
                pending_confirm.map(|quote_id| rsx! {
                    ConfirmModal {
                        open: true,
                        title: "Select quote".to_string(),
                        message: "Are you sure you want to select this quote?".to_string(),
                        confirm_label: "Select".to_string(),
                        on_confirm: move |_| confirmed(quote_id),
                        on_cancel: move |_| state_mut.close_modal(),
                    }
                })
            }
        }
    }
}
