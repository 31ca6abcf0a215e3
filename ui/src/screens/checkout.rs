//! Checkout for an accepted quote: order summary plus contact details.

use std::collections::HashMap;
use std::time::Duration;

use api::quotes;
use dioxus::prelude::*;

use crate::compat;
use crate::components::empty_state::EmptyState;
use crate::components::loading::LoadingHandle;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::pico::Input;
use crate::components::pico::TextArea;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::components::validate::validate_form;
use crate::components::validate::FieldKind;
use crate::components::validate::FieldSpec;
use crate::currency::format_egp;
use crate::AppStateMut;
use crate::Screen;

const PLACE_ORDER_DELAY: Duration = Duration::from_millis(1000);

#[component]
pub fn Checkout(quote_id: u32) -> Element {
    let state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();
    let mut loading = use_context::<LoadingHandle>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut errors = use_signal(HashMap::<&'static str, String>::new);

    let Some(quote) = quotes::quote_by_id(quote_id) else {
        return rsx! {
            Container {
                EmptyState {
                    title: "Quote not found".to_string(),
                    description: Some("The selected quote is no longer available.".to_string()),
                    primary_action: Some(rsx! {
                        Button {
                            on_click: move |_| active_screen.set(Screen::Quotes),
                            "Back to quotes"
                        }
                    }),
                }
            }
        };
    };

    let mut cart = state_mut.cart;
    let place_order = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = vec![
            (
                FieldSpec::required("name", "Full Name", FieldKind::Text),
                name.peek().clone(),
            ),
            (
                FieldSpec::required("email", "Email", FieldKind::Email),
                email.peek().clone(),
            ),
            (
                FieldSpec::required("phone", "Phone", FieldKind::Tel),
                phone.peek().clone(),
            ),
            (
                FieldSpec::required("address", "Delivery Address", FieldKind::Text),
                address.peek().clone(),
            ),
        ];
        let failed = validate_form(&fields);
        if !failed.is_empty() {
            errors.set(failed.into_iter().map(|e| (e.name, e.message)).collect());
            toasts.push("Please correct the errors in the form", Severity::Error);
            return;
        }
        errors.write().clear();
        spawn(async move {
            loading.show("Placing your order...");
            compat::sleep(PLACE_ORDER_DELAY).await;
            loading.hide();
            cart.set(Vec::new());
            toasts.push("Order placed successfully!", Severity::Success);
            active_screen.set(Screen::Dashboard);
        });
    };

    rsx! {
        Container {
            h2 { "Checkout" }
            div {
                class: "checkout-layout",
                Card {
                    h4 { "Order summary" }
                    p { "{quote.service} \u{2014} {quote.vendor}" }
                    p { "Delivery in {quote.delivery_days} days" }
                    small { "{quote.notes}" }
                    p {
                        class: "quote-price",
                        {format_egp(quote.price, language)}
                    }
                }
                form {
                    onsubmit: place_order,
                    Input {
                        label: "Full Name".to_string(),
                        name: "name".to_string(),
                        required: true,
                        value: name(),
                        error: errors.read().get("name").cloned(),
                        on_input: move |evt: FormEvent| name.set(evt.value()),
                    }
                    Input {
                        label: "Email".to_string(),
                        name: "email".to_string(),
                        input_type: "email".to_string(),
                        required: true,
                        value: email(),
                        error: errors.read().get("email").cloned(),
                        on_input: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        label: "Phone".to_string(),
                        name: "phone".to_string(),
                        input_type: "tel".to_string(),
                        required: true,
                        value: phone(),
                        error: errors.read().get("phone").cloned(),
                        on_input: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    TextArea {
                        label: "Delivery Address".to_string(),
                        name: "address".to_string(),
                        value: address(),
                        error: errors.read().get("address").cloned(),
                        on_input: move |evt: FormEvent| address.set(evt.value()),
                    }
                    Button { "Place Order" }
                }
            }
        }
    }
}
