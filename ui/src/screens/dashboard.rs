//! Customer dashboard: order history table behind the auth gate.

use api::auth;
use api::catalog;
use dioxus::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Container;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::currency::format_egp;
use crate::i18n::tr;
use crate::AppStateMut;
use crate::Screen;

#[component]
pub fn Dashboard() -> Element {
    let state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();
    let mut sidebar_open = use_signal(|| true);

    let Some(user) = state_mut.user.read().clone() else {
        return rsx! {
            Container {
                EmptyState {
                    title: "Sign in to see your dashboard".to_string(),
                    description: Some("Your orders and quotes live behind a sign-in.".to_string()),
                    icon: Some(rsx! { i { class: "fas fa-user-lock" } }),
                    primary_action: Some(rsx! {
                        Button {
                            on_click: move |_| active_screen.set(Screen::Login),
                            {tr(language, "sign_in")}
                        }
                    }),
                }
            }
        };
    };

    let mut user_signal = state_mut.user;
    let logout = move |_| {
        auth::end_session();
        user_signal.set(None);
        toasts.push("Logged out successfully", Severity::Success);
        active_screen.set(Screen::Home);
    };

    let rows: Vec<Vec<String>> = catalog::orders()
        .into_iter()
        .map(|order| {
            vec![
                order.reference,
                order.service,
                order.vendor,
                order.placed_on,
                order.status,
                format_egp(order.total, language),
            ]
        })
        .collect();

    rsx! {
        Container {
            div {
                class: "dashboard-layout",
                aside {
                    class: if sidebar_open() { "dashboard-sidebar open" } else { "dashboard-sidebar" },
                    button {
                        class: "sidebar-toggle",
                        "aria-label": "Toggle sidebar",
                        onclick: move |_| {
                            let open = *sidebar_open.peek();
                            sidebar_open.set(!open);
                        },
                        i { class: "fas fa-bars" }
                    }
                    if sidebar_open() {
                        div {
                            class: "user-card",
                            strong { "{user.name}" }
                            small { "{user.email}" }
                            small { class: "user-role", "{user.role}" }
                        }
                        nav {
                            ul {
                                li { a { href: "#", class: "active", {tr(language, "dashboard")} } }
                                li {
                                    a {
                                        href: "#",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            active_screen.set(Screen::Quotes);
                                        },
                                        {tr(language, "compare_quotes")}
                                    }
                                }
                                li {
                                    a {
                                        href: "#",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            active_screen.set(Screen::Cart);
                                        },
                                        {tr(language, "cart")}
                                    }
                                }
                            }
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: logout,
                            {tr(language, "logout")}
                        }
                    }
                }

                section {
                    class: "dashboard-main",
                    h2 { {tr(language, "dashboard")} }
                    p { "Welcome back, {user.name}." }
                    h3 { "Your orders" }
                    DataTable {
                        headers: vec![
                            "Order".to_string(),
                            "Service".to_string(),
                            "Vendor".to_string(),
                            "Date".to_string(),
                            "Status".to_string(),
                            "Total".to_string(),
                        ],
                        rows,
                    }
                }
            }
        }
    }
}
