//! Landing screen: hero with search, promotion countdown, featured services.

use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::components::countdown::Countdown;
use crate::components::lazy_image::LazyImage;
use crate::components::loading::LoadingHandle;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::currency::format_egp;
use crate::i18n::tr;
use crate::AppState;
use crate::AppStateMut;
use crate::Screen;

/// Queries shorter than this raise a warning instead of searching.
pub const MIN_QUERY_CHARS: usize = 2;
const SEARCH_DELAY: Duration = Duration::from_millis(500);

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();
    let mut loading = use_context::<LoadingHandle>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();
    let mut query = use_signal(String::new);

    let mut run_search = move || {
        let text = query.peek().trim().to_string();
        if text.chars().count() < MIN_QUERY_CHARS {
            toasts.push("Please enter at least 2 characters", Severity::Warning);
            return;
        }
        spawn(async move {
            loading.show("Searching...");
            compat::sleep(SEARCH_DELAY).await;
            loading.hide();
            active_screen.set(Screen::Services { query: Some(text) });
        });
    };

    let featured: Vec<_> = state.services.iter().take(4).cloned().collect();

    rsx! {
        Container {
            section {
                class: "hero",
                h1 { {tr(language, "welcome")} }
                p { "Compare quotes from Egypt's best print shops in one place." }
                form {
                    role: "search",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        run_search();
                    },
                    input {
                        r#type: "search",
                        placeholder: tr(language, "search"),
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    Button { "Search" }
                }
                Countdown {
                    end: state.promo_ends,
                    label: "Summer promotion ends in".to_string(),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| compat::scroll_to("featured-services"),
                    "Browse featured services"
                }
            }

            section {
                id: "featured-services",
                h2 { {tr(language, "services")} }
                Grid {
                    for service in featured {
                        {
                            let card_target = Screen::ServiceDetail(service.id);
                            rsx! {
                                Card {
                                    LazyImage {
                                        src: service.image.clone(),
                                        alt: service.name.clone(),
                                        class: "service-card-image".to_string(),
                                    }
                                    h4 { "{service.name}" }
                                    p { class: "service-vendor", "{service.vendor}" }
                                    p { class: "service-price", {format_egp(service.base_price, language)} }
                                    Button {
                                        outline: true,
                                        on_click: move |_| active_screen.set(card_target.clone()),
                                        "View details"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
