//! Browse screen: the full catalog behind a filter sidebar, optionally
//! pre-narrowed by a search query carried over from the home screen.

use std::collections::HashSet;

use api::catalog;
use api::catalog::ServiceCategory;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::empty_state::EmptyState;
use crate::components::lazy_image::LazyImage;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::currency::format_egp;
use crate::filters::FilterSet;
use crate::AppState;
use crate::AppStateMut;
use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ServicesProps {
    #[props(optional)]
    pub query: Option<String>,
}

#[component]
pub fn Services(props: ServicesProps) -> Element {
    let state = use_context::<AppState>();
    let mut state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();

    let categories = use_signal(HashSet::<ServiceCategory>::new);
    let vendors = use_signal(HashSet::<String>::new);
    let min_price = use_signal(String::new);
    let max_price = use_signal(String::new);

    // rebuilt wholesale from the controls on every change
    let filter = use_memo(move || {
        FilterSet::from_inputs(
            &categories.read(),
            &vendors.read(),
            &min_price.read(),
            &max_price.read(),
        )
    });

    let base = match props.query.as_deref() {
        Some(query) if !query.trim().is_empty() => catalog::search(&state.services, query.trim()),
        _ => state.services.clone(),
    };
    let visible: Vec<_> = base
        .iter()
        .filter(|service| filter.read().matches(service))
        .cloned()
        .collect();
    let count = visible.len();

    rsx! {
        Container {
            if let Some(query) = props.query.as_deref().filter(|q| !q.trim().is_empty()) {
                p { class: "search-summary", "Results for \u{201C}{query}\u{201D}" }
            }
            div {
                class: "services-layout",
                aside {
                    class: "filter-sidebar",
                    h4 { "Categories" }
                    for category in ServiceCategory::iter() {
                        {
                            let mut selected = categories;
                            rsx! {
                                label {
                                    key: "{category}",
                                    input {
                                        r#type: "checkbox",
                                        checked: categories.read().contains(&category),
                                        onchange: move |evt: FormEvent| {
                                            let mut set = selected.write();
                                            if evt.checked() {
                                                set.insert(category);
                                            } else {
                                                set.remove(&category);
                                            }
                                        },
                                    }
                                    {category.label()}
                                }
                            }
                        }
                    }

                    h4 { "Vendors" }
                    for vendor in state.vendors.iter().map(|v| v.name.clone()) {
                        {
                            let mut selected = vendors;
                            let name = vendor.clone();
                            rsx! {
                                label {
                                    key: "{vendor}",
                                    input {
                                        r#type: "checkbox",
                                        checked: vendors.read().contains(&name),
                                        onchange: move |evt: FormEvent| {
                                            let mut set = selected.write();
                                            if evt.checked() {
                                                set.insert(name.clone());
                                            } else {
                                                set.remove(&name);
                                            }
                                        },
                                    }
                                    "{vendor}"
                                }
                            }
                        }
                    }

                    h4 { "Price (EGP)" }
                    div {
                        class: "price-inputs",
                        {
                            let mut min_price = min_price;
                            let mut max_price = max_price;
                            rsx! {
                                input {
                                    r#type: "number",
                                    placeholder: "Min",
                                    value: "{min_price}",
                                    oninput: move |evt| min_price.set(evt.value()),
                                }
                                input {
                                    r#type: "number",
                                    placeholder: "Max",
                                    value: "{max_price}",
                                    oninput: move |evt| max_price.set(evt.value()),
                                }
                            }
                        }
                    }
                }

                section {
                    class: "services-results",
                    p {
                        class: "result-count",
                        if count == 1 { "1 service found" } else { "{count} services found" }
                    }
                    if visible.is_empty() {
                        EmptyState {
                            title: "No services match your filters".to_string(),
                            description: Some(
                                "Try widening the price range or clearing a category.".to_string(),
                            ),
                            icon: Some(rsx! { i { class: "fas fa-search" } }),
                        }
                    }
                    div {
                        class: "grid",
                        for service in visible {
                            {
                                let detail = Screen::ServiceDetail(service.id);
                                let service_id = service.id;
                                rsx! {
                                    Card {
                                        LazyImage {
                                            src: service.image.clone(),
                                            alt: service.name.clone(),
                                            class: "service-card-image".to_string(),
                                        }
                                        h4 { "{service.name}" }
                                        p { class: "service-vendor", "{service.vendor} \u{00B7} \u{2605} {service.rating}" }
                                        p { class: "service-price", {format_egp(service.base_price, language)} }
                                        div {
                                            class: "card-actions",
                                            Button {
                                                outline: true,
                                                on_click: move |_| active_screen.set(detail.clone()),
                                                "View details"
                                            }
                                            Button {
                                                on_click: move |_| {
                                                    state_mut.add_to_cart(service_id);
                                                    toasts.push("Added to cart successfully!", Severity::Success);
                                                },
                                                "Add to Cart"
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
    }
}
