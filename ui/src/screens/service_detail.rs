//! Single service page: gallery, info tabs, quantity pricing, rating, and
//! the quote request modal.

use std::collections::HashMap;

use api::catalog;
use chrono::Utc;
use dioxus::prelude::*;

use crate::components::breadcrumb::ScreenBreadcrumb;
use crate::components::gallery::Gallery;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Container;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::components::pico::TextArea;
use crate::components::rating::StarRating;
use crate::components::stepper::QuantityStepper;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::components::upload::FileUpload;
use crate::components::upload::PendingFile;
use crate::components::validate::validate_form;
use crate::components::validate::FieldKind;
use crate::components::validate::FieldSpec;
use crate::currency::format_egp;
use crate::i18n::tr;
use crate::AppStateMut;
use crate::ModalId;
use crate::Screen;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum InfoTab {
    #[default]
    Description,
    Specifications,
    Reviews,
}

#[component]
pub fn ServiceDetail(id: u32) -> Element {
    let mut state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();

    let language = (state_mut.language)();

    let mut tab = use_signal(InfoTab::default);
    let quantity = use_signal(|| 1u32);
    let my_rating = use_signal(|| 0u8);

    // quote request form
    let mut form_name = use_signal(String::new);
    let mut form_email = use_signal(String::new);
    let mut form_phone = use_signal(String::new);
    let mut form_date = use_signal(String::new);
    let mut form_notes = use_signal(String::new);
    let mut form_errors = use_signal(HashMap::<&'static str, String>::new);
    let mut files = use_signal(Vec::<PendingFile>::new);

    let Some(service) = catalog::service_by_id(id) else {
        return rsx! {
            Container {
                crate::components::empty_state::EmptyState {
                    title: "Service not found".to_string(),
                    description: Some("The service you followed no longer exists.".to_string()),
                }
            }
        };
    };

    let mut images = vec![service.image.clone()];
    images.extend(service.gallery.iter().cloned());
    let total = format_egp(service.base_price * quantity() as f64, language);
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let service_id = service.id;

    let submit_quote = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = vec![
            (
                FieldSpec::required("name", "Full Name", FieldKind::Text),
                form_name.peek().clone(),
            ),
            (
                FieldSpec::required("email", "Email", FieldKind::Email),
                form_email.peek().clone(),
            ),
            (
                FieldSpec::required("phone", "Phone", FieldKind::Tel),
                form_phone.peek().clone(),
            ),
            (
                FieldSpec::required("date", "Needed By", FieldKind::Text),
                form_date.peek().clone(),
            ),
        ];
        let errors = validate_form(&fields);
        if !errors.is_empty() {
            form_errors.set(errors.into_iter().map(|e| (e.name, e.message)).collect());
            toasts.push("Please correct the errors in the form", Severity::Error);
            return;
        }
        form_errors.write().clear();
        state_mut.close_modal();
        toasts.push("Quote request submitted successfully!", Severity::Success);
        form_name.set(String::new());
        form_email.set(String::new());
        form_phone.set(String::new());
        form_date.set(String::new());
        form_notes.set(String::new());
        files.set(Vec::new());
    };

    rsx! {
        Container {
            ScreenBreadcrumb {
                trail: vec![
                    ("Home".to_string(), Some(Screen::Home)),
                    ("Services".to_string(), Some(Screen::Services { query: None })),
                    (service.name.clone(), None),
                ],
            }

            div {
                class: "detail-layout",
                Gallery {
                    images: images.clone(),
                    alt: service.name.clone(),
                }
                section {
                    class: "detail-info",
                    h2 { "{service.name}" }
                    p { class: "service-vendor", "{service.vendor} \u{00B7} \u{2605} {service.rating}" }
                    p { class: "service-price", {format_egp(service.base_price, language)} }

                    div {
                        class: "quantity-row",
                        QuantityStepper { quantity }
                        strong { "Total: {total}" }
                    }

                    div {
                        class: "detail-actions",
                        Button {
                            on_click: move |_| {
                                state_mut.add_to_cart(service_id);
                                toasts.push("Added to cart successfully!", Severity::Success);
                            },
                            "Add to Cart"
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            on_click: move |_| state_mut.open_modal(ModalId::QuoteRequest),
                            {tr(language, "get_quote")}
                        }
                    }

                    div {
                        class: "rate-service",
                        span { "Rate this service:" }
                        StarRating { rating: my_rating }
                    }
                }
            }

            nav {
                class: "info-tabs",
                ul {
                    li {
                        a {
                            href: "#",
                            class: if tab() == InfoTab::Description { "active" } else { "" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                tab.set(InfoTab::Description);
                            },
                            "Description"
                        }
                    }
                    li {
                        a {
                            href: "#",
                            class: if tab() == InfoTab::Specifications { "active" } else { "" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                tab.set(InfoTab::Specifications);
                            },
                            "Specifications"
                        }
                    }
                    li {
                        a {
                            href: "#",
                            class: if tab() == InfoTab::Reviews { "active" } else { "" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                tab.set(InfoTab::Reviews);
                            },
                            "Reviews ({service.reviews.len()})"
                        }
                    }
                }
            }
            section {
                class: "info-panel",
                match tab() {
                    InfoTab::Description => rsx! {
                        p { "{service.description}" }
                    },
                    InfoTab::Specifications => rsx! {
                        table {
                            tbody {
                                for (key, value) in service.specs.iter() {
                                    tr {
                                        th { "{key}" }
                                        td { "{value}" }
                                    }
                                }
                            }
                        }
                    },
                    InfoTab::Reviews => rsx! {
                        for review in service.reviews.iter() {
                            article {
                                class: "review",
                                strong { "{review.author}" }
                                span { class: "review-stars", {"\u{2605}".repeat(review.rating as usize)} }
                                p { "{review.comment}" }
                            }
                        }
                    },
                }
            }

            Modal {
                open: state_mut.is_modal_open(ModalId::QuoteRequest),
                title: tr(language, "get_quote").to_string(),
                on_close: move |_| state_mut.close_modal(),
                form {
                    onsubmit: submit_quote,
                    Input {
                        label: "Full Name".to_string(),
                        name: "name".to_string(),
                        required: true,
                        value: form_name(),
                        error: form_errors.read().get("name").cloned(),
                        on_input: move |evt: FormEvent| form_name.set(evt.value()),
                    }
                    Input {
                        label: "Email".to_string(),
                        name: "email".to_string(),
                        input_type: "email".to_string(),
                        required: true,
                        value: form_email(),
                        error: form_errors.read().get("email").cloned(),
                        on_input: move |evt: FormEvent| form_email.set(evt.value()),
                    }
                    Input {
                        label: "Phone".to_string(),
                        name: "phone".to_string(),
                        input_type: "tel".to_string(),
                        required: true,
                        value: form_phone(),
                        error: form_errors.read().get("phone").cloned(),
                        on_input: move |evt: FormEvent| form_phone.set(evt.value()),
                    }
                    Input {
                        label: "Needed By".to_string(),
                        name: "date".to_string(),
                        input_type: "date".to_string(),
                        min: today,
                        required: true,
                        value: form_date(),
                        error: form_errors.read().get("date").cloned(),
                        on_input: move |evt: FormEvent| form_date.set(evt.value()),
                    }
                    TextArea {
                        label: "Notes".to_string(),
                        name: "notes".to_string(),
                        placeholder: "Paper stock, finish, delivery details...".to_string(),
                        value: form_notes(),
                        on_input: move |evt: FormEvent| form_notes.set(evt.value()),
                    }
                    FileUpload { files }
                    footer {
                        Button { "Submit Request" }
                    }
                }
            }
        }
    }
}
