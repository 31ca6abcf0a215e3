//! Sign-in and sign-up. Authentication is simulated: any valid form signs
//! in the demo user after a short delay.

use std::collections::HashMap;
use std::time::Duration;

use api::auth;
use dioxus::prelude::*;

use crate::compat;
use crate::components::loading::LoadingHandle;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::pico::Input;
use crate::components::toast::Severity;
use crate::components::toast::Toasts;
use crate::components::validate::validate_form;
use crate::components::validate::FieldKind;
use crate::components::validate::FieldSpec;
use crate::i18n::tr;
use crate::AppStateMut;
use crate::Screen;

const LOGIN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

#[component]
pub fn Login() -> Element {
    let state_mut = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();
    let mut loading = use_context::<LoadingHandle>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let language = (state_mut.language)();
    let mut tab = use_signal(AuthTab::default);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(HashMap::<&'static str, String>::new);

    let mut user = state_mut.user;
    let mut finish = move |message: &'static str| {
        spawn(async move {
            loading.show("Signing in...");
            compat::sleep(LOGIN_DELAY).await;
            loading.hide();
            auth::begin_session();
            user.set(Some(auth::demo_user()));
            toasts.push(message, Severity::Success);
            active_screen.set(Screen::Dashboard);
        });
    };

    let sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = vec![
            (
                FieldSpec::required("email", "Email", FieldKind::Email),
                email.peek().clone(),
            ),
            (
                FieldSpec::required("password", "Password", FieldKind::Password),
                password.peek().clone(),
            ),
        ];
        let failed = validate_form(&fields);
        if !failed.is_empty() {
            errors.set(failed.into_iter().map(|e| (e.name, e.message)).collect());
            toasts.push("Please correct the errors in the form", Severity::Error);
            return;
        }
        errors.write().clear();
        finish("Login successful!");
    };

    let sign_up = move |evt: FormEvent| {
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
                FieldSpec::required("password", "Password", FieldKind::Password),
                password.peek().clone(),
            ),
            (
                FieldSpec::required("confirm_password", "Confirm Password", FieldKind::ConfirmPassword),
                confirm.peek().clone(),
            ),
        ];
        let failed = validate_form(&fields);
        if !failed.is_empty() {
            errors.set(failed.into_iter().map(|e| (e.name, e.message)).collect());
            toasts.push("Please correct the errors in the form", Severity::Error);
            return;
        }
        errors.write().clear();
        finish("Account created successfully!");
    };

    rsx! {
        Container {
            Card {
                nav {
                    class: "auth-tabs",
                    ul {
                        li {
                            a {
                                href: "#",
                                class: if tab() == AuthTab::SignIn { "active" } else { "" },
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    errors.write().clear();
                                    tab.set(AuthTab::SignIn);
                                },
                                {tr(language, "sign_in")}
                            }
                        }
                        li {
                            a {
                                href: "#",
                                class: if tab() == AuthTab::SignUp { "active" } else { "" },
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    errors.write().clear();
                                    tab.set(AuthTab::SignUp);
                                },
                                {tr(language, "sign_up")}
                            }
                        }
                    }
                }

                if tab() == AuthTab::SignIn {
                    form {
                        onsubmit: sign_in,
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
                            label: "Password".to_string(),
                            name: "password".to_string(),
                            input_type: "password".to_string(),
                            required: true,
                            value: password(),
                            error: errors.read().get("password").cloned(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button { {tr(language, "sign_in")} }
                    }
                } else {
                    form {
                        onsubmit: sign_up,
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
                        Input {
                            label: "Password".to_string(),
                            name: "password".to_string(),
                            input_type: "password".to_string(),
                            required: true,
                            value: password(),
                            error: errors.read().get("password").cloned(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Input {
                            label: "Confirm Password".to_string(),
                            name: "confirm_password".to_string(),
                            input_type: "password".to_string(),
                            required: true,
                            value: confirm(),
                            error: errors.read().get("confirm_password").cloned(),
                            on_input: move |evt: FormEvent| confirm.set(evt.value()),
                        }
                        Button { {tr(language, "sign_up")} }
                    }
                }
            }
        }
    }
}
