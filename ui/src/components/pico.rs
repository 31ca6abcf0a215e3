//! A set of reusable, lifetime-free Dioxus components for the Pico.css
//! framework, extended with the form and modal behavior the marketplace
//! screens need.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// A card for grouping related content.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = match props.button_type {
        ButtonType::Primary => vec![],
        ButtonType::Secondary => vec!["secondary"],
        ButtonType::Contrast => vec!["contrast"],
    };
    if props.outline {
        classes.push("outline");
    }
    rsx! {
        button {
            class: classes.join(" "),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// The small round close control used in modals and file lists.
#[component]
pub fn CloseButton(on_click: EventHandler<MouseEvent>) -> Element {
    rsx! {
        a {
            href: "#",
            "aria-label": "Close",
            class: "close",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_click.call(evt);
            },
            "\u{00D7}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(optional)]
    value: Option<String>,
    #[props(optional)]
    min: Option<String>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    /// Inline validation message; also flips the error styling on the field.
    #[props(optional)]
    error: Option<String>,
}

/// A labeled form input with inline error display.
pub fn Input(props: InputProps) -> Element {
    let has_error = props.error.is_some();
    rsx! {
        label {
            if !props.label.is_empty() {
                "{props.label}"
                if props.required {
                    span { class: "required-mark", " *" }
                }
            }
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                class: if has_error { "error" } else { "" },
                "aria-invalid": if has_error { "true" } else { "false" },
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: props.value.as_deref().unwrap_or("").to_string(),
                min: props.min.as_deref().unwrap_or("").to_string(),
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
            if let Some(err) = &props.error {
                small { class: "field-error", "{err}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaProps {
    label: String,
    name: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(optional)]
    value: Option<String>,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(optional)]
    error: Option<String>,
}

pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            textarea {
                name: "{props.name}",
                class: if props.error.is_some() { "error" } else { "" },
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: props.value.as_deref().unwrap_or("").to_string(),
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
            if let Some(err) = &props.error {
                small { class: "field-error", "{err}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    /// Whether this modal is the currently tracked one.
    open: bool,
    #[props(optional)]
    title: Option<String>,
    /// Invoked for every close path: backdrop click, Escape, close control.
    on_close: EventHandler<()>,
    children: Element,
}

/// A dialog that closes on backdrop click or Escape key. The content area
/// stops click propagation so it does not count as a backdrop click.
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        if props.open {
            dialog {
                open: true,
                // focus this element as soon as it is rendered into the DOM.
                autofocus: true,
                onclick: move |_| props.on_close.call(()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.on_close.call(());
                    }
                },
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        CloseButton {
                            on_click: move |_| props.on_close.call(()),
                        }
                        if let Some(title) = &props.title {
                            h3 { style: "margin-bottom: 0;", "{title}" }
                        }
                    }
                    {props.children}
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ConfirmModalProps {
    open: bool,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())]
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
}

/// A yes/no prompt built on [`Modal`]; cancel follows the same close path as
/// backdrop and Escape.
pub fn ConfirmModal(props: ConfirmModalProps) -> Element {
    let on_cancel = props.on_cancel;
    rsx! {
        Modal {
            open: props.open,
            title: props.title.clone(),
            on_close: move |_| on_cancel.call(()),
            p { "{props.message}" }
            footer {
                div {
                    style: "display: flex; justify-content: flex-end; gap: 1rem;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        on_click: move |_| props.on_confirm.call(()),
                        "{props.confirm_label}"
                    }
                }
            }
        }
    }
}
