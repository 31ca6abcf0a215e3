//! Image that defers loading until it scrolls into view. Falls back to
//! eager loading when the host has no visibility observer.

use dioxus::prelude::*;

use crate::compat;

const PLACEHOLDER: &str =
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='300'%3E%3Crect width='100%25' height='100%25' fill='%23e9ecef'/%3E%3C/svg%3E";

#[derive(Props, Clone, PartialEq)]
pub struct LazyImageProps {
    pub src: String,
    pub alt: String,
    #[props(optional)]
    pub class: Option<String>,
}

#[component]
pub fn LazyImage(props: LazyImageProps) -> Element {
    // no observer on this host means loading eagerly from the start
    let mut loaded = use_signal(|| !compat::supports_visibility_observer());

    let class = props.class.clone().unwrap_or_default();
    rsx! {
        img {
            class: if loaded() { format!("lazy-image loaded {class}") } else { format!("lazy-image {class}") },
            src: if loaded() { props.src.clone() } else { PLACEHOLDER.to_string() },
            alt: "{props.alt}",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    loaded.set(true);
                }
            },
        }
    }
}
