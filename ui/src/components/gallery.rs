//! Product image gallery: one main image, clickable thumbnails.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<String>,
    pub alt: String,
}

#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let mut selected = use_signal(|| 0usize);

    if props.images.is_empty() {
        return rsx! {};
    }
    let current = selected().min(props.images.len() - 1);
    rsx! {
        div {
            class: "gallery",
            img {
                class: "gallery-main",
                src: "{props.images[current]}",
                alt: "{props.alt}",
            }
            if props.images.len() > 1 {
                div {
                    class: "gallery-thumbs",
                    for (index, image) in props.images.iter().cloned().enumerate() {
                        img {
                            key: "{index}",
                            class: if index == current { "gallery-thumb active" } else { "gallery-thumb" },
                            src: "{image}",
                            alt: "{props.alt} thumbnail {index + 1}",
                            onclick: move |_| selected.set(index),
                        }
                    }
                }
            }
        }
    }
}
