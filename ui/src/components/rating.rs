//! Interactive five-star rating control. Hovering previews a value, leaving
//! reverts to the committed one, clicking commits.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StarRatingProps {
    pub rating: Signal<u8>,
    #[props(optional)]
    pub on_rate: Option<EventHandler<u8>>,
}

#[component]
pub fn StarRating(props: StarRatingProps) -> Element {
    let mut rating = props.rating;
    let on_rate = props.on_rate;
    let mut preview = use_signal(|| None::<u8>);

    let shown = preview().unwrap_or_else(|| rating());
    rsx! {
        div {
            class: "star-rating",
            onmouseleave: move |_| preview.set(None),
            for star in 1u8..=5 {
                i {
                    key: "{star}",
                    title: if star == 1 { "1 star".to_string() } else { format!("{star} stars") },
                    class: if star <= shown { "fas fa-star star filled" } else { "far fa-star star" },
                    onmouseenter: move |_| preview.set(Some(star)),
                    onclick: move |_| {
                        rating.set(star);
                        preview.set(None);
                        if let Some(handler) = &on_rate {
                            handler.call(star);
                        }
                    },
                }
            }
        }
    }
}
