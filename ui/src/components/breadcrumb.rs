//! Breadcrumb trail, either explicit or derived from a page path.

use dioxus::prelude::*;

use crate::components::action_link::ActionLink;
use crate::Screen;

#[derive(Clone, PartialEq, Debug)]
pub struct Crumb {
    pub text: String,
    /// `None` marks the non-linking current page.
    pub url: Option<String>,
}

impl Crumb {
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn current(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }
}

/// Friendly names for well-known path segments.
fn page_name(segment: &str) -> Option<&'static str> {
    Some(match segment {
        "admin" => "Admin Dashboard",
        "customer" => "Customer Dashboard",
        "vendor" => "Vendor Dashboard",
        "quote-request" => "Request Quote",
        "quote-comparison" => "Compare Quotes",
        "service-detail" => "Service Details",
        "vendor-profile" => "Vendor Profile",
        _ => return None,
    })
}

/// Title-cases a path segment: separators become spaces and a trailing
/// `.html` is stripped.
fn humanize(segment: &str) -> String {
    segment
        .replace(['-', '_'], " ")
        .trim_end_matches(".html")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a trail from a page path: Home first, each segment title-cased or
/// substituted from the friendly-name table, intermediate crumbs linking to
/// the accumulated path plus `.html`, and the final segment unlinked.
pub fn trail_from_path(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut items = vec![Crumb::link("Home", "/")];
    let mut current_path = String::new();
    let last = segments.len().saturating_sub(1);
    for (index, segment) in segments.iter().enumerate() {
        current_path.push('/');
        current_path.push_str(segment);

        // the friendly-name table matches the raw segment, so a segment
        // carrying an .html extension falls through to title-casing
        let text = match page_name(segment) {
            Some(name) => name.to_string(),
            None => humanize(segment),
        };

        if index == last {
            items.push(Crumb::current(text));
        } else {
            items.push(Crumb::link(text, format!("{current_path}.html")));
        }
    }
    items
}

#[derive(Props, PartialEq, Clone)]
pub struct BreadcrumbProps {
    pub items: Vec<Crumb>,
    /// Where linked crumbs navigate. The marketplace is a single-page app,
    /// so trail links map back onto screens rather than URLs.
    #[props(optional)]
    pub on_navigate: Option<EventHandler<String>>,
}

/// Renders nothing at all for an empty trail, not an empty container.
#[component]
pub fn Breadcrumb(props: BreadcrumbProps) -> Element {
    if props.items.is_empty() {
        return rsx! {};
    }
    let last = props.items.len() - 1;
    let on_navigate = props.on_navigate;
    rsx! {
        nav {
            "aria-label": "breadcrumb",
            class: "breadcrumb",
            ol {
                class: "breadcrumb-nav",
                for (index, item) in props.items.iter().cloned().enumerate() {
                    li {
                        class: if index == last { "breadcrumb-item active" } else { "breadcrumb-item" },
                        match (index == last, item.url.clone()) {
                            (false, Some(url)) => {
                                let href = url.clone();
                                rsx! {
                                    a {
                                        href: "{href}",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            if let Some(handler) = &on_navigate {
                                                handler.call(url.clone());
                                            }
                                        },
                                        "{item.text}"
                                    }
                                }
                            }
                            _ => rsx! {
                                span { "{item.text}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// The trail used by catalog screens, expressed over [`Screen`] targets.
#[component]
pub fn ScreenBreadcrumb(trail: Vec<(String, Option<Screen>)>) -> Element {
    let active_screen = use_context::<Signal<Screen>>();
    if trail.is_empty() {
        return rsx! {};
    }
    rsx! {
        nav {
            "aria-label": "breadcrumb",
            class: "breadcrumb",
            ol {
                class: "breadcrumb-nav",
                for (text, target) in trail.into_iter() {
                    li {
                        class: if target.is_none() { "breadcrumb-item active" } else { "breadcrumb-item" },
                        match target {
                            Some(ref screen) => rsx! {
                                ActionLink {
                                    state: active_screen,
                                    to: screen.clone(),
                                    "{text}"
                                }
                            },
                            None => rsx! {
                                span { "{text}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_reports_trail() {
        let trail = trail_from_path("/admin/reports");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0], Crumb::link("Home", "/"));
        assert_eq!(trail[1], Crumb::link("Admin Dashboard", "/admin.html"));
        assert_eq!(trail[2], Crumb::current("Reports"));
    }

    #[test]
    fn empty_path_is_home_only() {
        let trail = trail_from_path("/");
        assert_eq!(trail, vec![Crumb::link("Home", "/")]);
    }

    #[test]
    fn segments_are_title_cased_and_extension_stripped() {
        let trail = trail_from_path("/my-print_jobs.html");
        assert_eq!(trail[1], Crumb::current("My Print Jobs"));
    }

    #[test]
    fn friendly_names_override_humanization() {
        let trail = trail_from_path("/quote-comparison");
        assert_eq!(trail[1], Crumb::current("Compare Quotes"));
    }

    #[test]
    fn friendly_names_match_raw_segments_only() {
        // with an extension the segment misses the table and is title-cased
        let trail = trail_from_path("/service-detail.html");
        assert_eq!(trail[1], Crumb::current("Service Detail"));
    }
}
