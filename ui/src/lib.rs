// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
pub mod app_state_mut;
pub mod compat;
pub mod components;
pub mod currency;
pub mod filters;
pub mod i18n;
mod screens;

use api::prefs::language::Language;
use api::prefs::user_prefs::UserPrefs;
pub use app_state::AppState;
pub use app_state_mut::AppStateMut;
pub use app_state_mut::ModalId;
use components::loading::LoadingHandle;
use components::loading::LoadingOverlay;
use components::pico::Button;
use components::pico::ButtonType;
use components::toast::ToastHost;
use components::toast::Toasts;
use i18n::tr;
use screens::cart::Cart;
use screens::checkout::Checkout;
use screens::dashboard::Dashboard;
use screens::home::Home;
use screens::login::Login;
use screens::quotes::Quotes;
use screens::service_detail::ServiceDetail;
use screens::services::Services;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Home,
    Services {
        query: Option<String>,
    },
    ServiceDetail(u32),
    Quotes,
    Cart,
    Checkout(u32),
    Login,
    Dashboard,
}

impl Screen {
    /// Display name for the navigation, translated where a key exists.
    fn name(&self, language: Language) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Services { .. } | Screen::ServiceDetail(_) => tr(language, "services"),
            Screen::Quotes | Screen::Checkout(_) => tr(language, "compare_quotes"),
            Screen::Cart => tr(language, "cart"),
            Screen::Login => tr(language, "sign_in"),
            Screen::Dashboard => tr(language, "dashboard"),
        }
    }
}

/// Navigation entries. Detail and checkout screens are reached from within
/// these, not listed themselves.
fn nav_screens() -> [Screen; 5] {
    [
        Screen::Home,
        Screen::Services { query: None },
        Screen::Quotes,
        Screen::Cart,
        Screen::Dashboard,
    ]
}

/// Whether `tab` should highlight while `active` is shown; nested screens
/// keep their parent tab lit.
fn tab_is_active(active: &Screen, tab: &Screen) -> bool {
    match (active, tab) {
        (Screen::ServiceDetail(_), Screen::Services { .. }) => true,
        (Screen::Services { .. }, Screen::Services { .. }) => true,
        (Screen::Checkout(_), Screen::Quotes) => true,
        (active, tab) => active == tab,
    }
}

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>, language: Language) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in nav_screens() {
                    {
                        let name = screen.name(language);
                        let is_active = tab_is_active(&active_screen.read(), &screen);
                        rsx! {
                            li {
                                a {
                                    href: "#",
                                    class: if is_active { "active-tab" } else { "" },
                                    "aria-current": if is_active { "page" } else { "false" },
                                    onclick: move |event| {
                                        event.prevent_default();
                                        active_screen.set(screen.clone());
                                    },
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>, language: Language) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "\u{2261}"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in nav_screens() {
                        {
                            let name = screen.name(language);
                            let is_active = tab_is_active(&active_screen.read(), &screen);
                            rsx! {
                                a {
                                    class: if is_active {
                                        "custom-dropdown-item active-tab"
                                    } else {
                                        "custom-dropdown-item"
                                    },
                                    href: "#",
                                    onclick: move |event| {
                                        event.prevent_default();
                                        active_screen.set(screen.clone());
                                        is_open.set(false);
                                    },
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/printhub.css"),
        }
        LoadedApp {
            app_state: AppState::new(),
            user_prefs: UserPrefs::load(),
        }
    }
}

/// This component holds the main app logic and owns all shared signals.
#[component]
fn LoadedApp(app_state: AppState, user_prefs: UserPrefs) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let language_signal = use_signal(|| user_prefs.language());
    let user_signal = use_signal(api::auth::restore_session);
    let cart_signal = use_signal(Vec::new);
    let modal_signal = use_signal(|| None);

    use_context_provider(|| AppStateMut {
        language: language_signal,
        user: user_signal,
        cart: cart_signal,
        active_modal: modal_signal,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    let toast_items = use_signal(Vec::new);
    let toast_ids = use_signal(|| 0u64);
    use_context_provider(|| Toasts::new(toast_items, toast_ids));

    let overlay = use_signal(Default::default);
    use_context_provider(|| LoadingHandle::new(overlay));

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    use_hook(|| {
        info!(
            "marketplace ui ready, language {}",
            language_signal.peek().code()
        );
    });

    let language = language_signal();
    let mut prefs = use_signal(|| user_prefs);
    let switch_language = move |_| {
        let next = match *language_signal.peek() {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        };
        prefs.write().set_language(next);
        app_state_mut.language.set(next);
    };

    let cart_count = app_state_mut.cart.read().len();
    let signed_in_name = app_state_mut
        .user
        .read()
        .as_ref()
        .map(|user| user.name.clone());

    rsx! {
        div {
            dir: language.dir(),
            lang: language.code(),
            class: "app-shell",
            header {
                class: "app-header",
                nav {
                    ul {
                        li {
                            a {
                                href: "#",
                                class: "brand",
                                onclick: move |event| {
                                    event.prevent_default();
                                    let mut screen = active_screen;
                                    screen.set(Screen::Home);
                                },
                                "PrintHub"
                            }
                        }
                    }
                    ul {
                        class: "desktop-nav",
                        li {
                            Tabs {
                                active_screen,
                                language,
                            }
                        }
                    }
                    ul {
                        li {
                            Button {
                                button_type: ButtonType::Contrast,
                                outline: true,
                                on_click: switch_language,
                                {
                                    match language {
                                        Language::En => "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}",
                                        Language::Ar => "English",
                                    }
                                }
                            }
                        }
                        li {
                            a {
                                href: "#",
                                class: "cart-link",
                                onclick: move |event| {
                                    event.prevent_default();
                                    let mut screen = active_screen;
                                    screen.set(Screen::Cart);
                                },
                                i { class: "fas fa-shopping-cart" }
                                {tr(language, "cart")}
                                if cart_count > 0 {
                                    span { class: "cart-badge", "{cart_count}" }
                                }
                            }
                        }
                        li {
                            match signed_in_name {
                                Some(name) => rsx! {
                                    a {
                                        href: "#",
                                        onclick: move |event| {
                                            event.prevent_default();
                                            let mut screen = active_screen;
                                            screen.set(Screen::Dashboard);
                                        },
                                        "{name}"
                                    }
                                },
                                None => rsx! {
                                    a {
                                        href: "#",
                                        onclick: move |event| {
                                            event.prevent_default();
                                            let mut screen = active_screen;
                                            screen.set(Screen::Login);
                                        },
                                        {tr(language, "sign_in")}
                                    }
                                },
                            }
                        }
                        li {
                            class: "mobile-nav",
                            HamburgerMenu {
                                active_screen,
                                language,
                            }
                        }
                    }
                }
            }

            div {
                class: "content",
                match active_screen() {
                    Screen::Home => rsx! {
                        Home {}
                    },
                    Screen::Services { query } => rsx! {
                        Services {
                            query,
                        }
                    },
                    Screen::ServiceDetail(id) => rsx! {
                        ServiceDetail {
                            key: "{id}",
                            id,
                        }
                    },
                    Screen::Quotes => rsx! {
                        Quotes {}
                    },
                    Screen::Cart => rsx! {
                        Cart {}
                    },
                    Screen::Checkout(quote_id) => rsx! {
                        Checkout {
                            key: "{quote_id}",
                            quote_id,
                        }
                    },
                    Screen::Login => rsx! {
                        Login {}
                    },
                    Screen::Dashboard => rsx! {
                        Dashboard {}
                    },
                }
            }

            ToastHost {}
            LoadingOverlay {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_screens_light_their_parent_tab() {
        let services_tab = Screen::Services { query: None };
        assert!(tab_is_active(&Screen::ServiceDetail(3), &services_tab));
        assert!(tab_is_active(
            &Screen::Services {
                query: Some("banner".to_string())
            },
            &services_tab,
        ));
        assert!(tab_is_active(&Screen::Checkout(501), &Screen::Quotes));
        assert!(!tab_is_active(&Screen::Cart, &Screen::Quotes));
    }

    #[test]
    fn nav_labels_follow_the_language() {
        assert_eq!(Screen::Cart.name(Language::En), "Cart");
        assert_eq!(Screen::Cart.name(Language::Ar), "السلة");
        assert_eq!(Screen::Home.name(Language::Ar), "Home");
    }
}
