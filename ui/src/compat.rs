// Platform shims: timers, printing and scrolling differ between the web
// build and the desktop build.

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub mod interval {
        use std::sync::Arc;
        use std::sync::Mutex;
        use std::time::Duration;

        use futures::channel::mpsc;
        use futures::StreamExt;

        pub struct Interval {
            inner: Option<gloo_timers::callback::Interval>,
            rx: Arc<Mutex<mpsc::UnboundedReceiver<()>>>,
        }

        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let (tx, rx) = mpsc::unbounded();
                let gloo_interval =
                    gloo_timers::callback::Interval::new(duration.as_millis() as u32, move || {
                        let _ = tx.unbounded_send(());
                    });

                Self {
                    inner: Some(gloo_interval),
                    rx: Arc::new(Mutex::new(rx)),
                }
            }

            pub async fn tick(&mut self) {
                if let Ok(mut rx_lock) = self.rx.try_lock() {
                    let _ = rx_lock.next().await;
                }
            }
        }

        impl Drop for Interval {
            fn drop(&mut self) {
                if let Some(inner) = self.inner.take() {
                    inner.cancel();
                }
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Whether the host exposes an IntersectionObserver for deferred images.
    pub fn supports_visibility_observer() -> bool {
        match web_sys::window() {
            Some(window) => js_sys::Reflect::has(&window, &"IntersectionObserver".into())
                .unwrap_or(false),
            None => false,
        }
    }

    /// Opens the host print dialog.
    pub fn print_page() {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }

    /// Smooth-scrolls the element with the given id into view. No-op if the
    /// element does not exist.
    pub fn scroll_to(id: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(element) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use dioxus_logger::tracing::debug;

    pub mod interval {
        use tokio::time::Duration;
        use tokio::time::MissedTickBehavior;

        pub struct Interval {
            inner: tokio::time::Interval,
        }

        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let mut interval = tokio::time::interval(duration);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }

            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// The webview build loads images eagerly.
    pub fn supports_visibility_observer() -> bool {
        false
    }

    pub fn print_page() {
        debug!("print requested; not available in the desktop build");
    }

    pub fn scroll_to(id: &str) {
        debug!("scroll to #{id} requested; not available in the desktop build");
    }
}
