//! Transient notifications. A single host component renders the stack; the
//! `Toasts` context handle is how screens raise them.
//!
//! Expiry is driven by the host, not the pushing screen: a task spawned
//! from a screen's scope is cancelled when that screen unmounts, which
//! would leave its toast up forever. Each toast instead carries its
//! deadline and the host sweeps due toasts from its own long-lived scope.

use std::time::Duration;

use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;
use dioxus::prelude::*;

use crate::compat;

/// Auto-dismiss delay for a freshly raised toast.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);
/// Exit transition played before the node is detached, on every removal
/// path including manual dismissal.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// How often the host checks for due toasts.
const SWEEP_INTERVAL: Duration = Duration::from_millis(100);

fn exit_delta() -> TimeDelta {
    TimeDelta::milliseconds(EXIT_TRANSITION.as_millis() as i64)
}

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Unrecognized labels map to `Info`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
            Severity::Warning => "fas fa-exclamation-triangle",
            Severity::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// When the auto-dismiss window ends.
    pub expires_at: DateTime<Utc>,
    /// Set once the exit transition starts playing.
    pub leaving_since: Option<DateTime<Utc>>,
}

impl Toast {
    pub fn leaving(&self) -> bool {
        self.leaving_since.is_some()
    }
}

/// Marks the toast as leaving. Returns false when the toast is gone or
/// already on its way out, so the transition starts exactly once.
fn begin_exit(items: &mut [Toast], id: u64, now: DateTime<Utc>) -> bool {
    match items.iter_mut().find(|t| t.id == id) {
        Some(toast) if !toast.leaving() => {
            toast.leaving_since = Some(now);
            true
        }
        _ => false,
    }
}

/// One pass of the host timer: due toasts start their exit transition and
/// toasts whose transition has finished are detached.
fn sweep(items: &mut Vec<Toast>, now: DateTime<Utc>) -> bool {
    let mut changed = false;
    for toast in items.iter_mut() {
        if !toast.leaving() && now >= toast.expires_at {
            toast.leaving_since = Some(now);
            changed = true;
        }
    }
    let before = items.len();
    items.retain(|toast| match toast.leaving_since {
        Some(since) => now - since < exit_delta(),
        None => true,
    });
    changed || items.len() != before
}

/// Whether a sweep at `now` would change anything. Lets the host peek
/// without taking a write lock (and re-rendering) on every tick.
fn sweep_due(items: &[Toast], now: DateTime<Utc>) -> bool {
    items.iter().any(|toast| match toast.leaving_since {
        Some(since) => now - since >= exit_delta(),
        None => now >= toast.expires_at,
    })
}

/// Context handle for raising notifications from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new(items: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { items, next_id }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_with_duration(message, severity, DEFAULT_DURATION);
    }

    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        let expires_at = Utc::now() + TimeDelta::milliseconds(duration.as_millis() as i64);
        self.items.write().push(Toast {
            id,
            message: message.into(),
            severity,
            expires_at,
            leaving_since: None,
        });
    }

    /// Starts the exit transition; the host sweep detaches the toast once
    /// the transition has played. Dismissing an absent or already-leaving
    /// toast is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        let now = Utc::now();
        begin_exit(&mut self.items.write(), id, now);
    }
}

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_context::<Toasts>();

    // the expiry timer lives with the host, so it outlives whichever
    // screen pushed the toast
    use_future(move || async move {
        loop {
            compat::sleep(SWEEP_INTERVAL).await;
            let now = Utc::now();
            if sweep_due(&toasts.items.peek(), now) {
                sweep(&mut toasts.items.write(), now);
            }
        }
    });

    let items = toasts.items.read().clone();
    rsx! {
        div {
            class: "toast-container",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: if toast.leaving() {
                        format!("toast toast-{} hide", toast.severity)
                    } else {
                        format!("toast toast-{} show", toast.severity)
                    },
                    i { class: "{toast.severity.icon_class()}" }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, expires_at: DateTime<Utc>) -> Toast {
        Toast {
            id,
            message: format!("toast {id}"),
            severity: Severity::Info,
            expires_at,
            leaving_since: None,
        }
    }

    #[test]
    fn severity_labels_parse_with_info_fallback() {
        assert_eq!(Severity::from_label("success"), Severity::Success);
        assert_eq!(Severity::from_label("WARNING"), Severity::Warning);
        assert_eq!(Severity::from_label("fatal"), Severity::Info);
        assert_eq!(Severity::from_label(""), Severity::Info);
    }

    #[test]
    fn icons_are_fixed_per_severity() {
        assert_eq!(Severity::Success.icon_class(), "fas fa-check-circle");
        assert_eq!(Severity::Info.icon_class(), "fas fa-info-circle");
    }

    #[test]
    fn exit_starts_once() {
        let now = Utc::now();
        let mut items = vec![
            toast(1, now + TimeDelta::seconds(5)),
            toast(2, now + TimeDelta::seconds(5)),
        ];
        assert!(begin_exit(&mut items, 1, now));
        // second dismissal of the same toast is a no-op
        assert!(!begin_exit(&mut items, 1, now));
        // unknown id is a no-op
        assert!(!begin_exit(&mut items, 99, now));
    }

    #[test]
    fn host_sweep_runs_the_full_lifecycle() {
        // the sweep alone must take a toast from due to gone, with no task
        // held by the screen that pushed it
        let pushed_at = Utc::now();
        let expiry = pushed_at + TimeDelta::seconds(5);
        let mut items = vec![toast(1, expiry)];

        // before the deadline nothing is due
        assert!(!sweep_due(&items, pushed_at + TimeDelta::seconds(4)));

        // at the deadline the exit transition starts but the node stays
        assert!(sweep_due(&items, expiry));
        assert!(sweep(&mut items, expiry));
        assert_eq!(items.len(), 1);
        assert!(items[0].leaving());

        // once the transition has played the toast is detached
        let after_exit = expiry + exit_delta();
        assert!(sweep_due(&items, after_exit));
        assert!(sweep(&mut items, after_exit));
        assert!(items.is_empty());
    }

    #[test]
    fn manual_dismiss_follows_the_same_exit_path() {
        let now = Utc::now();
        let mut items = vec![toast(1, now + TimeDelta::seconds(5))];
        assert!(begin_exit(&mut items, 1, now));

        // mid-transition the toast is still rendered
        assert!(!sweep(&mut items, now + TimeDelta::milliseconds(100)));
        assert_eq!(items.len(), 1);

        assert!(sweep(&mut items, now + exit_delta()));
        assert!(items.is_empty());
    }

    #[test]
    fn sweep_leaves_undue_toasts_alone() {
        let now = Utc::now();
        let mut items = vec![
            toast(1, now + TimeDelta::seconds(1)),
            toast(2, now + TimeDelta::seconds(5)),
        ];
        assert!(sweep(&mut items, now + TimeDelta::seconds(2)));
        assert_eq!(items.len(), 2);
        assert!(items[0].leaving());
        assert!(!items[1].leaving());
    }
}
