//! Promotional countdown, refreshed once a minute.

use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use dioxus::prelude::*;

use crate::compat;

const REFRESH: Duration = Duration::from_secs(60);

/// Remaining time as `"{d}d {h}h {m}m"`, or `"Expired"` once the deadline
/// passes. Sub-minute remainders round down, so the final minute reads
/// `0d 0h 0m` until it expires.
pub fn format_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = end - now;
    if remaining <= chrono::TimeDelta::zero() {
        return "Expired".to_string();
    }
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;
    format!("{days}d {hours}h {minutes}m")
}

#[derive(Props, Clone, PartialEq)]
pub struct CountdownProps {
    pub end: DateTime<Utc>,
    #[props(optional)]
    pub label: Option<String>,
}

#[component]
pub fn Countdown(props: CountdownProps) -> Element {
    let mut now = use_signal(Utc::now);

    use_future(move || async move {
        let mut ticker = compat::interval::Interval::new(REFRESH);
        loop {
            ticker.tick().await;
            now.set(Utc::now());
        }
    });

    let remaining = format_remaining(props.end, now());
    rsx! {
        div {
            class: "countdown",
            if let Some(label) = &props.label {
                span { class: "countdown-label", "{label}" }
            }
            span {
                class: if remaining == "Expired" { "countdown-value expired" } else { "countdown-value" },
                "{remaining}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn sub_minute_remainder_rounds_down() {
        let now = Utc::now();
        let end = now + TimeDelta::seconds(90);
        assert_eq!(format_remaining(end, now), "0d 0h 1m");
    }

    #[test]
    fn whole_components() {
        let now = Utc::now();
        let end = now + TimeDelta::days(2) + TimeDelta::hours(3) + TimeDelta::minutes(4);
        assert_eq!(format_remaining(end, now), "2d 3h 4m");
    }

    #[test]
    fn past_deadlines_read_expired() {
        let now = Utc::now();
        assert_eq!(format_remaining(now - TimeDelta::seconds(1), now), "Expired");
        assert_eq!(format_remaining(now, now), "Expired");
    }
}
