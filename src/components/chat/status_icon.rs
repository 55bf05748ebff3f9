use dioxus::prelude::*;
use gupshup_core::StatusIndicator;

/// Outgoing-status marks: one check for sent, two for delivered, two plus
/// "Seen" for seen.
#[component]
pub fn StatusIcon(status: StatusIndicator) -> Element {
    let class = match status {
        StatusIndicator::Seen => "status-icon status-icon--seen",
        _ => "status-icon",
    };

    rsx! {
        span { class: "{class}", title: "{status_title(status)}",
            for i in 0..status.check_count() {
                svg {
                    key: "{i}",
                    class: "status-check",
                    width: "14",
                    height: "14",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2.5",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    polyline { points: "20 6 9 17 4 12" }
                }
            }
            if let Some(label) = status.label() {
                span { class: "status-label", "{label}" }
            }
        }
    }
}

fn status_title(status: StatusIndicator) -> &'static str {
    match status {
        StatusIndicator::Sent => "Sent",
        StatusIndicator::Delivered => "Delivered",
        StatusIndicator::Seen => "Seen",
    }
}
