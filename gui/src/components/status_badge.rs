// Status pill for invoices and purchase orders
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::size::rem;
use shared::DocumentStatus;

use crate::config::theme::ThemePalette;

#[component]
pub fn StatusBadge(status: DocumentStatus) -> Element {
    let palette = use_context::<ThemePalette>();
    let color = palette.tone(status.tone()).to_string();
    let icon = status.icon();
    let label = status.label();
    let padding = format!("{} {}", rem(2.0), rem(8.0));
    let radius = rem(12.0);
    let font_size = rem(12.0);
    let class = format!("status-badge status-{}", status.code());

    rsx! {
        span {
            class: "{class}",
            "data-icon": "{icon}",
            title: "{label}",
            style: "display: inline-block; padding: {padding}; border: 1px solid {color}; border-radius: {radius}; color: {color}; font-size: {font_size};",
            "{label}"
        }
    }
}
