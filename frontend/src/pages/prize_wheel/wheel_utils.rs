use chrono::{DateTime, Local};
use prize_wheel_shared::constants::{ALREADY_SPUN_LABEL, SPINNING_LABEL, SPIN_LABEL};
use yew::prelude::*;
use crate::styles;

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

// Format a stored epoch-millisecond timestamp in the visitor's timezone
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::from("-"),
    }
}

pub fn spin_button_label(is_spinning: bool, has_result: bool) -> &'static str {
    if has_result {
        ALREADY_SPUN_LABEL
    } else if is_spinning {
        SPINNING_LABEL
    } else {
        SPIN_LABEL
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub has_result: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || props.has_result;

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                styles::BUTTON_SPIN,
                if is_disabled { styles::BUTTON_SPIN_DISABLED } else { styles::BUTTON_SPIN_ACTIVE }
            )}
        >
            <span class="relative z-10">{spin_button_label(props.is_spinning, props.has_result)}</span>
            if is_disabled {
                // Sheen sweeping across the disabled button
                <div class="absolute inset-0 bg-white/20 animate-pulse"></div>
            }
        </button>
    }
}
