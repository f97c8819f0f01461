mod wheel_canvas;
mod wheel_panels;
mod wheel_utils;

use prize_wheel_shared::constants::{ONE_SPIN_HINT, RESULT_SAVED_HINT, WHEEL_UNAVAILABLE_ERROR};
use prize_wheel_shared::WheelEvent;
use yew::prelude::*;
use crate::hooks::use_prize_wheel;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_panels::{PrizeLegend, ResultCard, RulesCard};
use wheel_utils::SpinButton;

#[function_component(PrizeWheelPage)]
pub fn prize_wheel_page() -> Html {
    let state = use_prize_wheel();

    let start_spin = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(WheelEvent::SpinRequested))
    };

    // The canvas reports back here once the wheel has stopped
    let on_animation_complete = {
        let state = state.clone();
        Callback::from(move |()| {
            let timestamp = js_sys::Date::now() as i64;
            state.dispatch(WheelEvent::AnimationComplete { timestamp });
        })
    };

    let Some(wheel) = state.wheel.as_ref() else {
        return html! {
            <div class={styles::PAGE}>
                <div class={styles::CARD_ERROR}>
                    <div class="font-bold">{WHEEL_UNAVAILABLE_ERROR}</div>
                    if let Some(error) = &state.error {
                        <div class="text-sm mt-1">{error.clone()}</div>
                    }
                </div>
            </div>
        };
    };

    let has_result = wheel.result().is_some();

    html! {
        <div class={styles::PAGE}>
            <div class={styles::PANEL}>
                <div class={styles::WHEEL_COLUMN}>
                    <WheelCanvas
                        slices={wheel.slices().to_vec()}
                        rotation={wheel.rotation()}
                        spin={wheel.spin_plan().cloned()}
                        duration_ms={wheel.config().spin_duration_ms}
                        on_animation_complete={on_animation_complete}
                    />
                    <div class="flex flex-col gap-4 w-full max-w-xs">
                        <SpinButton
                            is_spinning={wheel.is_spinning()}
                            has_result={has_result}
                            onclick={start_spin}
                        />
                    </div>
                    <div class={styles::TEXT_HINT}>
                        { if has_result { RESULT_SAVED_HINT } else { ONE_SPIN_HINT } }
                    </div>
                </div>

                <div class={styles::INFO_COLUMN}>
                    <PrizeLegend
                        tiers={wheel.tiers().to_vec()}
                        distribution={wheel.distribution().clone()}
                    />
                    <ResultCard result={wheel.result().cloned()} />
                    <RulesCard slice_count={wheel.slices().len()} />
                </div>
            </div>
        </div>
    }
}
