use prize_wheel_shared::{Distribution, PrizeTier, SpinResult};
use yew::prelude::*;
use crate::styles;
use super::wheel_utils::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct PrizeLegendProps {
    pub tiers: Vec<PrizeTier>,
    pub distribution: Distribution,
}

/// Lists every tier with its wedge count and its actual win chance. The two
/// are shown side by side because they are not proportional.
#[function_component(PrizeLegend)]
pub fn prize_legend(props: &PrizeLegendProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H2}>{"Prizes"}</h3>
            <div class="grid grid-cols-1 gap-3">
                { for props.tiers.iter().map(|tier| {
                    let chance = props.distribution.chance_of(&tier.label);
                    html! {
                        <div key={tier.label.clone()} class={styles::LEGEND_ROW}>
                            <div class="flex items-center gap-3">
                                <div class={styles::LEGEND_DOT} style={format!("background-color: {}", tier.color)}></div>
                                <span class="font-medium text-gray-900 dark:text-white">{tier.label.as_str()}</span>
                            </div>
                            <div class="text-right">
                                <div class="font-bold text-gray-900 dark:text-white">
                                    {format!("{} {}", tier.count, if tier.count == 1 { "slice" } else { "slices" })}
                                </div>
                                <div class={styles::TEXT_SMALL}>{format!("{:.0}% chance", chance)}</div>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub result: Option<SpinResult>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H3}>{"Your Result"}</h3>
            {
                if let Some(result) = &props.result {
                    html! {
                        <div class={styles::CARD_RESULT}>
                            <div class="text-center">
                                <div class="text-sm text-gray-600 dark:text-gray-300 mb-2">{"Congratulations, you won"}</div>
                                <div class={styles::TEXT_PRIZE}>{result.prize.as_str()}</div>
                                <div class={styles::TEXT_SMALL}>{format_timestamp(result.timestamp)}</div>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-8 text-gray-500 dark:text-gray-400">
                            <div class="text-lg">{"No spin yet"}</div>
                            <div class="text-sm mt-2">{"Press Spin to take part"}</div>
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RulesCardProps {
    pub slice_count: usize,
}

#[function_component(RulesCard)]
pub fn rules_card(props: &RulesCardProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H3}>{"Rules"}</h3>
            <ul class={classes!(styles::TEXT_BODY, "text-sm", "space-y-2")}>
                <li>{format!("• The wheel has {} slices, arranged at random", props.slice_count)}</li>
                <li>{"• Each visitor can spin once; the result is saved automatically"}</li>
                <li>{"• The slice under the pointer decides the prize"}</li>
            </ul>
        </div>
    }
}
