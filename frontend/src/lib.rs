pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use crate::components::GradientBackground;
use crate::pages::prize_wheel::PrizeWheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <GradientBackground>
            <PrizeWheelPage />
        </GradientBackground>
    }
}
