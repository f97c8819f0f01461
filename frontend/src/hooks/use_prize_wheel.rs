use std::rc::Rc;
use prize_wheel_shared::{PrizeWheel, WheelEvent};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;
use crate::config::wheel_config;
use crate::storage::LocalResultStore;

#[derive(Clone)]
pub struct WheelState {
    pub wheel: Option<PrizeWheel<LocalResultStore>>,
    pub error: Option<String>,
    rng: SmallRng,
}

impl WheelState {
    fn init() -> Self {
        let mut rng = SmallRng::from_entropy();
        match PrizeWheel::new(wheel_config(), LocalResultStore, &mut rng) {
            Ok(wheel) => Self {
                wheel: Some(wheel),
                error: None,
                rng,
            },
            Err(e) => {
                log::error!("Prize wheel configuration rejected: {}", e);
                Self {
                    wheel: None,
                    error: Some(e.to_string()),
                    rng,
                }
            }
        }
    }
}

impl Reducible for WheelState {
    type Action = WheelEvent;

    fn reduce(self: Rc<Self>, event: WheelEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.wheel.as_mut() {
            Some(wheel) => wheel.handle(event, &mut next.rng),
            None => return self,
        }
        Rc::new(next)
    }
}

/// Owns the wheel for the lifetime of the page. Dispatch `WheelEvent`s to drive it.
#[hook]
pub fn use_prize_wheel() -> UseReducerHandle<WheelState> {
    use_reducer(WheelState::init)
}
