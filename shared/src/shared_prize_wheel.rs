use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::prize_table::{Distribution, PrizeTier};
use crate::rotation::{angle_per_slice, jitter, landed_index, spin_delta};
use crate::selector::{select_prize, select_slice_index};
use crate::slices::{build_slices, Slice};
use crate::storage::{load_result, save_result, ResultStore};

/// The one-time outcome of a wheel, persisted once settled
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub index: usize,
    pub prize: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelPhase {
    Idle,
    Spinning(SpinPlan),
    Settled(SpinResult),
}

/// What the renderer needs to animate an accepted spin
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub target_index: usize,
    pub prize: String,
    /// Whole turns plus the offset to the target centre
    pub delta: f64,
    pub jitter: f64,
    /// Cumulative rotation the wheel must end at
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent {
    SpinRequested,
    AnimationComplete { timestamp: i64 },
}

/// A single-use prize wheel.
///
/// The prize is drawn when the spin is requested; the animation that follows
/// only has to report back when it is done. Once a result exists, either
/// restored from the store or produced by a spin, the wheel never spins again.
#[derive(Debug, Clone)]
pub struct PrizeWheel<S: ResultStore> {
    config: WheelConfig,
    distribution: Distribution,
    slices: Vec<Slice>,
    rotation: f64,
    phase: WheelPhase,
    store: S,
}

impl<S: ResultStore> PrizeWheel<S> {
    pub fn new<R: Rng + ?Sized>(config: WheelConfig, store: S, rng: &mut R) -> Result<Self, WheelError> {
        let distribution = config.validated()?;
        let slices = build_slices(&config.tiers, rng);
        let phase = match load_result(&store, &config.storage_key) {
            Some(result) => {
                log::info!("Restored spin result: {} at {}", result.prize, result.timestamp);
                WheelPhase::Settled(result)
            }
            None => WheelPhase::Idle,
        };

        Ok(Self {
            config,
            distribution,
            slices,
            rotation: 0.0,
            phase,
            store,
        })
    }

    pub fn handle<R: Rng + ?Sized>(&mut self, event: WheelEvent, rng: &mut R) {
        match event {
            WheelEvent::SpinRequested => {
                self.request_spin(rng);
            }
            WheelEvent::AnimationComplete { timestamp } => {
                self.complete_animation(timestamp);
            }
        }
    }

    /// Starts a spin if the wheel is idle. Returns `None` and changes nothing
    /// while spinning or once a result exists.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinPlan> {
        if !self.can_spin() {
            log::debug!("Ignoring spin request in phase {:?}", self.phase);
            return None;
        }

        let prize = select_prize(&self.distribution, rng).to_string();
        let target_index = match select_slice_index(&self.slices, &prize, rng) {
            Some(index) => index,
            None => {
                log::error!("Prize {} has no slice on the wheel", prize);
                return None;
            }
        };

        let slice_count = self.slices.len();
        let delta = spin_delta(self.rotation, target_index, slice_count, self.config.spins);
        let offset = jitter(rng, self.angle_per_slice(), self.config.jitter_ratio);
        self.rotation += delta + offset;

        log::info!("Spinning to slice {} ({})", target_index, prize);
        let plan = SpinPlan {
            target_index,
            prize,
            delta,
            jitter: offset,
            rotation: self.rotation,
        };
        self.phase = WheelPhase::Spinning(plan.clone());
        Some(plan)
    }

    /// Settles a finished spin: reads the slice under the pointer, persists the
    /// result and locks the wheel. Ignored unless a spin is in progress.
    pub fn complete_animation(&mut self, timestamp: i64) -> Option<&SpinResult> {
        let planned = match &self.phase {
            WheelPhase::Spinning(plan) => plan.target_index,
            _ => {
                log::debug!("Ignoring animation completion in phase {:?}", self.phase);
                return None;
            }
        };

        let Some(index) = landed_index(self.rotation, self.slices.len()) else {
            log::error!("Cannot settle a wheel without slices");
            return None;
        };
        if index != planned {
            log::warn!("Wheel landed on slice {} but slice {} was drawn", index, planned);
        }

        let result = SpinResult {
            index,
            prize: self.slices[index].label.clone(),
            timestamp,
        };
        if let Err(e) = save_result(&mut self.store, &self.config.storage_key, &result) {
            log::error!("Failed to persist spin result: {}", e);
        }

        log::info!("Wheel settled on {}", result.prize);
        self.phase = WheelPhase::Settled(result);
        self.result()
    }

    pub fn can_spin(&self) -> bool {
        matches!(self.phase, WheelPhase::Idle) && !self.slices.is_empty()
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, WheelPhase::Spinning(_))
    }

    /// The spin being animated, if any
    pub fn spin_plan(&self) -> Option<&SpinPlan> {
        match &self.phase {
            WheelPhase::Spinning(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SpinResult> {
        match &self.phase {
            WheelPhase::Settled(result) => Some(result),
            _ => None,
        }
    }

    pub fn phase(&self) -> &WheelPhase {
        &self.phase
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn angle_per_slice(&self) -> f64 {
        angle_per_slice(self.slices.len())
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn tiers(&self) -> &[PrizeTier] {
        &self.config.tiers
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }
}
