use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::constants::*;
use crate::error::WheelError;
use crate::prize_table::{reference_distribution, reference_tiers, Distribution, DistributionEntry, PrizeTier};

/// Build-time description of a wheel. `Default` is the reference 12-slice wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct WheelConfig {
    pub tiers: Vec<PrizeTier>,
    pub distribution: Vec<DistributionEntry>,
    /// Whole turns before the wheel settles. Purely visual.
    #[validate(range(min = 1, max = 50))]
    pub spins: u32,
    /// Jitter span as a fraction of one slice width.
    #[validate(range(min = 0.0, max = 0.5))]
    pub jitter_ratio: f64,
    #[validate(length(min = 1))]
    pub storage_key: String,
    #[validate(range(min = 100, max = 60000))]
    pub spin_duration_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            tiers: reference_tiers(),
            distribution: reference_distribution(),
            spins: DEFAULT_SPINS,
            jitter_ratio: DEFAULT_JITTER_RATIO,
            storage_key: RESULT_STORAGE_KEY.to_string(),
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
        }
    }
}

impl WheelConfig {
    /// Checks every invariant the wheel relies on and returns the prize
    /// distribution ready for drawing.
    pub fn validated(&self) -> Result<Distribution, WheelError> {
        self.validate()?;

        if self.tiers.is_empty() {
            return Err(WheelError::EmptyPrizeTable);
        }
        let mut labels = HashSet::new();
        for tier in &self.tiers {
            if tier.count == 0 {
                return Err(WheelError::EmptyTier { label: tier.label.clone() });
            }
            if !labels.insert(tier.label.as_str()) {
                return Err(WheelError::DuplicateTier { label: tier.label.clone() });
            }
        }

        let distribution = Distribution::new(self.distribution.clone())?;
        if let Some(unknown) = distribution.labels().find(|label| !labels.contains(label)) {
            return Err(WheelError::UnknownPrize { label: unknown.to_string() });
        }
        Ok(distribution)
    }
}
