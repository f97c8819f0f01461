use serde::{Deserialize, Serialize};
use crate::constants::PERCENT_SCALE;
use crate::error::WheelError;

/// A named prize category and how many wedges it occupies on the wheel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeTier {
    pub label: String,
    pub count: u32,
    pub color: String,
}

impl PrizeTier {
    pub fn new(label: &str, count: u32, color: &str) -> Self {
        Self {
            label: label.to_string(),
            count,
            color: color.to_string(),
        }
    }
}

/// One step of a cumulative distribution: draws below `upper_bound` (and at or
/// above the previous bound) win `label`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DistributionEntry {
    pub label: String,
    pub upper_bound: f64,
}

impl DistributionEntry {
    pub fn new(label: &str, upper_bound: f64) -> Self {
        Self {
            label: label.to_string(),
            upper_bound,
        }
    }
}

pub const FIRST_PRIZE: &str = "First Prize";
pub const SECOND_PRIZE: &str = "Second Prize";
pub const THIRD_PRIZE: &str = "Third Prize";
pub const FOURTH_PRIZE: &str = "Fourth Prize";

// 12 wedges in total
pub fn reference_tiers() -> Vec<PrizeTier> {
    vec![
        PrizeTier::new(FIRST_PRIZE, 2, "#FFD700"),
        PrizeTier::new(SECOND_PRIZE, 3, "#C0C0C0"),
        PrizeTier::new(THIRD_PRIZE, 4, "#87CEEB"),
        PrizeTier::new(FOURTH_PRIZE, 3, "#98FB98"),
    ]
}

// Win chances are 15/25/30/30 and deliberately do not follow the wedge counts.
pub fn reference_distribution() -> Vec<DistributionEntry> {
    vec![
        DistributionEntry::new(FIRST_PRIZE, 15.0),
        DistributionEntry::new(SECOND_PRIZE, 40.0),
        DistributionEntry::new(THIRD_PRIZE, 70.0),
        DistributionEntry::new(FOURTH_PRIZE, 100.0),
    ]
}

/// A cumulative distribution over `[0, 100)` that has been checked for
/// strictly increasing bounds and full coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    entries: Vec<DistributionEntry>,
}

impl Distribution {
    pub fn new(entries: Vec<DistributionEntry>) -> Result<Self, WheelError> {
        let mut previous = 0.0;
        for entry in &entries {
            // NaN fails this comparison too
            if !(entry.upper_bound > previous) {
                return Err(WheelError::NonIncreasingBound {
                    label: entry.label.clone(),
                    bound: entry.upper_bound,
                    previous,
                });
            }
            previous = entry.upper_bound;
        }

        match entries.last() {
            None => Err(WheelError::EmptyDistribution),
            Some(last) if last.upper_bound < PERCENT_SCALE => {
                Err(WheelError::IncompleteCoverage { last: last.upper_bound })
            }
            Some(_) => Ok(Self { entries }),
        }
    }

    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Returns the first label whose bound is strictly greater than `roll`.
    /// A roll sitting exactly on a bound therefore belongs to the next tier.
    pub fn resolve(&self, roll: f64) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.upper_bound > roll)
            .or_else(|| self.entries.last())
            .map(|entry| entry.label.as_str())
            .unwrap_or_default()
    }

    /// Win chance of `label` in percent, clamped to the `[0, 100)` draw range.
    pub fn chance_of(&self, label: &str) -> f64 {
        let mut lower = 0.0_f64;
        let mut chance = 0.0;
        for entry in &self.entries {
            let upper = entry.upper_bound.min(PERCENT_SCALE);
            if entry.label == label {
                chance += (upper - lower).max(0.0);
            }
            lower = upper;
        }
        chance
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Distribution {
        Distribution::new(reference_distribution()).unwrap()
    }

    #[test]
    fn test_reference_tiers_fill_twelve_slices() {
        let total: u32 = reference_tiers().iter().map(|tier| tier.count).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_boundary_roll_goes_to_next_tier() {
        let distribution = reference();
        assert_eq!(distribution.resolve(14.999), FIRST_PRIZE);
        assert_eq!(distribution.resolve(15.0), SECOND_PRIZE);
        assert_eq!(distribution.resolve(40.0), THIRD_PRIZE);
        assert_eq!(distribution.resolve(70.0), FOURTH_PRIZE);
        assert_eq!(distribution.resolve(0.0), FIRST_PRIZE);
        assert_eq!(distribution.resolve(99.999), FOURTH_PRIZE);
    }

    #[test]
    fn test_chances_follow_bounds_not_slice_counts() {
        let distribution = reference();
        assert!((distribution.chance_of(FIRST_PRIZE) - 15.0).abs() < 1e-9);
        assert!((distribution.chance_of(SECOND_PRIZE) - 25.0).abs() < 1e-9);
        assert!((distribution.chance_of(THIRD_PRIZE) - 30.0).abs() < 1e-9);
        assert!((distribution.chance_of(FOURTH_PRIZE) - 30.0).abs() < 1e-9);
        assert_eq!(distribution.chance_of("Nothing"), 0.0);
    }

    #[test]
    fn test_rejects_empty_distribution() {
        assert!(matches!(Distribution::new(vec![]), Err(WheelError::EmptyDistribution)));
    }

    #[test]
    fn test_rejects_non_increasing_bounds() {
        let entries = vec![
            DistributionEntry::new(FIRST_PRIZE, 40.0),
            DistributionEntry::new(SECOND_PRIZE, 40.0),
            DistributionEntry::new(THIRD_PRIZE, 100.0),
        ];
        match Distribution::new(entries) {
            Err(WheelError::NonIncreasingBound { label, bound, previous }) => {
                assert_eq!(label, SECOND_PRIZE);
                assert_eq!(bound, 40.0);
                assert_eq!(previous, 40.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_partial_coverage() {
        let entries = vec![
            DistributionEntry::new(FIRST_PRIZE, 15.0),
            DistributionEntry::new(SECOND_PRIZE, 90.0),
        ];
        assert!(matches!(
            Distribution::new(entries),
            Err(WheelError::IncompleteCoverage { last }) if last == 90.0
        ));
    }

    #[test]
    fn test_accepts_overshooting_final_bound() {
        let entries = vec![
            DistributionEntry::new(FIRST_PRIZE, 50.0),
            DistributionEntry::new(SECOND_PRIZE, 120.0),
        ];
        let distribution = Distribution::new(entries).unwrap();
        assert_eq!(distribution.resolve(99.0), SECOND_PRIZE);
        assert!((distribution.chance_of(SECOND_PRIZE) - 50.0).abs() < 1e-9);
    }
}
