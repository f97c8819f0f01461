use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::prize_table::PrizeTier;
use crate::rotation::angle_per_slice;

/// One wedge of the wheel, inheriting its tier's label and color
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub color: String,
}

/// Expands every tier into `count` slices (tier order preserved) and shuffles
/// the result once. Callers must pass a table with at least one slice.
pub fn build_slices<R: Rng + ?Sized>(tiers: &[PrizeTier], rng: &mut R) -> Vec<Slice> {
    let mut slices: Vec<Slice> = tiers
        .iter()
        .flat_map(|tier| {
            (0..tier.count).map(move |_| Slice {
                label: tier.label.clone(),
                color: tier.color.clone(),
            })
        })
        .collect();
    slices.shuffle(rng);
    slices
}

/// Angular extent of a slice, in degrees clockwise from the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn new(index: usize, slice_count: usize) -> Self {
        let width = angle_per_slice(slice_count);
        let start_angle = index as f64 * width;
        Self {
            start_angle,
            end_angle: start_angle + width,
        }
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Where this wedge sits once the wheel has turned clockwise by `rotation`
    pub fn rotated(&self, rotation: f64) -> Self {
        Self {
            start_angle: self.start_angle + rotation,
            end_angle: self.end_angle + rotation,
        }
    }

    /// Offset from the wheel centre (x right, y down) where the label of this
    /// wedge is drawn.
    pub fn label_anchor(&self, radius: f64) -> (f64, f64) {
        let angle = self.mid_angle().to_radians();
        (radius * angle.sin(), -radius * angle.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_table::reference_tiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn label_counts(slices: &[Slice]) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for slice in slices {
            *counts.entry(slice.label.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_build_keeps_label_multiset() {
        let tiers = reference_tiers();
        let expected: HashMap<String, u32> = tiers
            .iter()
            .map(|tier| (tier.label.clone(), tier.count))
            .collect();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let slices = build_slices(&tiers, &mut rng);
            assert_eq!(slices.len(), 12);
            assert_eq!(label_counts(&slices), expected);
        }
    }

    #[test]
    fn test_build_keeps_tier_color() {
        let tiers = reference_tiers();
        let mut rng = StdRng::seed_from_u64(7);
        for slice in build_slices(&tiers, &mut rng) {
            let tier = tiers.iter().find(|tier| tier.label == slice.label).unwrap();
            assert_eq!(slice.color, tier.color);
        }
    }

    #[test]
    fn test_build_is_deterministic_per_seed() {
        let tiers = reference_tiers();
        let first = build_slices(&tiers, &mut StdRng::seed_from_u64(42));
        let second = build_slices(&tiers, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_moves_slices() {
        // With 12 slices at least one of a handful of seeds must leave tier order.
        let tiers = reference_tiers();
        let unshuffled: Vec<String> = tiers
            .iter()
            .flat_map(|tier| std::iter::repeat(tier.label.clone()).take(tier.count as usize))
            .collect();
        let moved = (0..10).any(|seed| {
            let slices = build_slices(&tiers, &mut StdRng::seed_from_u64(seed));
            slices.iter().map(|slice| slice.label.clone()).collect::<Vec<_>>() != unshuffled
        });
        assert!(moved);
    }

    #[test]
    fn test_every_position_sees_every_tier() {
        let tiers = reference_tiers();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = vec![std::collections::HashSet::new(); 12];
        for _ in 0..500 {
            for (index, slice) in build_slices(&tiers, &mut rng).into_iter().enumerate() {
                seen[index].insert(slice.label);
            }
        }
        assert!(seen.iter().all(|labels| labels.len() == tiers.len()));
    }

    #[test]
    fn test_wedges_partition_the_circle() {
        let wedges: Vec<Wedge> = (0..12).map(|index| Wedge::new(index, 12)).collect();
        assert_eq!(wedges[0].start_angle, 0.0);
        assert_eq!(wedges[5].mid_angle(), 165.0);
        assert!((wedges[11].end_angle - 360.0).abs() < 1e-9);
        for pair in wedges.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotated_wedge_under_pointer_is_landed_slice() {
        use crate::constants::{FULL_TURN, POINTER_ANGLE};
        use crate::rotation::{landed_index, normalize_angle};
        use rand::Rng;

        let mut rng = StdRng::seed_from_u64(21);
        for slice_count in [1, 2, 5, 12, 37] {
            for _ in 0..2_000 {
                let rotation = rng.gen_range(0.0..5.0 * FULL_TURN);
                let under_pointer: Vec<usize> = (0..slice_count)
                    .filter(|&index| {
                        let wedge = Wedge::new(index, slice_count).rotated(rotation);
                        normalize_angle(POINTER_ANGLE - wedge.start_angle) < wedge.end_angle - wedge.start_angle
                    })
                    .collect();
                assert_eq!(under_pointer.len(), 1, "rotation={}", rotation);
                assert_eq!(Some(under_pointer[0]), landed_index(rotation, slice_count));
            }
        }
    }

    #[test]
    fn test_label_anchor_measures_clockwise_from_top() {
        let (x, y) = Wedge::new(0, 4).label_anchor(60.0);
        // First quarter is centred at 45 degrees, up and to the right
        assert!((x - 60.0 * 45f64.to_radians().sin()).abs() < 1e-9);
        assert!(y < 0.0);

        let (x, y) = Wedge::new(1, 2).label_anchor(10.0);
        // Second half is centred at 270 degrees, to the left
        assert!((x + 10.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
