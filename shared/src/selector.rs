use rand::seq::SliceRandom;
use rand::Rng;
use crate::constants::PERCENT_SCALE;
use crate::prize_table::Distribution;
use crate::slices::Slice;

/// Draws a roll in `[0, 100)` and returns the tier it falls into.
pub fn select_prize<'a, R: Rng + ?Sized>(distribution: &'a Distribution, rng: &mut R) -> &'a str {
    let roll = rng.gen_range(0.0..PERCENT_SCALE);
    distribution.resolve(roll)
}

/// Picks uniformly among the positions carrying `label`.
pub fn select_slice_index<R: Rng + ?Sized>(slices: &[Slice], label: &str, rng: &mut R) -> Option<usize> {
    let candidates: Vec<usize> = slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.label == label)
        .map(|(index, _)| index)
        .collect();
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_table::*;
    use crate::slices::build_slices;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_draw_proportions_match_distribution() {
        let distribution = Distribution::new(reference_distribution()).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 100_000;

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(select_prize(&distribution, &mut rng)).or_insert(0) += 1;
        }

        for label in distribution.labels() {
            let expected = distribution.chance_of(label) / 100.0;
            let observed = counts.get(label).copied().unwrap_or(0) as f64 / draws as f64;
            // Six standard errors of a binomial proportion
            let tolerance = 6.0 * (expected * (1.0 - expected) / draws as f64).sqrt();
            assert!(
                (observed - expected).abs() < tolerance,
                "{}: observed {} expected {}",
                label,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_slice_index_carries_label() {
        let slices = build_slices(&reference_tiers(), &mut StdRng::seed_from_u64(9));
        let mut rng = StdRng::seed_from_u64(10);
        for tier in reference_tiers() {
            for _ in 0..50 {
                let index = select_slice_index(&slices, &tier.label, &mut rng).unwrap();
                assert_eq!(slices[index].label, tier.label);
            }
        }
    }

    #[test]
    fn test_slice_index_is_uniform_among_matches() {
        let slices = build_slices(&reference_tiers(), &mut StdRng::seed_from_u64(4));
        let mut rng = StdRng::seed_from_u64(5);
        let mut hits: HashMap<usize, u32> = HashMap::new();
        for _ in 0..40_000 {
            let index = select_slice_index(&slices, THIRD_PRIZE, &mut rng).unwrap();
            *hits.entry(index).or_insert(0) += 1;
        }
        // Four wedges carry the third prize, so each should get about 10_000 hits
        assert_eq!(hits.len(), 4);
        assert!(hits.values().all(|&count| (9_000..11_000).contains(&count)));
    }

    #[test]
    fn test_missing_label_has_no_index() {
        let slices = build_slices(&reference_tiers(), &mut StdRng::seed_from_u64(0));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_slice_index(&slices, "Grand Prize", &mut rng), None);
        assert_eq!(select_slice_index(&[], FIRST_PRIZE, &mut rng), None);
    }
}
