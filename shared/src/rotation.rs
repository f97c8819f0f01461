//! Mapping between slice indices and wheel rotations.
//!
//! Rotations are in degrees, clockwise, and cumulative over the lifetime of a
//! wheel. Slice `i` spans `[i * a, (i + 1) * a)` clockwise from the pointer
//! when the wheel sits at rotation 0, where `a` is the width of one slice.

use rand::Rng;
use crate::constants::{FULL_TURN, POINTER_ANGLE};

/// Width of one slice. `slice_count` must be non-zero.
pub fn angle_per_slice(slice_count: usize) -> f64 {
    FULL_TURN / slice_count as f64
}

pub fn slice_center_angle(index: usize, angle_per_slice: f64) -> f64 {
    index as f64 * angle_per_slice + angle_per_slice / 2.0
}

/// Rotation from a resting wheel that parks the centre of `index` under the
/// pointer after `spins` whole turns.
pub fn final_rotation(index: usize, slice_count: usize, spins: u32) -> f64 {
    let center = slice_center_angle(index, angle_per_slice(slice_count));
    spins as f64 * FULL_TURN + (FULL_TURN - center)
}

/// Amount to add to `current_rotation` so the wheel ends on the centre of
/// `index`. Always at least `spins` whole turns, so rotation only grows.
pub fn spin_delta(current_rotation: f64, index: usize, slice_count: usize, spins: u32) -> f64 {
    let center = slice_center_angle(index, angle_per_slice(slice_count));
    let target = (FULL_TURN - center).rem_euclid(FULL_TURN);
    let adjustment = (target - normalize_angle(current_rotation)).rem_euclid(FULL_TURN);
    spins as f64 * FULL_TURN + adjustment
}

/// Cosmetic offset within `±ratio / 2` of a slice width.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, angle_per_slice: f64, ratio: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * angle_per_slice * ratio
}

pub fn normalize_angle(rotation: f64) -> f64 {
    ((rotation % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// Index of the slice under the pointer once the wheel rests at `rotation`,
/// or `None` for a wheel without slices.
pub fn landed_index(rotation: f64, slice_count: usize) -> Option<usize> {
    if slice_count == 0 {
        return None;
    }
    let width = angle_per_slice(slice_count);
    let from_pointer = (POINTER_ANGLE - normalize_angle(rotation) + FULL_TURN) % FULL_TURN;
    Some((from_pointer / width).floor() as usize % slice_count)
}
