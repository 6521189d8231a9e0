//! Randomized display order.
//!
//! The directory is shuffled exactly once after a successful load. The random
//! source is a parameter so callers decide between a seeded generator (tests,
//! `--seed`) and system entropy.

use rand::Rng;

/// Fisher-Yates shuffle in place.
///
/// Walks `i` from the last index down to 1, drawing `j` uniformly from
/// `[0, i]` and swapping the two slots.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy, leaving `items` untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}
