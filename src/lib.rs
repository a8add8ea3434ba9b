#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![allow(rustdoc::bare_urls)]

mod arena;
mod error;
mod node;
mod options;

/// A map implementation based on skiplist
pub mod map;

pub use error::Error;
pub use map::{EntryRef, SkipMap};
pub use options::Options;

/// The maximum height a node tower can have, and the upper bound for
/// [`Options::with_max_height`].
pub const MAX_HEIGHT: usize = 32;

/// Precompute the skiplist probabilities so that only a single random number
/// needs to be generated and so that the optimal pvalue can be used (inverse
/// of Euler's number).
const PROBABILITIES: [u32; MAX_HEIGHT] = {
  const P: f64 = 1.0 / core::f64::consts::E;

  let mut probabilities = [0; MAX_HEIGHT];
  let mut p = 1f64;

  let mut i = 0;
  while i < MAX_HEIGHT {
    probabilities[i] = ((u32::MAX as f64) * p) as u32;
    p *= P;
    i += 1;
  }

  probabilities
};

/// Draws the tower height for a new node, in `[1, max_height]`.
fn random_height(max_height: u8) -> u32 {
  let rnd: u32 = rand::random();
  height_for(rnd, max_height)
}

/// Converts one uniform draw into a tower height by walking the probability
/// table. Kept separate from the draw itself so the promotion logic can be
/// exercised with fixed inputs.
const fn height_for(rnd: u32, max_height: u8) -> u32 {
  let mut h = 1;
  while h < max_height as u32 && rnd <= PROBABILITIES[h as usize] {
    h += 1;
  }
  h
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn probabilities_decrease_geometrically() {
    assert_eq!(PROBABILITIES[0], u32::MAX);
    for h in 1..MAX_HEIGHT {
      assert!(PROBABILITIES[h] < PROBABILITIES[h - 1]);
    }
  }

  #[test]
  fn height_for_bounds() {
    // The largest draw never climbs, the smallest always climbs to the top.
    assert_eq!(height_for(u32::MAX, MAX_HEIGHT as u8), 1);
    assert_eq!(height_for(0, MAX_HEIGHT as u8), MAX_HEIGHT as u32);
    assert_eq!(height_for(0, 1), 1);

    for rnd in [0u32, 1, u32::MAX / 2, u32::MAX] {
      let h = height_for(rnd, 12);
      assert!((1..=12).contains(&h));
    }
  }

  #[test]
  fn height_distribution_approximates_inverse_e() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const N: usize = 200_000;
    const P: f64 = 1.0 / core::f64::consts::E;

    let mut rng = StdRng::seed_from_u64(42);
    let mut counts = [0usize; MAX_HEIGHT + 1];
    for _ in 0..N {
      let h = height_for(rng.random::<u32>(), MAX_HEIGHT as u8) as usize;
      counts[h] += 1;
    }

    let at_least = |h: usize| counts[h..].iter().sum::<usize>();

    // Roughly a fraction of 1/e of all nodes reaches the second level, and
    // the same continuation ratio holds one level up.
    let reached_2 = at_least(2) as f64 / N as f64;
    assert!((reached_2 - P).abs() < 0.01, "reached_2 = {reached_2}");

    let reached_3 = at_least(3) as f64 / at_least(2) as f64;
    assert!((reached_3 - P).abs() < 0.02, "reached_3 = {reached_3}");
  }
}
