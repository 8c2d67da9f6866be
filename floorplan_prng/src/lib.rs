// Deterministic, string-seeded pseudo-random number generator.
//
// A seed string is folded into a single 32-bit state with a multiply/rotate
// hash, and every draw advances that state through a 32-bit avalanche
// finalizer (xor-shift / multiply, twice, then a final xor-shift). The draw is
// the new state divided by 2^32, giving an `f64` in [0, 1).
//
// This crate is the single source of randomness for `floorplan_gen`. All
// sampling helpers (`uniform`, `int_inclusive`, `choice`, `stepped_uniform`)
// are defined purely in terms of `next_f64`, so one draw of a helper always
// consumes exactly one state step.
//
// **Critical constraint: determinism.** The hash and mixing constants below
// define what a seed string *means*. Golden layout fixtures are pinned to
// them; changing any constant, the seed folding, or the order in which a
// helper consumes draws silently invalidates every dataset generated so far.

use serde::{Deserialize, Serialize};

/// Initial hash value, xored with the seed length before folding.
const SEED_BASIS: u32 = 1_779_033_703;

/// Multiplier applied to each folded UTF-16 code unit.
const SEED_MULTIPLIER: u32 = 3_432_918_353;

/// First avalanche multiplier.
const MIX_MULTIPLIER_A: u32 = 2_246_822_507;

/// Second avalanche multiplier.
const MIX_MULTIPLIER_B: u32 = 3_266_489_909;

/// 2^32 as a float, the divisor that maps a `u32` into [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Grid step (cm) used by `stepped_uniform` unless the caller picks another.
pub const DEFAULT_STEP: f64 = 10.0;

/// String-seeded PRNG, one fresh instance per generated layout.
///
/// Construction is pure: two `SeedRng`s built from the same string produce
/// identical draw sequences on every platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRng {
    h: u32,
}

impl SeedRng {
    /// Create a PRNG from a seed string.
    ///
    /// The seed is folded as UTF-16 code units, so non-ASCII seeds produce
    /// the same draw sequence as the JavaScript string hash this mirrors.
    /// The empty string is a valid seed here; substituting a fallback for it
    /// is the caller's job.
    pub fn new(seed: &str) -> Self {
        let units: Vec<u16> = seed.encode_utf16().collect();
        let mut h = SEED_BASIS ^ units.len() as u32;
        for unit in units {
            h = (h ^ u32::from(unit)).wrapping_mul(SEED_MULTIPLIER);
            h = h.rotate_left(13);
        }
        Self { h }
    }

    /// Advance the state and return it.
    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.h;
        h = (h ^ (h >> 16)).wrapping_mul(MIX_MULTIPLIER_A);
        h = (h ^ (h >> 13)).wrapping_mul(MIX_MULTIPLIER_B);
        h ^= h >> 16;
        self.h = h;
        h
    }

    /// Generate a uniform `f64` in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Generate a uniform value in `[a, b)` (or `(b, a]` when `b < a`).
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.next_f64()
    }

    /// Generate a uniform integer in `[a, b]`, inclusive on both ends.
    pub fn int_inclusive(&mut self, a: i64, b: i64) -> i64 {
        self.uniform(a as f64, (b + 1) as f64).floor() as i64
    }

    /// Pick one element of `list` uniformly.
    ///
    /// Panics if `list` is empty.
    pub fn choice<'a, T>(&mut self, list: &'a [T]) -> &'a T {
        assert!(!list.is_empty(), "choice: list must not be empty");
        let index = self.int_inclusive(0, list.len() as i64 - 1);
        &list[index as usize]
    }

    /// Sample from `[a, b]` quantized down to multiples of `step`.
    ///
    /// The upper bound is widened by one unit before dividing so that `b`
    /// itself stays reachable when it sits on the grid.
    pub fn stepped_uniform(&mut self, a: f64, b: f64, step: f64) -> f64 {
        self.uniform(a / step, (b + 1.0) / step).floor() * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = SeedRng::new("alpha-1");
        let mut b = SeedRng::new("alpha-1");
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = SeedRng::new("alpha-1");
        let mut b = SeedRng::new("alpha-2");
        // Extremely unlikely to collide on the first value.
        assert_ne!(a.next_u32(), b.next_u32());
    }

    /// Pinned reference values. If this breaks, every stored layout fixture
    /// is invalid too.
    #[test]
    fn known_sequence_for_fixture_seeds() {
        let mut rng = SeedRng::new("alpha-1");
        assert_eq!(rng.next_u32(), 0x647f_b9e1);
        assert_eq!(rng.next_u32(), 0x012b_b693);
        assert_eq!(rng.next_u32(), 0x895c_ad87);

        let mut rng = SeedRng::new("0");
        assert_eq!(rng.next_u32(), 0x28c5_4e07);
        assert_eq!(rng.next_u32(), 0xfb62_9b74);
        assert_eq!(rng.next_u32(), 0x7d04_d9d2);
    }

    #[test]
    fn next_f64_is_state_over_two_pow_32() {
        let mut rng = SeedRng::new("alpha-1");
        let v = rng.next_f64();
        assert_eq!(v, f64::from(0x647f_b9e1_u32) / 4_294_967_296.0);
    }

    #[test]
    fn empty_seed_differs_from_zero_seed() {
        let mut empty = SeedRng::new("");
        let mut zero = SeedRng::new("0");
        assert_ne!(empty.next_u32(), zero.next_u32());
    }

    #[test]
    fn f64_in_unit_range() {
        let mut rng = SeedRng::new("range");
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "f64 out of range: {v}");
        }
    }

    #[test]
    fn uniform_within_bounds() {
        let mut rng = SeedRng::new("uniform");
        for _ in 0..10_000 {
            let v = rng.uniform(1.5, 3.5);
            assert!((1.5..3.5).contains(&v), "uniform out of range: {v}");
        }
    }

    #[test]
    fn int_inclusive_reaches_both_ends() {
        let mut rng = SeedRng::new("ints");
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let v = rng.int_inclusive(5, 10);
            assert!((5..=10).contains(&v), "int_inclusive out of range: {v}");
            seen[(v - 5) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value should be reachable");
    }

    #[test]
    fn choice_covers_list() {
        let mut rng = SeedRng::new("choice");
        let list = [0, 90, 180, 270];
        let mut counts = [0usize; 4];
        for _ in 0..4_000 {
            let v = *rng.choice(&list);
            counts[list.iter().position(|x| *x == v).unwrap()] += 1;
        }
        // Roughly 25% each, with generous slack.
        for c in counts {
            assert!((800..1200).contains(&c), "skewed choice counts: {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn choice_panics_on_empty() {
        let mut rng = SeedRng::new("empty");
        let list: [u8; 0] = [];
        rng.choice(&list);
    }

    #[test]
    fn stepped_uniform_lands_on_grid() {
        let mut rng = SeedRng::new("steps");
        let mut saw_max = false;
        for _ in 0..10_000 {
            let v = rng.stepped_uniform(120.0, 400.0, DEFAULT_STEP);
            assert!((120.0..=400.0).contains(&v), "stepped out of range: {v}");
            assert_eq!(v % DEFAULT_STEP, 0.0, "not on the 10 cm grid: {v}");
            saw_max |= v == 400.0;
        }
        assert!(saw_max, "upper bound on the grid should be reachable");
    }

    #[test]
    fn stepped_uniform_degenerate_range() {
        let mut rng = SeedRng::new("point");
        for _ in 0..100 {
            assert_eq!(rng.stepped_uniform(300.0, 300.0, DEFAULT_STEP), 300.0);
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = SeedRng::new("serde");
        for _ in 0..100 {
            rng.next_u32();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: SeedRng = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u32(), restored.next_u32());
        }
    }
}
