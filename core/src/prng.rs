/// Mulberry32, a small deterministic 32-bit PRNG.
/// Pure function: returns (value_in_0_1, next_state).
pub fn prng_next(state: u32) -> (f64, u32) {
    let mut t = state.wrapping_add(0x6d2b79f5);
    let next_state = t;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let value = (t ^ (t >> 14)) as f64 / 4294967296.0;
    (value, next_state)
}

/// Returns a random integer in [min, max] inclusive.
pub fn prng_int_range(state: u32, min: i32, max: i32) -> (i32, u32) {
    let (value, next_state) = prng_next(state);
    let range = (max - min + 1) as f64;
    (min + (value * range).floor() as i32, next_state)
}

/// Source of the AI's dice rolls and item-kind draws.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;
}

/// Seeded `RandomSource` over `prng_next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Mulberry32 {
    fn below(&mut self, bound: u32) -> u32 {
        let (v, next) = prng_int_range(self.state, 0, bound as i32 - 1);
        self.state = next;
        v as u32
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRolls {
    rolls: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub(crate) fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRolls {
    fn below(&mut self, bound: u32) -> u32 {
        let v = self.rolls[self.pos % self.rolls.len()];
        self.pos += 1;
        v % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prng_deterministic() {
        let (v1, s1) = prng_next(12345);
        let (v2, s2) = prng_next(12345);
        assert_eq!(v1, v2);
        assert_eq!(s1, s2);
    }

    #[test]
    fn prng_range_0_to_1() {
        let mut state = 42u32;
        for _ in 0..1000 {
            let (value, next) = prng_next(state);
            assert!((0.0..1.0).contains(&value), "value out of range: {}", value);
            state = next;
        }
    }

    #[test]
    fn prng_known_vectors() {
        let (v, s) = prng_next(0);
        assert_eq!(v, 0.26642920868471265);
        assert_eq!(s, 1831565813);
        let (v, s) = prng_next(s);
        assert_eq!(v, 0.0003297457005828619);
        assert_eq!(s, 3663131626);

        let (v, s) = prng_next(42);
        assert_eq!(v, 0.6011037519201636);
        assert_eq!(s, 1831565855);
        let (v, _) = prng_next(s);
        assert_eq!(v, 0.44829055899754167);

        let (v, s) = prng_next(0xFFFFFFFF);
        assert_eq!(v, 0.8964226141106337);
        assert_eq!(s, 1831565812);
    }

    #[test]
    fn prng_int_range_sequence() {
        let (v, s) = prng_int_range(42, 0, 3);
        assert_eq!(v, 2); assert_eq!(s, 1831565855);
        let (v, s) = prng_int_range(s, 0, 3);
        assert_eq!(v, 1); assert_eq!(s, 3663131668);
        let (v, s) = prng_int_range(s, 0, 3);
        assert_eq!(v, 3); assert_eq!(s, 1199730185);
        let (v, s) = prng_int_range(s, 0, 3);
        assert_eq!(v, 2); assert_eq!(s, 3031295998);
        let (v, s) = prng_int_range(s, 0, 3);
        assert_eq!(v, 0); assert_eq!(s, 567894515);
    }

    #[test]
    fn mulberry_below_matches_int_range() {
        let mut rng = Mulberry32::new(42);
        let rolls: Vec<u32> = (0..5).map(|_| rng.below(4)).collect();
        assert_eq!(rolls, vec![2, 1, 3, 2, 0]);
        assert_eq!(rng.state(), 567894515);
    }

    #[test]
    fn mulberry_below_stays_in_bound() {
        let mut rng = Mulberry32::new(99);
        for _ in 0..1000 {
            assert!(rng.below(100) < 100);
        }
    }

    #[test]
    fn scripted_rolls_cycle() {
        let mut rolls = ScriptedRolls::new(&[10, 75]);
        assert_eq!(rolls.below(100), 10);
        assert_eq!(rolls.below(100), 75);
        assert_eq!(rolls.below(100), 10);
        assert_eq!(rolls.below(3), 0);
    }
}
