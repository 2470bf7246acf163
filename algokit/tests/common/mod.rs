//! Deterministic input generators shared by the integration tests.

#![allow(dead_code)]

/// Small linear congruential generator; reproducible across runs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Vector of `len` integers drawn from `[-range, range]`.
    pub fn ints(&mut self, len: usize, range: i64) -> Vec<i64> {
        (0..len)
            .map(|_| self.below((2 * range + 1) as u64) as i64 - range)
            .collect()
    }

    /// String of `len` chars drawn from `alphabet`.
    pub fn string(&mut self, len: usize, alphabet: &[char]) -> String {
        (0..len)
            .map(|_| alphabet[self.below(alphabet.len() as u64) as usize])
            .collect()
    }
}

/// Every binary sequence of length `len`.
pub fn all_binary(len: usize) -> impl Iterator<Item = Vec<i64>> {
    (0u32..1 << len).map(move |mask| (0..len).map(|i| i64::from((mask >> i) & 1)).collect())
}
