use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded randomness handed to the engine. Shuffling and tie-break coin flips
/// are the only consumers.
#[derive(Debug, Clone)]
pub struct RngState {
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `low..=high`.
    pub fn index_between(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Forward Fisher-Yates: slot `i` swaps with a uniform pick from `[i, last]`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.is_empty() {
            return;
        }
        let last = items.len() - 1;
        for i in 0..items.len() {
            let pick = self.index_between(i, last);
            items.swap(i, pick);
        }
    }
}
