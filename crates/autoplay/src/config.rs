use okey_core::DEFAULT_SEED;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// Seed for the first game; game `n` uses `seed + n`.
    pub seed: u64,
    pub games: u32,
    pub max_turns: u32,
    pub keep_turns: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            games: 1,
            max_turns: 500,
            keep_turns: true,
        }
    }
}
