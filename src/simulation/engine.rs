//! High-level runtime engine settings
//!
//! Selects windowed or headless mode and the trail colour seed
//! used when building and running a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub headless: bool, // false = bevy window, true = log only
    pub ticks: u64, // ticks to run in headless mode
    pub seed: Option<u64>, // trail colour rng seed, random if None
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            headless: false,
            ticks: 600,
            seed: None,
        }
    }
}
