use crate::error::SimError;

/// Tunables for one simulation run. The process count is not here: it is the
/// `N` of `Simulation<N>`, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Upper bound for a generated process's run time (lower bound is 1).
    pub max_run_time: u32,
    /// Pause between automatic dispatches.
    pub step_delay_ms: u32,
    pub seed: u32,
}

impl SimConfig {
    /// Run times 1..=6, one automatic step per second.
    pub const DEFAULT: Self = Self {
        max_run_time: 6,
        step_delay_ms: 1000,
        seed: 0x5EED_2024,
    };

    pub const fn with_max_run_time(mut self, max_run_time: u32) -> Self {
        self.max_run_time = max_run_time;
        self
    }

    pub const fn with_step_delay_ms(mut self, step_delay_ms: u32) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }

    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub const fn validate(&self) -> Result<(), SimError> {
        if self.max_run_time == 0 {
            return Err(SimError::ZeroMaxRunTime);
        }
        if self.step_delay_ms == 0 {
            return Err(SimError::ZeroDelay);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
