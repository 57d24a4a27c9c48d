//! Runtime-tunable generator parameters, loaded from the environment the
//! same way the rest of this codebase's config surfaces do: sensible
//! defaults, overridden by whatever `env::var` finds.

use std::env;

/// Controls for the Quality-Controlled Puzzle Builder's threshold search.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Initial quality threshold a board's full-board solve must clear.
    pub initial_threshold: u32,
    /// Amount the threshold relaxes by after each exhausted attempt batch.
    pub threshold_step: u32,
    /// Floor the threshold never drops below.
    pub minimum_threshold: u32,
    /// Board-generation attempts tried at each threshold level before
    /// relaxing.
    pub attempts_per_threshold: u32,
    /// Interpolation between uniform and natural-frequency letter sampling;
    /// 0.0 is pure uniform, 1.0 is pure frequency-weighted.
    pub alpha: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            initial_threshold: 40,
            threshold_step: 10,
            minimum_threshold: 20,
            attempts_per_threshold: 5,
            alpha: 0.5,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = env::var("GENERATOR_INITIAL_THRESHOLD") {
            if let Ok(parsed) = v.parse() {
                config.initial_threshold = parsed;
            }
        }

        if let Ok(v) = env::var("GENERATOR_THRESHOLD_STEP") {
            if let Ok(parsed) = v.parse() {
                config.threshold_step = parsed;
            }
        }

        if let Ok(v) = env::var("GENERATOR_MINIMUM_THRESHOLD") {
            if let Ok(parsed) = v.parse() {
                config.minimum_threshold = parsed;
            }
        }

        if let Ok(v) = env::var("GENERATOR_ATTEMPTS_PER_THRESHOLD") {
            if let Ok(parsed) = v.parse() {
                config.attempts_per_threshold = parsed;
            }
        }

        if let Ok(v) = env::var("GENERATOR_ALPHA") {
            if let Ok(parsed) = v.parse::<f64>() {
                if (0.0..=1.0).contains(&parsed) {
                    config.alpha = parsed;
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_descending_staircase_from_initial_to_minimum() {
        let config = GeneratorConfig::default();
        assert!(config.initial_threshold > config.minimum_threshold);
        assert!(config.threshold_step > 0);
    }
}
