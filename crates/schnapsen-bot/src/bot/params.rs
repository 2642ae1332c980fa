use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SAMPLES: usize = 6;
pub const DEFAULT_DEPTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotConfigError {
    #[error("rdeep needs at least one sample, got {0}")]
    NoSamples(usize),
    #[error("rdeep needs a depth of at least one, got {0}")]
    NoDepth(usize),
    #[error("unknown baseline policy '{0}'")]
    UnknownBaseline(String),
    #[error("unknown bot kind '{0}'")]
    UnknownKind(String),
}

/// Policy the rollouts fall back to once the fixed first moves are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    #[default]
    Random,
    Bully,
    Second,
}

impl FromStr for Baseline {
    type Err = BotConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "random" | "rand" => Ok(Baseline::Random),
            "bully" => Ok(Baseline::Bully),
            "second" | "bot2" => Ok(Baseline::Second),
            other => Err(BotConfigError::UnknownBaseline(other.to_string())),
        }
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Baseline::Random => "random",
            Baseline::Bully => "bully",
            Baseline::Second => "second",
        };
        f.write_str(label)
    }
}

/// Search budget of the rdeep bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdeepParams {
    pub samples: usize,
    pub depth: usize,
    pub baseline: Baseline,
}

impl Default for RdeepParams {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            depth: DEFAULT_DEPTH,
            baseline: Baseline::Random,
        }
    }
}

impl RdeepParams {
    pub fn new(samples: usize, depth: usize, baseline: Baseline) -> Result<Self, BotConfigError> {
        Self {
            samples,
            depth,
            baseline,
        }
        .validated()
    }

    /// Defaults overridden by `SCHNAPSEN_RDEEP_SAMPLES`, `SCHNAPSEN_RDEEP_DEPTH` and
    /// `SCHNAPSEN_RDEEP_BASELINE`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub fn validated(self) -> Result<Self, BotConfigError> {
        if self.samples < 1 {
            return Err(BotConfigError::NoSamples(self.samples));
        }
        if self.depth < 1 {
            return Err(BotConfigError::NoDepth(self.depth));
        }
        Ok(self)
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let samples = read("SCHNAPSEN_RDEEP_SAMPLES")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value >= 1)
            .unwrap_or(defaults.samples);
        let depth = read("SCHNAPSEN_RDEEP_DEPTH")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value >= 1)
            .unwrap_or(defaults.depth);
        let baseline = read("SCHNAPSEN_RDEEP_BASELINE")
            .and_then(|raw| raw.parse::<Baseline>().ok())
            .unwrap_or(defaults.baseline);
        Self {
            samples,
            depth,
            baseline,
        }
    }
}
