mod bully;
mod fixed;
mod params;
mod random;
mod rdeep;
mod second;

pub use bully::BullyBot;
pub use fixed::FirstFixedMoveThenBaseBot;
pub use params::{Baseline, BotConfigError, DEFAULT_DEPTH, DEFAULT_SAMPLES, RdeepParams};
pub use random::RandBot;
pub use rdeep::RdeepBot;
pub use second::SecondBot;

use schnapsen_core::{BotRef, bot_ref};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

impl Baseline {
    pub fn build(self, seed: u64) -> BotRef {
        match self {
            Baseline::Random => bot_ref(RandBot::new(seed)),
            Baseline::Bully => bot_ref(BullyBot::new(seed)),
            Baseline::Second => bot_ref(SecondBot::new(seed)),
        }
    }
}

/// Bots that can be seated by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    Random,
    Bully,
    Second,
    Rdeep,
}

impl BotKind {
    pub const ALL: [BotKind; 4] = [
        BotKind::Random,
        BotKind::Bully,
        BotKind::Second,
        BotKind::Rdeep,
    ];

    pub fn build(self, params: RdeepParams, seed: u64) -> Result<BotRef, BotConfigError> {
        let bot = match self {
            BotKind::Random => bot_ref(RandBot::new(seed)),
            BotKind::Bully => bot_ref(BullyBot::new(seed)),
            BotKind::Second => bot_ref(SecondBot::new(seed)),
            BotKind::Rdeep => bot_ref(RdeepBot::new(params, seed)?),
        };
        Ok(bot)
    }
}

impl FromStr for BotKind {
    type Err = BotConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "random" | "rand" => Ok(BotKind::Random),
            "bully" => Ok(BotKind::Bully),
            "second" | "bot2" => Ok(BotKind::Second),
            "rdeep" => Ok(BotKind::Rdeep),
            other => Err(BotConfigError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BotKind::Random => "random",
            BotKind::Bully => "bully",
            BotKind::Second => "second",
            BotKind::Rdeep => "rdeep",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::{BotKind, RdeepParams};

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in BotKind::ALL {
            assert_eq!(kind.to_string().parse::<BotKind>().unwrap(), kind);
            let bot = kind.build(RdeepParams::default(), 3).unwrap();
            assert!(!bot.borrow().name().is_empty());
        }
        assert!("alphabeta".parse::<BotKind>().is_err());
    }
}
