pub mod bot;

pub use bot::{
    Baseline, BotConfigError, BotKind, BullyBot, FirstFixedMoveThenBaseBot, RandBot, RdeepBot,
    RdeepParams, SecondBot,
};
