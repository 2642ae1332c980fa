pub mod agent;
pub mod error;
pub mod game;
pub mod model;
pub mod perspective;

pub use agent::{Bot, BotRef, PlaceholderBot, bot_ref};
pub use error::GameError;
pub use game::engine::{GamePlayEngine, GameResult};
pub use game::state::{GamePhase, GameState};
pub use perspective::{PlayerPerspective, Role};
