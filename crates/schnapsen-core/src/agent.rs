use crate::error::GameError;
use crate::model::moves::{Move, PartialTrick, TrumpExchange};
use crate::perspective::PlayerPerspective;
use std::cell::RefCell;
use std::rc::Rc;

/// A decision maker seated at the table.
///
/// `leader_move` is `Some` exactly when the bot is following: it carries the move the
/// leader has already made in the current trick.
pub trait Bot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError>;

    /// Called on the follower after the leader swapped the trump jack.
    fn notify_trump_exchange(&mut self, _exchange: TrumpExchange) -> Result<(), GameError> {
        Ok(())
    }

    fn notify_game_end(
        &mut self,
        _won: bool,
        _perspective: &PlayerPerspective<'_>,
    ) -> Result<(), GameError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "bot"
    }
}

/// Shared handle to a bot. Copies of a game state share the same bot.
pub type BotRef = Rc<RefCell<dyn Bot>>;

pub fn bot_ref<B: Bot + 'static>(bot: B) -> BotRef {
    Rc::new(RefCell::new(bot))
}

/// Stand-in seated in sampled or full-information copies. Every call fails with
/// [`GameError::NotPlayable`] until real bots are substituted.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderBot;

impl PlaceholderBot {
    pub fn handle() -> BotRef {
        bot_ref(PlaceholderBot)
    }
}

impl Bot for PlaceholderBot {
    fn get_move(
        &mut self,
        _perspective: &PlayerPerspective<'_>,
        _leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        Err(GameError::NotPlayable)
    }

    fn notify_trump_exchange(&mut self, _exchange: TrumpExchange) -> Result<(), GameError> {
        Err(GameError::NotPlayable)
    }

    fn notify_game_end(
        &mut self,
        _won: bool,
        _perspective: &PlayerPerspective<'_>,
    ) -> Result<(), GameError> {
        Err(GameError::NotPlayable)
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
