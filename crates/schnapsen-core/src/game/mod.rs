pub mod bot_state;
pub mod engine;
pub mod scorer;
pub mod state;
pub mod trick_implementer;
pub mod validator;
