//! Host bridge: input sampling, the fixed-rate game loop thread,
//! best-score persistence, and the session state machine wrapping the
//! engine. Everything a windowing/audio host needs short of actually
//! opening a window.

pub mod game_loop;
pub mod input;
pub mod persistence;
pub mod session;

pub use game_loop::{spawn_game_loop, LoopCommand};
pub use input::InputSampler;
pub use persistence::BestScoreStore;
pub use session::Session;
