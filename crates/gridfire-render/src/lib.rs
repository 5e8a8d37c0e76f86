//! Software renderer: draws a [`GameSnapshot`](gridfire_core::state::GameSnapshot)
//! into a plain RGBA frame buffer the host blits however it likes.
//! No GPU, no windowing, no global state.

pub mod assets;
pub mod frame;
mod hud;
mod renderer;

pub use assets::{Assets, Sprite, SpriteKey};
pub use frame::Frame;
pub use renderer::render;
