pub mod app;
pub mod game;
pub mod sprites;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use app::InvadersApp;
pub use game::{Game, GameConfig};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u32 = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 120;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 4;
