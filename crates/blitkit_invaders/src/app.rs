use blitkit_common::{Color, Key};
use blitkit_core::{App, InputTracker, Screen};

use crate::game::Game;
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend-facing application wrapper for the invaders game.
///
/// Owns the game state and the input tracker; implements the shared `App`
/// trait so the SDL2 frontend (or the wasm shim) can drive it.
#[derive(Default)]
pub struct InvadersApp {
    should_exit: bool,
    paused: bool,
    game: Game,
    input: InputTracker,
}

impl InvadersApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!("invaders init");
    }

    fn update(&mut self, screen: &mut Screen) {
        if self.input.is_pressed(Key::Escape) {
            self.should_exit = true;
        }
        if self.input.is_pressed(Key::P) {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        if !self.paused {
            self.game.tick(&mut self.input);
        }

        self.game.render(screen);

        if self.paused {
            overlay_pause_banner(screen);
        }
    }

    fn handle_key_event(&mut self, key: Key, pressed: bool) {
        self.input.handle_key_event(key, pressed);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("invaders exit, final score {}", self.game.score());
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Blitkit Invaders".to_string()
    }
}

/// Striped band along the top edge, drawn over the frame while paused.
fn overlay_pause_banner(screen: &mut Screen) {
    let banner_height = 12.min(screen.height());
    for y in 0..banner_height {
        let color = if y % 2 == 0 { Color::WHITE } else { Color::BLACK };
        for x in 0..screen.width() {
            screen.set_pixel(x, y, color);
        }
    }
}
