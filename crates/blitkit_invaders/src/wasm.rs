use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, KeyboardEvent};

use blitkit_common::Key;
use blitkit_core::{App, Screen};

use crate::app::InvadersApp;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Browser-facing shim around [`InvadersApp`].
///
/// Renders into the page's `<canvas id="canvas">` element. The embedding
/// script drives `tick` from `requestAnimationFrame` and forwards
/// `keydown`/`keyup` events to `key_event`.
#[wasm_bindgen]
pub struct InvadersWasm {
    app: InvadersApp,
    screen: Screen,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl InvadersWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<InvadersWasm, JsValue> {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = document.get_element_by_id("canvas").unwrap();
        let canvas: HtmlCanvasElement = canvas
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ())
            .unwrap();
        canvas.set_width(SCREEN_WIDTH);
        canvas.set_height(SCREEN_HEIGHT);

        let ctx = canvas
            .get_context("2d")
            .unwrap()
            .unwrap()
            .dyn_into::<CanvasRenderingContext2d>()
            .unwrap();

        let mut app = InvadersApp::new();
        app.init();
        Ok(InvadersWasm {
            app,
            screen: Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            ctx,
        })
    }

    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.app.update(&mut self.screen);
        let image_data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.screen.pixels()),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        )?;
        self.ctx.put_image_data(&image_data, 0.0, 0.0)
    }

    #[wasm_bindgen]
    pub fn key_event(&mut self, evt: KeyboardEvent, pressed: bool) {
        if let Some(key) = map_key(&evt.key()) {
            self.app.handle_key_event(key, pressed);
        }
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.app.reset();
    }

    #[wasm_bindgen]
    pub fn score(&self) -> u32 {
        self.app.score()
    }
}

fn map_key(key: &str) -> Option<Key> {
    match key {
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        " " => Some(Key::Space),
        "Enter" => Some(Key::Enter),
        "Escape" => Some(Key::Escape),
        "a" | "A" => Some(Key::A),
        "d" | "D" => Some(Key::D),
        "p" | "P" => Some(Key::P),
        "r" | "R" => Some(Key::R),
        _ => None,
    }
}
