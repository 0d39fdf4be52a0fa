use blitkit_common::Key;

use crate::screen::Screen;

/// Contract between an application and a frontend.
///
/// The frontend owns the window, the [`Screen`] and the event source; the
/// app owns its own state. Each frame the frontend forwards key events via
/// [`handle_key_event`](Self::handle_key_event), calls
/// [`update`](Self::update) with the screen to draw into, then presents
/// the screen's pixels. [`should_exit`](Self::should_exit) is checked once
/// per frame and [`exit`](Self::exit) runs exactly once before teardown.
pub trait App {
    fn init(&mut self);

    fn update(&mut self, screen: &mut Screen);

    fn handle_key_event(&mut self, key: Key, pressed: bool);

    fn should_exit(&self) -> bool;

    fn exit(&mut self);

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn scale(&self) -> u32;

    fn title(&self) -> String;
}
