pub mod app;
pub mod image;
pub mod input;
pub mod screen;
pub mod sprite;

pub use app::App;
pub use image::Image;
pub use input::InputTracker;
pub use screen::Screen;
pub use sprite::Sprite;
