use std::sync::Arc;

use crate::image::Image;

/// An immutable view of a sub-rectangle of a shared image.
///
/// A sprite never owns its pixels; it holds a counted handle to the image
/// (typically a sheet shared by many sprites) plus the rectangle to blit
/// from. The rectangle is not validated here: one that reaches outside the
/// image makes [`Screen::draw_sprite`](crate::Screen::draw_sprite) a
/// silent no-op.
#[derive(Clone)]
pub struct Sprite {
    image: Arc<Image>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Sprite {
    pub fn new(image: Arc<Image>, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            image,
            x,
            y,
            width,
            height,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
