use blitkit_common::Color;

use crate::sprite::Sprite;

/// An owned RGBA surface with clear and sprite-blit operations.
///
/// The surface is plain memory; a frontend presents [`pixels`](Self::pixels)
/// on whatever output it drives. Dimensions are fixed at construction. All
/// drawing clips at the surface edges and none of it can fail.
pub struct Screen {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole surface as RGBA bytes, row-major from the top-left.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Raw access for callers that draw without sprites.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Erase the surface to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Paint every pixel one color.
    pub fn fill(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Write one pixel. Writes outside the surface are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[index..index + 4].copy_from_slice(&color.to_bytes());
    }

    /// Read one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.pixels[index..index + 4]);
        Some(Color::from_bytes(bytes))
    }

    /// Blit `sprite`'s source rectangle with its top-left corner at
    /// `(x, y)`, without scaling.
    ///
    /// The destination may be partly or wholly off the surface; whatever
    /// sticks out is clipped. Fully transparent source pixels are skipped,
    /// everything else is copied verbatim. A sprite rectangle that is not
    /// contained in its source image draws nothing at all.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let image = sprite.image();
        if sprite.x().saturating_add(sprite.width()) > image.width()
            || sprite.y().saturating_add(sprite.height()) > image.height()
        {
            return;
        }

        let src = image.pixels();
        let src_width = image.width() as usize;
        for row in 0..sprite.height() {
            let dest_y = y as i64 + row as i64;
            if dest_y < 0 || dest_y >= self.height as i64 {
                continue;
            }
            for col in 0..sprite.width() {
                let dest_x = x as i64 + col as i64;
                if dest_x < 0 || dest_x >= self.width as i64 {
                    continue;
                }
                let src_index =
                    ((sprite.y() + row) as usize * src_width + (sprite.x() + col) as usize) * 4;
                if src[src_index + 3] == 0 {
                    continue;
                }
                let dest_index =
                    (dest_y as usize * self.width as usize + dest_x as usize) * 4;
                self.pixels[dest_index..dest_index + 4]
                    .copy_from_slice(&src[src_index..src_index + 4]);
            }
        }
    }
}
