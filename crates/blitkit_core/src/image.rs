use blitkit_common::Color;

/// An owned rectangle of RGBA pixels, the source side of a sprite blit.
///
/// The original art this replaces came from asynchronously loaded image
/// elements; here an `Image` is always fully materialized, either blank or
/// from raw bytes the caller decoded.
#[derive(Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// A fully transparent image of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw RGBA bytes. `pixels` must hold exactly
    /// `width * height * 4` bytes.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Write one pixel. Writes outside the image are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[index..index + 4].copy_from_slice(&color.to_bytes());
    }

    /// Read one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.pixels[index..index + 4]);
        Some(Color::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_transparent() {
        let image = Image::new(4, 3);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.pixels().len(), 4 * 3 * 4);
        assert_eq!(image.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(image.pixel(3, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn set_pixel_round_trips() {
        let mut image = Image::new(4, 4);
        image.set_pixel(2, 1, Color::MAGENTA);
        assert_eq!(image.pixel(2, 1), Some(Color::MAGENTA));
        assert_eq!(image.pixel(1, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn out_of_bounds_access_is_harmless() {
        let mut image = Image::new(2, 2);
        image.set_pixel(2, 0, Color::RED);
        image.set_pixel(0, 2, Color::RED);
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
        assert!(image.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn from_pixels_keeps_bytes() {
        let bytes = vec![7u8; 2 * 2 * 4];
        let image = Image::from_pixels(2, 2, bytes);
        assert_eq!(image.pixel(1, 1), Some(Color::new_rgba(7, 7, 7, 7)));
    }
}
