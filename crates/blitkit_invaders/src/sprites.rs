use std::sync::Arc;

use lazy_static::lazy_static;

use blitkit_common::Color;
use blitkit_core::{Image, Sprite};

/// Side length of one glyph cell in the sheet.
pub const GLYPH: u32 = 8;

/// Invader, legs tucked in.
const INVADER_A: [u8; 8] = [
    0b0001_1000,
    0b0011_1100,
    0b0111_1110,
    0b1101_1011,
    0b1111_1111,
    0b0010_0100,
    0b0101_1010,
    0b1010_0101,
];

/// Invader, legs spread out.
const INVADER_B: [u8; 8] = [
    0b0001_1000,
    0b0011_1100,
    0b0111_1110,
    0b1101_1011,
    0b1111_1111,
    0b0010_0100,
    0b0100_0010,
    0b0010_0100,
];

/// Player cannon.
const SHIP: [u8; 8] = [
    0b0001_0000,
    0b0011_1000,
    0b0011_1000,
    0b1111_1110,
    0b1111_1110,
    0b1111_1110,
    0b1111_1110,
    0b1111_1110,
];

/// Player shot, a 2x6 bar inside its cell.
const SHOT: [u8; 8] = [
    0b0000_0000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0000_0000,
];

/// Invader bomb, a 3x6 zigzag inside its cell.
const BOMB: [u8; 8] = [
    0b0001_0000,
    0b0010_0000,
    0b0001_0000,
    0b0000_1000,
    0b0001_0000,
    0b0010_0000,
    0b0000_0000,
    0b0000_0000,
];

lazy_static! {
    static ref SHEET: Arc<Image> = Arc::new(build_sheet());
}

/// Render the bit-row glyphs into one horizontal strip, one 8x8 cell per
/// glyph. Unset bits stay transparent so blitting skips them.
fn build_sheet() -> Image {
    let glyphs: [(&[u8; 8], Color); 5] = [
        (&INVADER_A, Color::GREEN),
        (&INVADER_B, Color::GREEN),
        (&SHIP, Color::WHITE),
        (&SHOT, Color::YELLOW),
        (&BOMB, Color::RED),
    ];

    let mut image = Image::new(GLYPH * glyphs.len() as u32, GLYPH);
    for (cell, (rows, color)) in glyphs.iter().enumerate() {
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH {
                if (bits >> (7 - col)) & 1 != 0 {
                    image.set_pixel(cell as u32 * GLYPH + col, row as u32, *color);
                }
            }
        }
    }
    image
}

pub fn invader_a() -> Sprite {
    Sprite::new(SHEET.clone(), 0, 0, GLYPH, GLYPH)
}

pub fn invader_b() -> Sprite {
    Sprite::new(SHEET.clone(), GLYPH, 0, GLYPH, GLYPH)
}

pub fn ship() -> Sprite {
    Sprite::new(SHEET.clone(), 2 * GLYPH, 0, GLYPH, GLYPH)
}

/// Tight 2x6 rectangle around the lit bar of the shot glyph.
pub fn shot() -> Sprite {
    Sprite::new(SHEET.clone(), 3 * GLYPH + 3, 1, 2, 6)
}

/// Tight 3x6 rectangle around the lit zigzag of the bomb glyph.
pub fn bomb() -> Sprite {
    Sprite::new(SHEET.clone(), 4 * GLYPH + 2, 0, 3, 6)
}
