#![allow(dead_code)]

use lib_imretro::color::{BLACK, DARKER_GRAY, LIGHTER_GRAY, WHITE};
use lib_imretro::{Color, ImageSource};

pub const SIGNATURE: &[u8] = b"IMRETRO";

/// Builds an imretro stream by hand. Dimensions are big-endian.
pub fn make_stream(
    mode: u8,
    palette: &[[u8; 4]],
    width: u16,
    height: u16,
    pixels: &[u8],
) -> Vec<u8> {
    let mut stream = SIGNATURE.to_vec();
    stream.push(mode);
    stream.extend_from_slice(&width.to_be_bytes());
    stream.extend_from_slice(&height.to_be_bytes());
    for color in palette {
        stream.extend_from_slice(color);
    }
    stream.extend_from_slice(pixels);
    stream
}

/// A fully opaque RGBA test image stored row by row.
pub struct TestImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl TestImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
        }
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

impl ImageSource for TestImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Four black then four white pixels, an alternating run, then a darker and
/// a lighter gray in the bottom right corner.
pub fn one_bit_fixture(width: u32, height: u32) -> TestImage {
    let mut image = TestImage::new(width, height);
    for i in 0..8 {
        let color = if i >= 4 { WHITE } else { BLACK };
        image.set(i, i / width, color);
    }
    for i in 8..16 {
        let color = if i % 2 == 0 && i < 12 { WHITE } else { BLACK };
        image.set(i % width, i / width, color);
    }
    image.set(width - 2, height - 1, DARKER_GRAY);
    image.set(width - 1, height - 1, LIGHTER_GRAY);
    image
}

/// A 16x16 image sweeping through red, green, blue and alpha levels.
pub fn gradient() -> TestImage {
    let mut image = TestImage::new(16, 16);
    for y in 0..16 {
        for x in 0..16 {
            let level = (y * 16 + x) as u8;
            let color = Color::rgba(
                level,
                level.rotate_left(2),
                level.rotate_left(4),
                level.rotate_left(6),
            );
            image.set(x, y, color);
        }
    }
    image
}
