use super::pixels;
use super::source::ImageSource;
use crate::color::model::{BitDepth, ColorModel};
use crate::color::{Color, NO_COLOR};

/// Everything the header and palette describe, without the pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub model: ColorModel,
}

/// A decoded image. Pixel colors are looked up lazily from the packed plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    config: Config,
    pixels: Vec<u8>,
}

impl Image {
    pub fn new(config: Config, pixels: Vec<u8>) -> Self {
        Self { config, pixels }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn model(&self) -> &ColorModel {
        &self.config.model
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.config.model.bit_depth()
    }

    /// The packed pixel plane as read from the stream.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width()) && y < i32::from(self.height())
    }

    /// The palette index stored at `(x, y)`, or `None` outside the image or
    /// past the end of a short pixel plane.
    pub fn index_at(&self, x: i32, y: i32) -> Option<u8> {
        if !self.contains(x, y) {
            return None;
        }
        pixels::index_at(
            x as usize,
            y as usize,
            usize::from(self.width()),
            self.bit_depth(),
            &self.pixels,
        )
    }

    /// The color at `(x, y)`. Never fails: anything that can't be resolved
    /// is `NO_COLOR`.
    pub fn at(&self, x: i32, y: i32) -> Color {
        self.index_at(x, y)
            .map_or(NO_COLOR, |index| self.model().color_at(index))
    }

    /// Expands the whole image to a tightly packed RGBA8 buffer.
    pub fn to_rgba(&self) -> Vec<u8> {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                rgba.extend_from_slice(&self.at(x, y).as_bytes());
            }
        }
        rgba
    }
}

impl ImageSource for Image {
    fn dimensions(&self) -> (u32, u32) {
        (u32::from(self.width()), u32::from(self.height()))
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => self.at(x, y),
            _ => NO_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    fn checkerboard() -> Image {
        let config = Config {
            width: 2,
            height: 2,
            model: ColorModel::default_for(BitDepth::One),
        };
        Image::new(config, vec![0b1001_0000])
    }

    #[test]
    fn test_at() {
        let image = checkerboard();
        assert_eq!(image.at(0, 0), WHITE);
        assert_eq!(image.at(1, 0), BLACK);
        assert_eq!(image.at(0, 1), BLACK);
        assert_eq!(image.at(1, 1), WHITE);
    }

    #[test]
    fn test_out_of_bounds() {
        let image = checkerboard();
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (-1, -1), (10, 10)] {
            assert_eq!(image.at(x, y), NO_COLOR);
            assert_eq!(image.index_at(x, y), None);
        }
    }

    #[test]
    fn test_missing_pixel_bytes() {
        let config = Config {
            width: 4,
            height: 4,
            model: ColorModel::default_for(BitDepth::Eight),
        };
        let image = Image::new(config, vec![0xFF; 3]);
        assert_eq!(image.at(2, 0), WHITE);
        assert_eq!(image.at(3, 0), NO_COLOR);
    }

    #[test]
    fn test_to_rgba() {
        let rgba = checkerboard().to_rgba();
        assert_eq!(
            rgba,
            vec![
                255, 255, 255, 255, 0, 0, 0, 255, // Row 0
                0, 0, 0, 255, 255, 255, 255, 255, // Row 1
            ]
        );
    }
}
