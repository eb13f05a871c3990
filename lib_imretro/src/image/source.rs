use super::encoder::EncodeError;
use crate::color::{Color, NO_COLOR};

/// Anything the encoder can read pixels from.
pub trait ImageSource {
    /// Get the dimensions of the image (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Get the color at the specified coordinates.
    /// Only called for coordinates inside `dimensions`.
    fn color_at(&self, x: u32, y: u32) -> Color;
}

/// A borrowed, tightly packed RGBA8 buffer.
#[derive(Debug, Clone, Copy)]
pub struct RgbaImageRef<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbaImageRef<'a> {
    /// Fails unless `data` holds exactly `width * height` RGBA pixels.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, EncodeError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(EncodeError::InvalidPixelDataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

impl ImageSource for RgbaImageRef<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(offset..offset + 4)
            .and_then(Color::from_bytes)
            .unwrap_or(NO_COLOR)
    }
}

#[cfg(feature = "image")]
impl ImageSource for ::image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        ::image::RgbaImage::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from(self.get_pixel(x, y).0)
    }
}

#[cfg(feature = "image")]
impl ImageSource for ::image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        ::image::GenericImageView::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from(::image::GenericImageView::get_pixel(self, x, y).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_ref() {
        let data = [
            255, 0, 0, 255, // Red
            0, 255, 0, 255, // Green
        ];
        let image = RgbaImageRef::new(2, 1, &data).unwrap();

        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.color_at(0, 0), Color::rgba(255, 0, 0, 255));
        assert_eq!(image.color_at(1, 0), Color::rgba(0, 255, 0, 255));
    }

    #[test]
    fn test_rgba_ref_invalid_length() {
        let result = RgbaImageRef::new(2, 2, &[255, 0, 0]);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelDataLength {
                expected: 16,
                actual: 3
            })
        ));
    }
}
