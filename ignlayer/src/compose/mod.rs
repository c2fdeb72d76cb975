//! Raster operations used to build synthesized tiles.
//!
//! All operations work on decoded RGBA images; only [`encode`] and
//! [`decode`] touch encoded bytes. Canvases start fully transparent.

mod placeholder;

pub use placeholder::{placeholder, PlaceholderStyle};

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::tile::TileError;

/// Quality used for every JPEG tile produced locally.
pub const JPEG_QUALITY: u8 = 100;

/// Encoded image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFormat {
    /// Lossy JPEG at [`JPEG_QUALITY`]; alpha is dropped
    Jpeg,
    /// Lossless PNG with alpha
    Png,
}

/// Create a transparent canvas.
pub fn new_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

/// Copy `image` onto `canvas` with its top-left corner at `(x, y)`.
///
/// Parts of `image` that fall outside the canvas are clipped.
pub fn paste_at(canvas: &mut RgbaImage, image: &RgbaImage, x: u32, y: u32) {
    imageops::replace(canvas, image, i64::from(x), i64::from(y));
}

/// Copy out the `width`×`height` rectangle at `(x, y)`.
///
/// The rectangle is clamped to the image bounds.
pub fn crop(image: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    imageops::crop_imm(image, x, y, width, height).to_image()
}

/// Scale `image` to `width`×`height` with nearest-neighbour sampling.
pub fn magnify(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, FilterType::Nearest)
}

/// Encode `image` in the given format.
///
/// # Errors
///
/// Returns `TileError::Encode` if the encoder rejects the image.
pub fn encode(image: &RgbaImage, format: TileFormat) -> Result<Vec<u8>, TileError> {
    let mut out = Vec::new();
    match format {
        TileFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
                .encode_image(&rgb)
                .map_err(|e| TileError::Encode(format!("JPEG: {}", e)))?;
        }
        TileFormat::Png => {
            image
                .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
                .map_err(|e| TileError::Encode(format!("PNG: {}", e)))?;
        }
    }
    Ok(out)
}

/// Decode JPEG or PNG bytes into an RGBA image.
///
/// # Errors
///
/// Returns `TileError::Decode` if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, TileError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(TileError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    fn close(a: Rgba<u8>, b: Rgba<u8>, tolerance: u8) -> bool {
        a.0.iter()
            .zip(b.0.iter())
            .take(3)
            .all(|(x, y)| x.abs_diff(*y) <= tolerance)
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = new_canvas(4, 3);
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_paste_at_quadrant() {
        let mut canvas = new_canvas(4, 4);
        paste_at(&mut canvas, &solid(2, 2, RED), 2, 2);

        assert_eq!(*canvas.get_pixel(3, 3), RED);
        assert_eq!(*canvas.get_pixel(2, 2), RED);
        assert_eq!(canvas.get_pixel(1, 1).0[3], 0);
        assert_eq!(canvas.get_pixel(3, 0).0[3], 0);
    }

    #[test]
    fn test_paste_clips_at_edges() {
        let mut canvas = new_canvas(4, 4);
        paste_at(&mut canvas, &solid(4, 4, BLUE), 3, 3);
        assert_eq!(*canvas.get_pixel(3, 3), BLUE);
        assert_eq!(canvas.get_pixel(2, 2).0[3], 0);
    }

    #[test]
    fn test_crop() {
        let mut image = new_canvas(4, 4);
        paste_at(&mut image, &solid(2, 2, RED), 2, 0);

        let top_right = crop(&image, 2, 0, 2, 2);
        assert_eq!(top_right.dimensions(), (2, 2));
        assert!(top_right.pixels().all(|p| *p == RED));

        let top_left = crop(&image, 0, 0, 2, 2);
        assert!(top_left.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_magnify_nearest_neighbour() {
        let mut image = new_canvas(2, 2);
        image.put_pixel(0, 0, RED);
        image.put_pixel(1, 1, BLUE);

        let big = magnify(&image, 4, 4);
        assert_eq!(big.dimensions(), (4, 4));
        // Each source pixel becomes a 2x2 block
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(*big.get_pixel(x, y), RED);
            assert_eq!(*big.get_pixel(x + 2, y + 2), BLUE);
        }
        assert_eq!(big.get_pixel(3, 0).0[3], 0);
    }

    #[test]
    fn test_jpeg_encode_decode() {
        let bytes = encode(&solid(16, 16, RED), TileFormat::Jpeg).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert!(close(*decoded.get_pixel(8, 8), RED, 8));
        // JPEG carries no alpha channel
        assert_eq!(decoded.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn test_png_keeps_pixels_exactly() {
        let mut image = new_canvas(8, 8);
        image.put_pixel(3, 5, BLUE);

        let bytes = encode(&image, TileFormat::Png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(decode(&bytes).unwrap(), image);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(&[0x00, 0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, TileError::Decode(_)));
    }
}
