//! Placeholder tile for zoom levels outside the pyramid.
//!
//! The placeholder is a transparent PNG with a thin frame and the tile's
//! cache name written across the middle, so the host shows a clearly
//! labelled empty square instead of nothing.

use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::tile::{TileError, TileImage, TileKey, TILE_PIXEL_DIM};

/// Drawing parameters for placeholder tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderStyle {
    /// Side length of the tile in pixels
    pub tile_size: u32,
    /// Frame and glyph stroke width in pixels
    pub stroke_width: f32,
    /// Glyph height in pixels
    pub text_height: f32,
    /// Frame colour (RGBA)
    pub frame_color: [u8; 4],
    /// Label colour (RGBA)
    pub text_color: [u8; 4],
}

impl PlaceholderStyle {
    /// 256 px tile for normal-density displays.
    pub const fn standard() -> Self {
        Self {
            tile_size: TILE_PIXEL_DIM,
            stroke_width: 3.0,
            text_height: 12.0,
            frame_color: [0, 0, 0, 255],
            text_color: [0, 0, 0, 255],
        }
    }

    /// 512 px tile for high-density displays.
    pub const fn high_density() -> Self {
        Self {
            tile_size: 2 * TILE_PIXEL_DIM,
            text_height: 24.0,
            ..Self::standard()
        }
    }

    /// Style matching the display density.
    pub const fn for_density(high_density: bool) -> Self {
        if high_density {
            Self::high_density()
        } else {
            Self::standard()
        }
    }
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// Render the placeholder tile for `key`.
///
/// # Errors
///
/// Returns `TileError::Encode` if the style describes an empty tile or PNG
/// encoding fails.
pub fn placeholder(key: &TileKey, style: &PlaceholderStyle) -> Result<TileImage, TileError> {
    let size = style.tile_size;
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| TileError::Encode(format!("invalid placeholder size {}", size)))?;

    let inset = style.stroke_width / 2.0;
    let side = size as f32 - style.stroke_width;
    if let Some(rect) = Rect::from_xywh(inset, inset, side, side) {
        let frame = PathBuilder::from_rect(rect);
        pixmap.stroke_path(
            &frame,
            &paint(style.frame_color, false),
            &Stroke {
                width: style.stroke_width,
                ..Default::default()
            },
            Transform::identity(),
            None,
        );
    }

    draw_label(&mut pixmap, &key.to_string(), style);

    let data = pixmap
        .encode_png()
        .map_err(|e| TileError::Encode(format!("placeholder PNG: {}", e)))?;
    Ok(TileImage::square(data, size))
}

fn paint(rgba: [u8; 4], anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = anti_alias;
    paint
}

/// Segments lit for each supported character.
///
/// ```text
///  aaa
/// f   b
///  ggg
/// e   c
///  ddd
/// ```
fn segments(ch: char) -> &'static str {
    match ch {
        '0' => "abcdef",
        '1' => "bc",
        '2' | 'z' => "abdeg",
        '3' => "abcdg",
        '4' => "bcfg",
        '5' => "acdfg",
        '6' => "acdefg",
        '7' => "abc",
        '8' => "abcdefg",
        '9' => "abcdfg",
        '-' => "g",
        'r' => "eg",
        'c' => "deg",
        'o' => "cdeg",
        't' => "defg",
        'h' => "cefg",
        '_' => "d",
        _ => "",
    }
}

/// Draw `text` centred on the tile as stroked seven-segment glyphs.
fn draw_label(pixmap: &mut Pixmap, text: &str, style: &PlaceholderStyle) {
    let count = text.chars().count();
    if count == 0 {
        return;
    }

    let size = style.tile_size as f32;
    let mut height = style.text_height;
    let mut advance = height * 0.8;
    // Shrink long labels to fit inside the frame
    let max_width = size * 0.9;
    if advance * count as f32 > max_width {
        let scale = max_width / (advance * count as f32);
        height *= scale;
        advance *= scale;
    }
    let width = height / 2.0;

    let mut x = (size - advance * count as f32) / 2.0 + (advance - width) / 2.0;
    let top = (size - height) / 2.0;
    let mid = top + height / 2.0;
    let bottom = top + height;

    let mut builder = PathBuilder::new();
    for ch in text.chars() {
        let (left, right) = (x, x + width);
        for segment in segments(ch).chars() {
            let ((x0, y0), (x1, y1)) = match segment {
                'a' => ((left, top), (right, top)),
                'b' => ((right, top), (right, mid)),
                'c' => ((right, mid), (right, bottom)),
                'd' => ((left, bottom), (right, bottom)),
                'e' => ((left, mid), (left, bottom)),
                'f' => ((left, top), (left, mid)),
                _ => ((left, mid), (right, mid)),
            };
            builder.move_to(x0, y0);
            builder.line_to(x1, y1);
        }
        x += advance;
    }

    if let Some(path) = builder.finish() {
        pixmap.stroke_path(
            &path,
            &paint(style.text_color, true),
            &Stroke {
                width: (height / 8.0).max(1.0),
                line_cap: LineCap::Round,
                ..Default::default()
            },
            Transform::identity(),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::decode;
    use crate::tile::LayerKind;

    fn key() -> TileKey {
        TileKey::new(LayerKind::Standard, 1, 2, 18)
    }

    #[test]
    fn test_standard_placeholder_is_png_256() {
        let tile = placeholder(&key(), &PlaceholderStyle::standard()).unwrap();
        assert_eq!((tile.width, tile.height), (256, 256));
        assert_eq!(&tile.data[1..4], b"PNG");
        assert_eq!(decode(&tile.data).unwrap().dimensions(), (256, 256));
    }

    #[test]
    fn test_high_density_placeholder_is_512() {
        let tile = placeholder(&key(), &PlaceholderStyle::for_density(true)).unwrap();
        assert_eq!((tile.width, tile.height), (512, 512));
        assert_eq!(decode(&tile.data).unwrap().dimensions(), (512, 512));
    }

    #[test]
    fn test_frame_and_label_drawn_on_transparent_tile() {
        let tile = placeholder(&key(), &PlaceholderStyle::standard()).unwrap();
        let image = decode(&tile.data).unwrap();

        // Frame along the edges
        assert_eq!(image.get_pixel(0, 128).0[3], 255);
        assert_eq!(image.get_pixel(128, 255).0[3], 255);
        // Transparent between the frame and the label
        assert_eq!(image.get_pixel(128, 40).0[3], 0);
        // Some label ink on the centre row band
        let inked = (0..256)
            .flat_map(|x| (118..138).map(move |y| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y).0[3] > 0)
            .count();
        assert!(inked > 20, "label not drawn ({} pixels)", inked);
    }

    #[test]
    fn test_long_label_fits_inside_frame() {
        let key = TileKey::new(LayerKind::Aerial, 4_000_000, 4_000_000, 20);
        let style = PlaceholderStyle::standard();
        let tile = placeholder(&key, &style).unwrap();
        let image = decode(&tile.data).unwrap();

        // Left interior margin stays clear of glyphs
        for y in 10..246 {
            assert_eq!(image.get_pixel(8, y).0[3], 0, "ink at (8, {})", y);
        }
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let style = PlaceholderStyle {
            tile_size: 0,
            ..PlaceholderStyle::standard()
        };
        assert!(matches!(
            placeholder(&key(), &style),
            Err(TileError::Encode(_))
        ));
    }

    #[test]
    fn test_every_label_character_has_segments() {
        for ch in "ortho-z0123456789_hr-rc".chars() {
            assert!(!segments(ch).is_empty(), "no glyph for {:?}", ch);
        }
    }
}
