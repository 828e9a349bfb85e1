//! Sprite decoding and kitty graphics sequences

use base64::{engine::general_purpose, Engine as _};
use image::GenericImageView;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kitty transmission format for PNG payloads
const KITTY_FORMAT_PNG: u32 = 100;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// A decoded sprite: the PNG bytes base64-encoded plus pixel dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteImage {
    pub payload: String,
    pub width: u32,
    pub height: u32,
}

/// Decode image bytes into a sprite ready for terminal transmission.
/// The bytes are kept as-is (PokeAPI sprites are PNG); decoding only
/// validates them and reads the dimensions.
pub fn decode_sprite(bytes: &[u8]) -> Result<SpriteImage, String> {
    let image = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let (width, height) = image.dimensions();
    Ok(SpriteImage {
        payload: general_purpose::STANDARD.encode(bytes),
        width,
        height,
    })
}

/// Largest cell box for the sprite inside `max_cols` x `max_rows` that
/// preserves the image aspect ratio.
pub fn fit(sprite: &SpriteImage, max_cols: u16, max_rows: u16) -> (u16, u16) {
    if max_cols == 0 || max_rows == 0 || sprite.height == 0 {
        return (max_cols, max_rows);
    }
    let image_ratio = sprite.width as f32 / sprite.height as f32;
    let cols_for_max_rows = image_ratio * max_rows as f32 * CELL_ASPECT;
    if cols_for_max_rows <= max_cols as f32 {
        let cols = cols_for_max_rows.max(1.0).round() as u16;
        return (cols.max(1), max_rows.max(1));
    }
    let rows_for_max_cols = max_cols as f32 / (image_ratio * CELL_ASPECT);
    let rows = rows_for_max_cols.max(1.0).round() as u16;
    (max_cols.max(1), rows.min(max_rows).max(1))
}

/// Build the kitty graphics escape sequence that transmits and places the
/// sprite in a `cols` x `rows` cell box. The payload is chunked; the
/// backend deletes all transmitted images before each placement, so no
/// image id is needed.
pub fn kitty_sequence(sprite: &SpriteImage, cols: u16, rows: u16) -> Result<String, String> {
    let mut sequences = String::new();
    let chunk_size = 4096;
    let payload = sprite.payload.as_bytes();
    let total_chunks = (payload.len() + chunk_size - 1) / chunk_size;

    for (index, chunk) in payload.chunks(chunk_size).enumerate() {
        let more = index + 1 < total_chunks;
        let chunk_str = std::str::from_utf8(chunk).map_err(|err| err.to_string())?;
        if index == 0 {
            let mut params = format!(
                "f={},s={},v={},a=T,t=d",
                KITTY_FORMAT_PNG, sprite.width, sprite.height
            );
            if cols > 0 {
                params.push_str(&format!(",c={cols}"));
            }
            if rows > 0 {
                params.push_str(&format!(",r={rows}"));
            }
            params.push_str(&format!(",m={}", if more { 1 } else { 0 }));
            sequences.push_str(&format!("\x1b_G{params};{chunk_str}\x1b\\"));
        } else {
            sequences.push_str(&format!(
                "\x1b_Gm={};{chunk_str}\x1b\\",
                if more { 1 } else { 0 }
            ));
        }
    }
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
        let mut buf = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_sprite_reads_dimensions() {
        let bytes = png_bytes(3, 5);
        let sprite = decode_sprite(&bytes).unwrap();
        assert_eq!(sprite.width, 3);
        assert_eq!(sprite.height, 5);
        assert_eq!(
            sprite.payload,
            general_purpose::STANDARD.encode(&bytes)
        );
    }

    #[test]
    fn test_decode_sprite_rejects_garbage() {
        assert!(decode_sprite(b"not an image").is_err());
    }

    #[test]
    fn test_fit_square_box_is_col_bound() {
        let sprite = decode_sprite(&png_bytes(96, 96)).unwrap();
        // A square image in a square cell box is limited by the cell
        // aspect: rows = cols / 2
        assert_eq!(fit(&sprite, 20, 20), (20, 10));
    }

    #[test]
    fn test_fit_wide_box_is_row_bound() {
        let sprite = decode_sprite(&png_bytes(96, 96)).unwrap();
        assert_eq!(fit(&sprite, 80, 10), (20, 10));
    }

    #[test]
    fn test_fit_degenerate_box() {
        let sprite = decode_sprite(&png_bytes(4, 4)).unwrap();
        assert_eq!(fit(&sprite, 0, 10), (0, 10));
        assert_eq!(fit(&sprite, 10, 0), (10, 0));
    }

    #[test]
    fn test_kitty_sequence_single_chunk() {
        let sprite = decode_sprite(&png_bytes(2, 2)).unwrap();
        let sequence = kitty_sequence(&sprite, 6, 3).unwrap();
        assert!(sequence.starts_with("\x1b_Gf=100,s=2,v=2,a=T,t=d,c=6,r=3,m=0;"));
        assert!(sequence.ends_with("\x1b\\"));
    }

    #[test]
    fn test_kitty_sequence_chunks_large_payloads() {
        let sprite = SpriteImage {
            payload: "A".repeat(10_000),
            width: 64,
            height: 64,
        };
        let sequence = kitty_sequence(&sprite, 0, 0).unwrap();
        // 10000 bytes -> three chunks: m=1, m=1, m=0
        assert_eq!(sequence.matches("\x1b_G").count(), 3);
        assert!(sequence.contains(",m=1;"));
        assert!(sequence.contains("\x1b_Gm=0;"));
    }
}
