use crate::color::pick_color;
use crate::errors::IdenticonError;
use crate::grid::build_grid;
use crate::hashes::md5;
use crate::pixels::build_pixel_map;
use crate::render::{render_blank_png, render_png};

/// Derives a PNG identicon from a word.
///
/// The derivation is deterministic: identical words produce byte-identical
/// images.
pub fn generate_identicon(word: &str) -> Result<Vec<u8>, IdenticonError> {
    let digest = md5(word.as_bytes());
    let color = pick_color(&digest)?;
    let grid = build_grid(&digest);
    let pixel_map = build_pixel_map(&grid)?;
    let image_data = render_png(color, &pixel_map)?;
    Ok(image_data)
}

/// Produces a single-pixel placeholder image for contexts without an
/// input word
pub fn generate_pixel() -> Result<Vec<u8>, IdenticonError> {
    render_blank_png(1)
}
