use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::color::Rgb;
use crate::errors::IdenticonError;
use crate::pixels::{Rect, CANVAS_SIZE};

const BACKGROUND: Rgb = Rgb { red: 255, green: 255, blue: 255 };

fn to_pixel(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([color.red, color.green, color.blue])
}

fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, IdenticonError> {
    let mut image_data = Vec::new();
    let encoder = PngEncoder::new(&mut image_data);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(image_data)
}

/// Paints the rectangles solid with the given color on a white canvas and
/// returns the encoded PNG. Rectangles must lie within the canvas.
pub fn render_png(
    color: Rgb,
    rectangles: &[Rect],
) -> Result<Vec<u8>, IdenticonError> {
    let mut canvas = RgbImage::from_pixel(
        CANVAS_SIZE,
        CANVAS_SIZE,
        to_pixel(BACKGROUND),
    );
    let pixel = to_pixel(color);
    for rect in rectangles {
        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                canvas.put_pixel(x, y, pixel);
            };
        };
    };
    encode_png(&canvas)
}

/// Encodes a square canvas of the given size left entirely at the
/// background color
pub fn render_blank_png(size: u32) -> Result<Vec<u8>, IdenticonError> {
    let canvas = RgbImage::from_pixel(size, size, to_pixel(BACKGROUND));
    encode_png(&canvas)
}
