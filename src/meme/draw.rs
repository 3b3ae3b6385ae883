//! Canvas and text drawing helpers.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

const OUTLINE_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

/// Height of one line of text at `size`, ascent to descent plus gap.
pub fn line_height(font: &Font<'_>, size: f32) -> i32 {
    let v = font.v_metrics(Scale::uniform(size));
    (v.ascent - v.descent + v.line_gap).ceil() as i32
}

pub fn text_width(font: &Font<'_>, size: f32, text: &str) -> i32 {
    text_size(Scale::uniform(size), font, text).0
}

fn centered_x(canvas_width: u32, font: &Font<'_>, size: f32, text: &str) -> i32 {
    (canvas_width as i32 - text_width(font, size, text)) / 2
}

/// Draw `lines` as a block centered on the canvas.
pub fn draw_centered_lines(
    canvas: &mut RgbImage,
    font: &Font<'_>,
    size: f32,
    lines: &[&str],
    color: Rgb<u8>,
) {
    let scale = Scale::uniform(size);
    let step = line_height(font, size);
    let block = step * lines.len() as i32;
    let mut y = (canvas.height() as i32 - block) / 2;
    for line in lines {
        let x = centered_x(canvas.width(), font, size, line);
        draw_text_mut(canvas, color, x, y, scale, font, line);
        y += step;
    }
}

/// White text with a 1px black outline, horizontally centered, top edge at `y`.
pub fn draw_outlined_text(canvas: &mut RgbImage, font: &Font<'_>, size: f32, text: &str, y: i32) {
    if text.is_empty() {
        return;
    }
    let scale = Scale::uniform(size);
    let x = centered_x(canvas.width(), font, size, text);
    for (dx, dy) in OUTLINE_OFFSETS {
        draw_text_mut(canvas, BLACK, x + dx, y + dy, scale, font, text);
    }
    draw_text_mut(canvas, WHITE, x, y, scale, font, text);
}
