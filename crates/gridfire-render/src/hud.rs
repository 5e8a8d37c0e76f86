//! HUD drawing: score digits from a built-in 3x5 glyph table and
//! lives pips. No font assets involved.

use gridfire_core::types::Color;

use crate::frame::Frame;

/// 3x5 digit glyphs, one row bitmask per line, bit 2 leftmost.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const GLYPH_W: i32 = 3;
const GLYPH_GAP: i32 = 1;
const PIP_SIZE: u32 = 4;
const PIP_GAP: i32 = 2;

fn draw_digit(frame: &mut Frame, x: i32, y: i32, scale: u32, digit: u8, color: Color) {
    let glyph = DIGITS[digit as usize % 10];
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_W {
            if bits >> (GLYPH_W - 1 - col) & 1 == 1 {
                frame.fill_rect(
                    x + col * scale as i32,
                    y + row as i32 * scale as i32,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draw a number left-to-right with its leftmost digit at (x, y).
pub fn draw_number(frame: &mut Frame, x: i32, y: i32, scale: u32, value: u32, color: Color) {
    // Collect digits most-significant first.
    let mut digits = [0u8; 10];
    let mut count = 0;
    let mut rest = value;
    loop {
        digits[count] = (rest % 10) as u8;
        count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    let advance = (GLYPH_W + GLYPH_GAP) * scale as i32;
    for (slot, &digit) in digits[..count].iter().rev().enumerate() {
        draw_digit(frame, x + slot as i32 * advance, y, scale, digit, color);
    }
}

/// Draw one filled square per remaining life, growing rightward.
pub fn draw_life_pips(frame: &mut Frame, x: i32, y: i32, lives: u32, color: Color) {
    for pip in 0..lives.min(16) as i32 {
        frame.fill_rect(
            x + pip * (PIP_SIZE as i32 + PIP_GAP),
            y,
            PIP_SIZE,
            PIP_SIZE,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_paint_inside_their_cells() {
        let mut frame = Frame::new(64, 16);
        frame.clear([0, 0, 0]);
        draw_number(&mut frame, 1, 1, 1, 8, [0xff, 0xff, 0xff]);
        // '8' has all four corners set.
        assert_eq!(frame.pixel(1, 1), [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(frame.pixel(3, 5), [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_max_score_renders_without_panicking() {
        let mut frame = Frame::new(64, 16);
        frame.clear([0, 0, 0]);
        draw_number(&mut frame, 2, 2, 1, u32::MAX, [0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_life_pips_count() {
        let mut frame = Frame::new(64, 16);
        frame.clear([0, 0, 0]);
        draw_life_pips(&mut frame, 0, 0, 3, [0xff, 0, 0]);
        assert_eq!(frame.pixel(0, 0), [0xff, 0, 0, 0xff]);
        assert_eq!(frame.pixel(6, 0), [0xff, 0, 0, 0xff]);
        assert_eq!(frame.pixel(12, 0), [0xff, 0, 0, 0xff]);
        assert_eq!(frame.pixel(18, 0), [0, 0, 0, 0xff]);
    }
}
