//! RGBA frame buffer with clipped primitive fills.

use gridfire_core::types::Color;

/// Row-major RGBA8 pixel buffer.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes, row-major, four bytes per pixel.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Fill the whole frame with one opaque color.
    pub fn clear(&mut self, color: Color) {
        for pixel in self.rgba.chunks_exact_mut(4) {
            pixel[0] = color[0];
            pixel[1] = color[1];
            pixel[2] = color[2];
            pixel[3] = 0xff;
        }
    }

    /// Fill an axis-aligned rect, clipped to the frame. Coordinates
    /// may be negative or extend past the edges.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = x.saturating_add(w as i32).clamp(0, self.width as i32) as u32;
        let y1 = y.saturating_add(h as i32).clamp(0, self.height as i32) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color);
            }
        }
    }

    /// Copy an RGBA sprite with its top-left at (x, y), clipped.
    /// Pixels with zero alpha are skipped.
    pub fn blit(&mut self, x: i32, y: i32, w: u32, h: u32, rgba: &[u8]) {
        for sy in 0..h {
            let py = y + sy as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for sx in 0..w {
                let px = x + sx as i32;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                let src = ((sy * w + sx) * 4) as usize;
                if rgba[src + 3] == 0 {
                    continue;
                }
                self.put(px as u32, py as u32, [rgba[src], rgba[src + 1], rgba[src + 2]]);
            }
        }
    }

    /// Read back one pixel as RGBA.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let at = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[at],
            self.rgba[at + 1],
            self.rgba[at + 2],
            self.rgba[at + 3],
        ]
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        let at = ((y * self.width + x) * 4) as usize;
        self.rgba[at] = color[0];
        self.rgba[at + 1] = color[1];
        self.rgba[at + 2] = color[2];
        self.rgba[at + 3] = 0xff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut frame = Frame::new(4, 3);
        frame.clear([10, 20, 30]);
        assert_eq!(frame.pixel(0, 0), [10, 20, 30, 0xff]);
        assert_eq!(frame.pixel(3, 2), [10, 20, 30, 0xff]);
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut frame = Frame::new(8, 8);
        frame.clear([0, 0, 0]);
        frame.fill_rect(-4, -4, 8, 8, [0xff, 0, 0]);
        assert_eq!(frame.pixel(0, 0), [0xff, 0, 0, 0xff]);
        assert_eq!(frame.pixel(3, 3), [0xff, 0, 0, 0xff]);
        assert_eq!(frame.pixel(4, 4), [0, 0, 0, 0xff]);

        // Entirely outside: no write, no panic.
        frame.fill_rect(100, 100, 50, 50, [0, 0xff, 0]);
        frame.fill_rect(-100, -100, 5, 5, [0, 0xff, 0]);
    }

    #[test]
    fn test_blit_skips_transparent_pixels() {
        let mut frame = Frame::new(4, 4);
        frame.clear([9, 9, 9]);
        // 2x1 sprite: opaque red then transparent.
        let sprite = [0xff, 0, 0, 0xff, 0, 0xff, 0, 0];
        frame.blit(1, 1, 2, 1, &sprite);
        assert_eq!(frame.pixel(1, 1), [0xff, 0, 0, 0xff]);
        assert_eq!(frame.pixel(2, 1), [9, 9, 9, 0xff]);
    }
}
