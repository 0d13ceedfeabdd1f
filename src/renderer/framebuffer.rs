//! Software framebuffer for draw requests
//!
//! Pixels are 0x00RRGGBB, stored bottom row first to match the y-up
//! playfield, so a rectangle at y=0 lands in the first row of memory.

use std::io::{self, Write};

use super::draw::DrawRequest;
use crate::sim::Rect;

/// Text rasteriser the framebuffer hands `DrawRequest::Text` to
pub trait GlyphSink {
    fn draw_text(&mut self, target: &mut Framebuffer, text: &str, x: i32, y: i32, color: u32);
}

/// Discards text
impl GlyphSink for () {
    fn draw_text(&mut self, _target: &mut Framebuffer, _text: &str, _x: i32, _y: i32, _color: u32) {}
}

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x, y), y-up; None outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Set a single pixel, ignoring coordinates outside the buffer
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Solid fill; the float position truncates to whole pixels
    pub fn fill_rect(&mut self, rect: &Rect, color: u32) {
        if self.width == 0 {
            return;
        }
        let x0 = rect.pos.x as i64;
        let y0 = rect.pos.y as i64;
        let x_start = x0.clamp(0, self.width as i64) as usize;
        let x_end = (x0 + rect.width as i64).clamp(x_start as i64, self.width as i64) as usize;
        let y_start = y0.clamp(0, self.height as i64) as usize;
        let y_end = (y0 + rect.height as i64).clamp(y_start as i64, self.height as i64) as usize;

        for row in self.pixels.chunks_exact_mut(self.width).take(y_end).skip(y_start) {
            row[x_start..x_end].fill(color);
        }
    }

    pub fn draw(&mut self, request: &DrawRequest, glyphs: &mut dyn GlyphSink) {
        match request {
            DrawRequest::Rect { rect, color } => self.fill_rect(rect, *color),
            DrawRequest::Text { text, x, y, color } => glyphs.draw_text(self, text, *x, *y, *color),
        }
    }

    /// Draw a whole request stream in order
    pub fn draw_all<I>(&mut self, requests: I, glyphs: &mut dyn GlyphSink)
    where
        I: IntoIterator<Item = DrawRequest>,
    {
        for request in requests {
            self.draw(&request, glyphs);
        }
    }

    /// Raw pixel memory for handing to a blit backend
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the frame as a binary PPM, top row first
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut line = Vec::with_capacity(self.width * 3);
        for row in self.pixels.chunks_exact(self.width.max(1)).rev() {
            line.clear();
            for &px in row {
                line.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8]);
            }
            out.write_all(&line)?;
        }
        out.flush()
    }
}
