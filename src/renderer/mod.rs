//! Rendering module
//!
//! The simulation only describes a frame as an ordered stream of draw
//! requests; `Framebuffer` is a software backend that rasterises rectangles
//! and forwards text to a pluggable glyph sink.

pub mod draw;
pub mod framebuffer;
pub mod text;

pub use draw::{DrawRequest, render};
pub use framebuffer::{Framebuffer, GlyphSink};
pub use text::zero_padded;
