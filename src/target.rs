use ultraviolet::Vec2;

use crate::color::Color;
use crate::font::Font;
use crate::image::{Bounds, Image};

/// Per-call placement of a blit or text run, fully resolved by the drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlitParams {
    /// Destination in screen pixels.
    pub position: Vec2,
    pub color: Color,
    /// Rotation in radians about `origin`.
    pub rotation: f32,
    /// Rotation pivot, in source pixels relative to the top-left of the region.
    pub origin: Vec2,
    pub scale: Vec2,
    /// Depth hint in `0.0..=1.0`.
    pub layer: f32,
}

impl Default for BlitParams {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            color: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::zero(),
            scale: Vec2::one(),
            layer: 0.5,
        }
    }
}

/// Backend that performs the actual rasterization.
///
/// Implementations: [`crate::Context`] (records commands), or any GPU batcher.
pub trait RenderTarget {
    fn blit(&mut self, image: Image, src: Bounds, params: BlitParams) -> anyhow::Result<()>;

    fn draw_text(&mut self, font: &Font, text: &str, params: BlitParams) -> anyhow::Result<()>;
}
