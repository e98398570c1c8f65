use ultraviolet::Vec2;

use crate::color::Color;
use crate::target::{BlitParams, RenderTarget};

/// Visual state shared by every drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    /// Multiplied component-wise with the per-call scale.
    pub scale: Vec2,
    /// Base tint.
    pub color: Color,
    /// Depth hint passed to the backend, `0.0..=1.0`.
    pub layer: f32,
    /// Pixel displacement added to every draw position.
    pub offset: Vec2,
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            scale: Vec2::one(),
            color: Color::WHITE,
            layer: 0.5,
            offset: Vec2::zero(),
        }
    }
}

impl Visual {
    /// Resolves per-call options against this state.
    ///
    /// Rotation and origin are left at zero; drawables that rotate set them.
    pub fn resolve(&self, options: DrawOption) -> BlitParams {
        let color = if options.blend == 0.0 {
            options.tint
        } else {
            self.color.lerp(options.tint, options.blend)
        };
        BlitParams {
            position: options.position + self.offset,
            color,
            rotation: 0.0,
            origin: Vec2::zero(),
            scale: options.scale * self.scale,
            layer: self.layer,
        }
    }
}

/// Per-call modifiers for [`Drawable::draw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOption {
    /// Base position in screen pixels.
    position: Vec2,
    /// Extra scale, multiplied with the drawable's own.
    scale: Vec2,
    tint: Color,
    /// Blend from the drawable's own color towards `tint`. Zero means `tint` is used as-is.
    blend: f32,
}

impl Default for DrawOption {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            scale: Vec2::one(),
            tint: Color::WHITE,
            blend: 0.0,
        }
    }
}

impl DrawOption {
    pub fn new(position: Vec2, scale: Vec2, tint: Color, blend: f32) -> Self {
        Self {
            position,
            scale,
            tint,
            blend,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }

    pub fn with_blend(mut self, blend: f32) -> Self {
        self.blend = blend;
        self
    }
}

/// Anything the owner can tick and draw.
///
/// The owner calls [`update`](Drawable::update) once per simulation tick and
/// [`draw`](Drawable::draw) once per render tick. Drawing never mutates the
/// drawable, so it can be repeated for several passes between updates.
pub trait Drawable {
    fn visual(&self) -> &Visual;

    fn visual_mut(&mut self) -> &mut Visual;

    /// Advances one tick. Returns true when a play-once animation is on its
    /// final frame; static drawables never finish.
    fn update(&mut self) -> bool {
        false
    }

    /// Issues exactly one blit or text call on `target`.
    fn draw(&self, target: &mut dyn RenderTarget, options: DrawOption) -> anyhow::Result<()>;

    /// Independent copy sharing the same asset handles.
    fn boxed_clone(&self) -> Box<dyn Drawable>;
}

impl Clone for Box<dyn Drawable> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}
