use ultraviolet::Vec2;

use crate::drawable::{DrawOption, Drawable, Visual};
use crate::image::{Bounds, Image};
use crate::target::RenderTarget;

/// A one-pixel-wide image stretched and rotated along a direction.
///
/// The horizontal scale carries the line length, so `visual().scale.x` starts
/// at the direction's magnitude and `scale.y` at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLine {
    image: Image,
    src: Bounds,
    direction: Vec2,
    angle: f32,
    visual: Visual,
}

impl StaticLine {
    pub fn new(image: Image, src: Bounds, direction: Vec2) -> Self {
        let visual = Visual {
            scale: Vec2::new(direction.mag(), 1.0),
            ..Visual::default()
        };
        Self {
            image,
            src,
            direction,
            angle: direction.y.atan2(direction.x),
            visual,
        }
    }

    /// Line from `start` to `end`; `start` becomes the constant offset.
    pub fn between(image: Image, src: Bounds, start: Vec2, end: Vec2) -> Self {
        let mut line = Self::new(image, src, end - start);
        line.visual.offset = start;
        line
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn length(&self) -> f32 {
        self.direction.mag()
    }

    /// Rotation in radians, `atan2(dy, dx)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Drawable for StaticLine {
    fn visual(&self) -> &Visual {
        &self.visual
    }

    fn visual_mut(&mut self) -> &mut Visual {
        &mut self.visual
    }

    fn draw(&self, target: &mut dyn RenderTarget, options: DrawOption) -> anyhow::Result<()> {
        let mut params = self.visual.resolve(options);
        params.rotation = self.angle;
        // pivot on the start of the line, vertically centred
        params.origin = Vec2::new(0.0, self.src.height as f32 / 2.0);
        target.blit(self.image, self.src, params)
    }

    fn boxed_clone(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Context, DrawCommand};
    use std::f32::consts::FRAC_PI_2;

    fn pixel() -> Image {
        Image {
            id: 1,
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_scale_and_angle_from_direction() {
        let line = StaticLine::new(pixel(), pixel().bounds(), Vec2::new(3.0, 4.0));
        assert_eq!(line.visual().scale, Vec2::new(5.0, 1.0));
        assert_eq!(line.length(), 5.0);
        assert!((line.angle() - 4.0f32.atan2(3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_line_angle() {
        let line = StaticLine::new(pixel(), pixel().bounds(), Vec2::new(0.0, 10.0));
        assert!((line.angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_draw_passes_rotation() {
        let mut line = StaticLine::between(
            pixel(),
            pixel().bounds(),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 30.0),
        );
        assert!(!line.update());

        let mut ctx = Context::new();
        line.draw(&mut ctx, DrawOption::default().with_scale(Vec2::new(1.0, 2.0)))
            .unwrap();
        match &ctx.commands()[0] {
            DrawCommand::Image { params, .. } => {
                assert!((params.rotation - FRAC_PI_2).abs() < 1e-6);
                assert_eq!(params.position, Vec2::new(10.0, 10.0));
                assert_eq!(params.scale, Vec2::new(20.0, 2.0));
                assert_eq!(params.origin, Vec2::new(0.0, 0.5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = StaticLine::new(pixel(), pixel().bounds(), Vec2::new(6.0, 8.0));
        let mut copy = original.boxed_clone();
        copy.visual_mut().color = crate::Color::BLACK;
        copy.visual_mut().scale = Vec2::new(1.0, 3.0);
        copy.visual_mut().offset = Vec2::new(7.0, 7.0);

        assert_eq!(original.visual().color, crate::Color::WHITE);
        assert_eq!(original.visual().scale, Vec2::new(10.0, 1.0));
        assert_eq!(original.visual().offset, Vec2::zero());

        let mut ctx = Context::new();
        copy.draw(&mut ctx, DrawOption::default()).unwrap();
        original.draw(&mut ctx, DrawOption::default()).unwrap();
        match (&ctx.commands()[0], &ctx.commands()[1]) {
            (
                DrawCommand::Image {
                    image: copied,
                    params: copied_params,
                    ..
                },
                DrawCommand::Image {
                    image,
                    params,
                    ..
                },
            ) => {
                assert_eq!(copied, image);
                assert_eq!(copied_params.rotation, params.rotation);
                assert_eq!(copied_params.rotation, original.angle());
                assert_eq!(copied_params.scale, Vec2::new(1.0, 3.0));
                assert_eq!(params.scale, Vec2::new(10.0, 1.0));
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }
}
