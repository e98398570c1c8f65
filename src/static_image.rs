use crate::drawable::{DrawOption, Drawable, Visual};
use crate::image::{Bounds, Image};
use crate::target::RenderTarget;

/// A fixed region of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticImage {
    image: Image,
    src: Bounds,
    visual: Visual,
}

impl StaticImage {
    pub fn new(image: Image, src: Bounds) -> Self {
        Self {
            image,
            src,
            visual: Visual::default(),
        }
    }

    /// The whole image.
    pub fn full(image: Image) -> Self {
        Self::new(image, image.bounds())
    }

    pub fn image(&self) -> Image {
        self.image
    }

    pub fn src(&self) -> Bounds {
        self.src
    }
}

impl Drawable for StaticImage {
    fn visual(&self) -> &Visual {
        &self.visual
    }

    fn visual_mut(&mut self) -> &mut Visual {
        &mut self.visual
    }

    fn draw(&self, target: &mut dyn RenderTarget, options: DrawOption) -> anyhow::Result<()> {
        target.blit(self.image, self.src, self.visual.resolve(options))
    }

    fn boxed_clone(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }
}
