//! Minimal asset provider: hands out image and font handles.
//!
//! Pixel data and rasterization belong to the render backend. The registry
//! only tracks what a drawable needs to know about an asset: its id, its
//! pixel size, and for fonts the parsed glyph tables.

use std::collections::HashMap;

use crate::font::{self, Font};
use crate::image::{Bounds, Image};

#[derive(Debug, Default)]
pub struct Assets {
    images: Vec<Image>,
    fonts: HashMap<u32, Font>,
    next_font_id: u32,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an image of the given pixel size.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn register_image(&mut self, width: u32, height: u32) -> anyhow::Result<Image> {
        if width == 0 || height == 0 {
            anyhow::bail!("invalid image size: {}x{}", width, height);
        }
        let image = Image {
            id: self.images.len() as u32,
            width,
            height,
        };
        self.images.push(image);
        log::debug!("registered image id={} size={}x{}", image.id, width, height);
        Ok(image)
    }

    /// Parses `font_data` (TTF/OTF) and registers it.
    pub fn register_font(&mut self, font_data: Vec<u8>) -> anyhow::Result<Font> {
        let inner = font::parse_font(font_data)?;
        let font = Font {
            id: self.next_font_id,
            inner,
        };
        self.next_font_id = self.next_font_id.saturating_add(1);
        self.fonts.insert(font.id, font.clone());
        log::debug!("registered font id={}", font.id);
        Ok(font)
    }

    pub fn register_font_file(&mut self, path: &str) -> anyhow::Result<Font> {
        let data = font::load_font_from_file(path)?;
        self.register_font(data)
    }

    pub fn image(&self, id: u32) -> Option<Image> {
        self.images.get(id as usize).copied()
    }

    pub fn font(&self, id: u32) -> Option<&Font> {
        self.fonts.get(&id)
    }

    /// Checks that `bounds` is a valid source region of `image`.
    pub fn sub_bounds(&self, image: Image, bounds: Bounds) -> anyhow::Result<Bounds> {
        let known = self
            .image(image.id)
            .ok_or_else(|| anyhow::anyhow!("invalid image"))?;
        if !known.bounds().contains(&bounds) {
            anyhow::bail!(
                "bounds {:?} out of range for image {}x{}",
                bounds,
                known.width,
                known.height
            );
        }
        Ok(bounds)
    }
}
