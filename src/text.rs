use ab_glyph::{Font as _, ScaleFont as _};
use std::fmt;

use crate::drawable::{DrawOption, Drawable, Visual};
use crate::font::Font;
use crate::target::RenderTarget;

/// A string drawn with a font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    content: String,
    font: Font,
    font_size: f32,
    visual: Visual,
}

impl fmt::Display for TextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl TextLabel {
    pub fn new(content: impl Into<String>, font: Font) -> Self {
        Self {
            content: content.into(),
            font,
            font_size: 24.0,
            visual: Visual::default(),
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Unscaled (width, height) in pixels of the widest line and all lines
    /// stacked at the font's line height.
    pub fn measure(&self) -> (f32, f32) {
        let scaled = self.font.arc().as_scaled(self.font_size.max(1.0));
        let line_height = scaled.ascent() - scaled.descent() + scaled.line_gap();

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for line in self.content.split('\n') {
            lines += 1;
            let mut line_width = 0.0f32;
            let mut prev: Option<ab_glyph::GlyphId> = None;
            for ch in line.chars() {
                let id = scaled.glyph_id(ch);
                if let Some(p) = prev {
                    line_width += scaled.kern(p, id);
                }
                line_width += scaled.h_advance(id);
                prev = Some(id);
            }
            width = width.max(line_width);
        }

        (width, line_height * lines as f32 - scaled.line_gap())
    }
}

impl Drawable for TextLabel {
    fn visual(&self) -> &Visual {
        &self.visual
    }

    fn visual_mut(&mut self) -> &mut Visual {
        &mut self.visual
    }

    fn draw(&self, target: &mut dyn RenderTarget, options: DrawOption) -> anyhow::Result<()> {
        target.draw_text(&self.font, &self.content, self.visual.resolve(options))
    }

    fn boxed_clone(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }
}
