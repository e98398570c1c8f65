use bytemuck::{Pod, Zeroable};

use crate::config::Config;
use crate::font::Font;
use crate::image::{Bounds, Image};
use crate::target::{BlitParams, RenderTarget};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image {
        image: Image,
        src: Bounds,
        params: BlitParams,
    },
    Text {
        font: Font,
        text: String,
        params: BlitParams,
    },
}

impl DrawCommand {
    pub fn params(&self) -> &BlitParams {
        match self {
            DrawCommand::Image { params, .. } | DrawCommand::Text { params, .. } => params,
        }
    }

    pub fn layer(&self) -> f32 {
        self.params().layer
    }
}

/// One image blit packed for an instanced GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 2],
    pub origin: [f32; 2],
    pub scale: [f32; 2],
    pub rotation: f32,
    pub layer: f32,
    /// Source region in image pixels: x, y, width, height.
    pub src: [f32; 4],
    pub color: [f32; 4],
}

impl SpriteInstance {
    fn new(src: Bounds, params: &BlitParams) -> Self {
        Self {
            pos: [params.position.x, params.position.y],
            origin: [params.origin.x, params.origin.y],
            scale: [params.scale.x, params.scale.y],
            rotation: params.rotation,
            layer: params.layer,
            src: [
                src.x as f32,
                src.y as f32,
                src.width as f32,
                src.height as f32,
            ],
            color: params.color.to_array(),
        }
    }
}

/// Recording render target.
///
/// Accumulates draw commands during a frame; a renderer then consumes them in
/// depth order. Also serves as the backend in tests.
#[derive(Debug, Default)]
pub struct Context {
    draw_list: Vec<DrawCommand>,
    debug_draw: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            draw_list: Vec::new(),
            debug_draw: config.debug_draw,
        }
    }

    /// Clears all drawing commands from the previous frame.
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_list
    }

    pub fn len(&self) -> usize {
        self.draw_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_list.is_empty()
    }

    /// Commands ordered by ascending layer; equal layers keep submission order.
    pub fn sorted_by_layer(&self) -> Vec<&DrawCommand> {
        let mut sorted: Vec<&DrawCommand> = self.draw_list.iter().collect();
        sorted.sort_by(|a, b| a.layer().total_cmp(&b.layer()));
        sorted
    }

    /// Image commands in layer order, packed for upload. Text is skipped.
    pub fn instances(&self) -> Vec<SpriteInstance> {
        self.sorted_by_layer()
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image { src, params, .. } => Some(SpriteInstance::new(*src, params)),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    fn push(&mut self, command: DrawCommand) {
        if self.debug_draw {
            match &command {
                DrawCommand::Image { image, src, params } => {
                    log::debug!(
                        "draw image id={} src={:?} pos={:?} layer={}",
                        image.id(),
                        src,
                        params.position,
                        params.layer
                    );
                }
                DrawCommand::Text { font, text, params } => {
                    log::debug!(
                        "draw text font={} text={:?} pos={:?} layer={}",
                        font.id(),
                        text,
                        params.position,
                        params.layer
                    );
                }
            }
        }
        self.draw_list.push(command);
    }
}

impl RenderTarget for Context {
    fn blit(&mut self, image: Image, src: Bounds, params: BlitParams) -> anyhow::Result<()> {
        self.push(DrawCommand::Image { image, src, params });
        Ok(())
    }

    fn draw_text(&mut self, font: &Font, text: &str, params: BlitParams) -> anyhow::Result<()> {
        self.push(DrawCommand::Text {
            font: font.clone(),
            text: text.to_string(),
            params,
        });
        Ok(())
    }
}

pub fn instances_as_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
