//! tilesprite - drawable sprites, tile sheets and tile animations.
//!
//! Every visual implements [`Drawable`]: the owner calls `update()` once per
//! simulation tick and `draw()` once per render tick against any
//! [`RenderTarget`]. [`Context`] is a recording target that a renderer can
//! drain in depth order.
//!
//! # Example
//! ```
//! use tilesprite::{
//!     pattern, AnimatedTileSheet, Assets, Context, DrawOption, Drawable, TickRate, TileSheet,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut assets = Assets::new();
//! let image = assets.register_image(128, 32)?;
//!
//! let sheet = TileSheet::from_grid(image, 4, 1)?;
//! let mut walk =
//!     AnimatedTileSheet::new(sheet, pattern::shuttle_range(4), 0.5, true, TickRate::default())?;
//!
//! let mut context = Context::new();
//! walk.update();
//! walk.draw(&mut context, DrawOption::default())?;
//! assert_eq!(context.len(), 1);
//! # Ok(())
//! # }
//! ```

mod animated;
mod assets;
mod color;
mod config;
mod context;
mod drawable;
mod font;
mod image;
mod line;
pub mod pattern;
mod static_image;
mod target;
mod text;
mod tile_sheet;

pub use animated::{AnimatedTileSheet, AnimationState};
pub use assets::Assets;
pub use color::Color;
pub use config::{Config, TickRate};
pub use context::{instances_as_bytes, Context, DrawCommand, SpriteInstance};
pub use drawable::{DrawOption, Drawable, Visual};
pub use font::{load_font_from_file, Font};
pub use image::{Bounds, Image};
pub use line::StaticLine;
pub use static_image::StaticImage;
pub use target::{BlitParams, RenderTarget};
pub use text::TextLabel;
pub use tile_sheet::{split_src_rects, TileSheet};

pub use ultraviolet::Vec2;
