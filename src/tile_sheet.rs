use std::sync::Arc;

use crate::drawable::{DrawOption, Drawable, Visual};
use crate::image::{Bounds, Image};
use crate::target::RenderTarget;

/// Splits a `width` x `height` image into `tiles_wide * tiles_high` equal
/// tiles in row-major order.
///
/// Tile size uses integer division, so remainder pixels on the right and
/// bottom edges belong to no tile. A zero tile count yields no tiles.
pub fn split_src_rects(width: u32, height: u32, tiles_wide: u32, tiles_high: u32) -> Vec<Bounds> {
    if tiles_wide == 0 || tiles_high == 0 {
        return Vec::new();
    }
    let tile_w = width / tiles_wide;
    let tile_h = height / tiles_high;
    (0..tiles_high)
        .flat_map(|row| {
            (0..tiles_wide).map(move |col| Bounds::new(col * tile_w, row * tile_h, tile_w, tile_h))
        })
        .collect()
}

/// An image cut into tiles, drawing the tile at the current index.
///
/// The index is always in `0..tile_count()`: writes outside that range are
/// clamped to the nearest tile rather than rejected.
#[derive(Debug)]
pub struct TileSheet {
    image: Image,
    src_rects: Arc<[Bounds]>,
    index: usize,
    initial_index: usize,
    visual: Visual,
}

impl TileSheet {
    /// # Errors
    /// Returns an error if `src_rects` is empty.
    pub fn new(image: Image, src_rects: Vec<Bounds>) -> anyhow::Result<Self> {
        if src_rects.is_empty() {
            anyhow::bail!("tile sheet for image {} has no tiles", image.id());
        }
        Ok(Self {
            image,
            src_rects: src_rects.into(),
            index: 0,
            initial_index: 0,
            visual: Visual::default(),
        })
    }

    /// Cuts the whole image into a `tiles_wide` x `tiles_high` grid.
    pub fn from_grid(image: Image, tiles_wide: u32, tiles_high: u32) -> anyhow::Result<Self> {
        Self::new(
            image,
            split_src_rects(image.width(), image.height(), tiles_wide, tiles_high),
        )
    }

    /// Sets the starting tile, which clones also start from. Clamped like
    /// [`set_index`](Self::set_index).
    pub fn with_initial_index(mut self, index: isize) -> Self {
        self.set_index(index);
        self.initial_index = self.index;
        self
    }

    pub fn image(&self) -> Image {
        self.image
    }

    pub fn tile_count(&self) -> usize {
        self.src_rects.len()
    }

    pub fn tiles(&self) -> &[Bounds] {
        &self.src_rects
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    /// Sets the current tile, clamping to `0..=tile_count() - 1`.
    pub fn set_index(&mut self, index: isize) {
        let last = self.src_rects.len() - 1;
        self.index = if index < 0 {
            0
        } else {
            (index as usize).min(last)
        };
    }

    /// Steps to the next tile. Returns true when it wraps back to tile 0.
    pub fn advance(&mut self) -> bool {
        let next = self.index + 1;
        if next >= self.src_rects.len() {
            self.index = 0;
            true
        } else {
            self.index = next;
            false
        }
    }

    /// Source rect of the current tile.
    pub fn current(&self) -> Bounds {
        self.src_rects[self.index]
    }

    /// Source rect of tile `index`, clamped like [`set_index`](Self::set_index).
    pub fn tile(&self, index: usize) -> Bounds {
        self.src_rects[index.min(self.src_rects.len() - 1)]
    }

    // 3x3 grid addressing. Each slot missing from a small sheet falls back
    // to a neighbouring accessor.

    pub fn top_left(&self) -> Bounds {
        self.src_rects[0]
    }

    pub fn top(&self) -> Bounds {
        self.slot_or(1, Self::top_left)
    }

    pub fn top_right(&self) -> Bounds {
        self.slot_or(2, Self::top)
    }

    pub fn left(&self) -> Bounds {
        self.slot_or(3, Self::top_left)
    }

    pub fn middle(&self) -> Bounds {
        self.slot_or(4, Self::top)
    }

    pub fn right(&self) -> Bounds {
        self.slot_or(5, Self::top_right)
    }

    pub fn bottom_left(&self) -> Bounds {
        self.slot_or(6, Self::left)
    }

    pub fn bottom(&self) -> Bounds {
        self.slot_or(7, Self::middle)
    }

    pub fn bottom_right(&self) -> Bounds {
        self.slot_or(8, Self::right)
    }

    fn slot_or(&self, slot: usize, fallback: fn(&Self) -> Bounds) -> Bounds {
        match self.src_rects.get(slot) {
            Some(rect) => *rect,
            None => fallback(self),
        }
    }
}

/// Clones share the tile rects and image but start again at the initial tile.
impl Clone for TileSheet {
    fn clone(&self) -> Self {
        Self {
            image: self.image,
            src_rects: Arc::clone(&self.src_rects),
            index: self.initial_index,
            initial_index: self.initial_index,
            visual: self.visual,
        }
    }
}

impl Drawable for TileSheet {
    fn visual(&self) -> &Visual {
        &self.visual
    }

    fn visual_mut(&mut self) -> &mut Visual {
        &mut self.visual
    }

    fn draw(&self, target: &mut dyn RenderTarget, options: DrawOption) -> anyhow::Result<()> {
        target.blit(self.image, self.current(), self.visual.resolve(options))
    }

    fn boxed_clone(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }
}
