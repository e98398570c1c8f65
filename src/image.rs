/// Rectangle in image pixels, used as the source region of a blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// X coordinate of the top-left corner.
    pub(crate) x: u32,
    /// Y coordinate of the top-left corner.
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Bounds {
    /// Creates new bounds with the specified dimensions.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if `other` lies entirely inside these bounds.
    pub fn contains(&self, other: &Bounds) -> bool {
        let right = other.x as u64 + other.width as u64;
        let bottom = other.y as u64 + other.height as u64;
        other.x >= self.x
            && other.y >= self.y
            && right <= self.x as u64 + self.width as u64
            && bottom <= self.y as u64 + self.height as u64
    }
}

/// Handle to an image owned by an asset provider.
///
/// Handles are plain ids plus the pixel size of the image, so they are `Copy`
/// and every drawable built from the same image compares equal on it. The
/// pixels themselves live with whoever registered the image.
#[derive(Debug, Clone, Copy)]
pub struct Image {
    pub(crate) id: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Image {
    pub fn id(self) -> u32 {
        self.id
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Bounds covering the whole image.
    pub fn bounds(self) -> Bounds {
        Bounds::new(0, 0, self.width, self.height)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Image {}

impl std::hash::Hash for Image {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
