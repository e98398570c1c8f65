use ab_glyph::FontArc;

/// Handle to a parsed font.
///
/// Cloning is cheap: the glyph data is shared behind the `FontArc`. Two
/// handles are equal when they were issued for the same registration.
#[derive(Clone)]
pub struct Font {
    pub(crate) id: u32,
    pub(crate) inner: FontArc,
}

impl Font {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn arc(&self) -> &FontArc {
        &self.inner
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("id", &self.id).finish()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Font {}

pub fn load_font_from_file(path: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| anyhow::anyhow!("Failed to load font from {}: {}", path, e))
}

pub(crate) fn parse_font(font_data: Vec<u8>) -> anyhow::Result<FontArc> {
    FontArc::try_from_vec(font_data).map_err(|e| anyhow::anyhow!("Failed to parse font: {:?}", e))
}
