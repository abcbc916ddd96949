use crate::error::StickerError;

/// Ordered set of sticker glyphs the user can pick from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    /// Build a palette from the built-in glyphs, dropping blanks and repeats
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for glyph in glyphs {
            let glyph = glyph.as_ref().trim();
            if !glyph.is_empty() && !palette.contains(glyph) {
                palette.glyphs.push(glyph.to_owned());
            }
        }
        palette
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.iter().any(|g| g == glyph)
    }

    /// Add a user-supplied glyph and return it.
    ///
    /// Blank text is replaced by `fallback`. Glyphs already in the palette are
    /// rejected.
    pub fn add_custom(&mut self, text: &str, fallback: &str) -> Result<String, StickerError> {
        let glyph = match text.trim() {
            "" => fallback.trim(),
            trimmed => trimmed,
        };
        if self.contains(glyph) {
            return Err(StickerError::Duplicate(glyph.to_owned()));
        }
        self.glyphs.push(glyph.to_owned());
        Ok(glyph.to_owned())
    }
}
