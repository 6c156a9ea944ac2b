//! Font catalog
//!
//! A font is a set of glyphs keyed by codepoint plus a little metadata that
//! travels with the persisted file. Iteration is always codepoint-sorted.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};

use crate::core::errors::FontError;
use crate::data::glyph::Glyph;

/// Descriptive metadata carried along with the glyphs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontMetadata {
    pub name: Option<String>,
    /// Nominal size; fractional sizes are allowed
    pub size: Option<f64>,
    pub antialiasing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontCatalog {
    metadata: FontMetadata,
    glyphs: BTreeMap<char, Glyph>,
}

impl FontCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(metadata: FontMetadata) -> Self {
        Self {
            metadata,
            glyphs: BTreeMap::new(),
        }
    }

    pub fn metadata(&self) -> &FontMetadata {
        &self.metadata
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Insert a glyph whose codepoint is not yet present
    pub fn add(&mut self, glyph: Glyph) -> Result<(), FontError> {
        let codepoint = glyph.codepoint();
        if self.glyphs.contains_key(&codepoint) {
            return Err(FontError::DuplicateCodepoint { codepoint });
        }
        self.glyphs.insert(codepoint, glyph);
        Ok(())
    }

    /// Insert or overwrite the glyph for its codepoint
    pub fn replace(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.codepoint(), glyph);
    }

    pub fn get(&self, codepoint: char) -> Option<&Glyph> {
        self.glyphs.get(&codepoint)
    }

    /// Glyphs in codepoint order
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Largest number of distinct sample values used by any one glyph
    pub fn colors(&self) -> Result<usize, FontError> {
        self.iter()
            .map(Glyph::colors)
            .max()
            .ok_or(FontError::EmptyCatalog)
    }

    pub fn max_glyph_width(&self) -> Option<u32> {
        self.iter().map(Glyph::width).max()
    }

    pub fn max_glyph_height(&self) -> Option<u32> {
        self.iter().map(Glyph::height).max()
    }

    /// Log a one-line summary of every glyph
    pub fn dump(&self) {
        info!("{self}");
        for glyph in self.iter() {
            debug!("{glyph}");
        }
    }
}

impl fmt::Display for FontCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Font<{} glyphs>", self.len())
    }
}

impl<'a> IntoIterator for &'a FontCatalog {
    type Item = &'a Glyph;
    type IntoIter = std::collections::btree_map::Values<'a, char, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(codepoint: char, width: u32, data: Vec<u8>) -> Glyph {
        let height = data.len() as u32 / width;
        Glyph::new(codepoint, width, height, 0, -(height as i32), width as i32 + 1, data)
            .unwrap()
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut font = FontCatalog::new();
        font.add(glyph('A', 1, vec![0])).unwrap();
        assert_eq!(
            font.add(glyph('A', 1, vec![10])),
            Err(FontError::DuplicateCodepoint { codepoint: 'A' })
        );
        assert_eq!(font.get('A').unwrap().raw_data(), &[0]);
    }

    #[test]
    fn test_replace_upserts() {
        let mut font = FontCatalog::new();
        font.replace(glyph('A', 1, vec![0]));
        font.replace(glyph('A', 2, vec![0, 0]));
        assert_eq!(font.len(), 1);
        assert_eq!(font.get('A').unwrap().width(), 2);
        assert!(font.get('B').is_none());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut font = FontCatalog::new();
        for c in ['c', 'A', 'b', '0'] {
            font.add(glyph(c, 1, vec![0])).unwrap();
        }
        let order: Vec<char> = font.iter().map(Glyph::codepoint).collect();
        assert_eq!(order, vec!['0', 'A', 'b', 'c']);
    }

    #[test]
    fn test_colors_and_dimensions() {
        let mut font = FontCatalog::new();
        assert_eq!(font.colors(), Err(FontError::EmptyCatalog));
        assert_eq!(font.max_glyph_width(), None);

        font.add(glyph('a', 2, vec![0, 255, 255, 0])).unwrap();
        font.add(glyph('b', 3, vec![0, 128, 255])).unwrap();
        assert_eq!(font.colors(), Ok(3));
        assert_eq!(font.max_glyph_width(), Some(3));
        assert_eq!(font.max_glyph_height(), Some(2));
        assert_eq!(font.to_string(), "Font<2 glyphs>");
    }
}
