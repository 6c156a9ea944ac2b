//! Persisted font document
//!
//! Fonts are stored as JSON with a `metadata` block and a `glyphs` list.
//! Raw samples are hex encoded. The stored `colors` value is informational;
//! readers recompute it from the glyph data.

use serde::{Deserialize, Serialize};

use crate::core::errors::FontError;
use crate::data::font::{FontCatalog, FontMetadata};
use crate::data::glyph::Glyph;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub antialiasing: Option<bool>,
    #[serde(default)]
    pub colors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphDocument {
    pub codepoint: String,
    pub width: u32,
    pub height: u32,
    pub xoffset: i32,
    pub yoffset: i32,
    #[serde(default)]
    pub xadvance: i32,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDocument {
    #[serde(default)]
    pub metadata: MetadataDocument,
    pub glyphs: Vec<GlyphDocument>,
}

impl From<&Glyph> for GlyphDocument {
    fn from(glyph: &Glyph) -> Self {
        Self {
            codepoint: glyph.codepoint().to_string(),
            width: glyph.width(),
            height: glyph.height(),
            xoffset: glyph.xoffset(),
            yoffset: glyph.yoffset(),
            xadvance: glyph.xadvance(),
            data: encode_hex(glyph.raw_data()),
        }
    }
}

impl TryFrom<&GlyphDocument> for Glyph {
    type Error = FontError;

    fn try_from(doc: &GlyphDocument) -> Result<Self, Self::Error> {
        let mut chars = doc.codepoint.chars();
        let codepoint = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(FontError::InvalidCodepoint {
                    value: doc.codepoint.clone(),
                })
            }
        };
        let raw_data =
            decode_hex(&doc.data).ok_or(FontError::InvalidHexData { codepoint })?;

        Glyph::new(
            codepoint,
            doc.width,
            doc.height,
            doc.xoffset,
            doc.yoffset,
            doc.xadvance,
            raw_data,
        )
    }
}

impl FontCatalog {
    pub fn to_document(&self) -> FontDocument {
        let metadata = self.metadata();
        FontDocument {
            metadata: MetadataDocument {
                name: metadata.name.clone(),
                size: metadata.size,
                antialiasing: metadata.antialiasing,
                colors: self.colors().unwrap_or(0),
            },
            glyphs: self.iter().map(GlyphDocument::from).collect(),
        }
    }

    /// Rebuild a catalog, rejecting malformed glyphs and duplicate codepoints
    pub fn from_document(doc: &FontDocument) -> Result<Self, FontError> {
        let mut font = FontCatalog::with_metadata(FontMetadata {
            name: doc.metadata.name.clone(),
            size: doc.metadata.size,
            antialiasing: doc.metadata.antialiasing,
        });
        for glyph_doc in &doc.glyphs {
            font.add(Glyph::try_from(glyph_doc)?)?;
        }
        Ok(font)
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(DIGITS[(byte >> 4) as usize] as char);
        out.push(DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

fn decode_hex(text: &str) -> Option<Vec<u8>> {
    let digits = text.as_bytes();
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .chunks_exact(2)
        .map(|pair| {
            let high = (pair[0] as char).to_digit(16)?;
            let low = (pair[1] as char).to_digit(16)?;
            Some((high * 16 + low) as u8)
        })
        .collect()
}
