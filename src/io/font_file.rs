//! Reading and writing font files on disk

use std::fs;
use std::path::Path;

use log::info;

use crate::core::errors::{FontContext, FontResult};
use crate::data::font::FontCatalog;
use crate::data::serialize::FontDocument;

/// Parse a font from its JSON text
pub fn font_from_json(json: &str) -> FontResult<FontCatalog> {
    let doc: FontDocument = serde_json::from_str(json)?;
    Ok(FontCatalog::from_document(&doc)?)
}

/// Serialize a font to JSON text, with a trailing newline
pub fn font_to_json(font: &FontCatalog) -> FontResult<String> {
    let mut json = serde_json::to_string(&font.to_document())?;
    json.push('\n');
    Ok(json)
}

pub fn load_font<P: AsRef<Path>>(path: P) -> FontResult<FontCatalog> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).with_file_context("read", path)?;
    let doc: FontDocument =
        serde_json::from_str(&json).with_file_context("parse", path)?;
    let font = FontCatalog::from_document(&doc).with_file_context("load", path)?;
    info!("Loaded {} from {}", font, path.display());
    Ok(font)
}

pub fn save_font<P: AsRef<Path>>(font: &FontCatalog, path: P) -> FontResult<()> {
    let path = path.as_ref();
    fs::write(path, font_to_json(font)?).with_file_context("write", path)?;
    info!("Saved {} to {}", font, path.display());
    Ok(())
}
