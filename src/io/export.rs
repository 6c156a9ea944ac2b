//! Export formats
//!
//! Conversions from the native font document into formats used by other
//! tools: a plain text dump, the bitfontmaker JSON layout and a generated
//! source listing of `YBit` packed glyphs for small displays.

use std::io::Write;

use clap::ValueEnum;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::core::errors::{FontContext, FontResult};
use crate::core::settings::{
    BITFONTMAKER_BASELINE_ROW, BITFONTMAKER_GRID_SIZE, BITFONTMAKER_LEFT_COLUMN,
    DEFAULT_INK_THRESHOLD,
};
use crate::data::bitmap::{BitmapGlyph, PackingOrder};
use crate::data::font::FontCatalog;
use crate::data::glyph::{AsciiStyle, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Ascii,
    Bitfontmaker,
    Python,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Keep glyph rasters as stored instead of cropping them first
    pub no_optimize: bool,
}

pub fn export_font<W: Write>(
    font: &FontCatalog,
    format: ExportFormat,
    options: ExportOptions,
    out: &mut W,
) -> FontResult<()> {
    match format {
        ExportFormat::Ascii => write_ascii(font, out),
        ExportFormat::Bitfontmaker => write_bitfontmaker(font, out),
        ExportFormat::Python => write_python(font, options, out),
    }
}

fn write_ascii<W: Write>(font: &FontCatalog, out: &mut W) -> FontResult<()> {
    writeln!(
        out,
        "# Font: {}, {} glyphs",
        font.name().unwrap_or("unnamed"),
        font.len()
    )?;
    writeln!(out)?;

    // Two-color fonts read better as a dot matrix
    let style = match font.colors() {
        Ok(2) => AsciiStyle::Dots,
        _ => AsciiStyle::Values,
    };
    for (index, glyph) in font.iter().enumerate() {
        writeln!(out, "# Glyph {}: \"{}\"", index, glyph.codepoint())?;
        write!(out, "{}", glyph.render_ascii(style))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Row bitmasks of one glyph on the fixed bitfontmaker grid
fn bitfontmaker_rows(glyph: &Glyph) -> [u32; BITFONTMAKER_GRID_SIZE] {
    let mut rows = [0u32; BITFONTMAKER_GRID_SIZE];
    let grid = 0..BITFONTMAKER_GRID_SIZE as i32;

    for (x, y) in glyph.set_pixels() {
        // Offsets far off the grid must not overflow on the way there
        let row = y
            .checked_add(BITFONTMAKER_BASELINE_ROW)
            .and_then(|row| row.checked_add(glyph.yoffset()));
        let column = x
            .checked_add(BITFONTMAKER_LEFT_COLUMN)
            .and_then(|column| column.checked_add(glyph.xoffset()));
        let cell = row
            .zip(column)
            .filter(|(row, column)| grid.contains(row) && grid.contains(column));
        if let Some((row, column)) = cell {
            rows[row as usize] |= 1 << column;
        } else {
            warn!(
                "Pixel ({}, {}) of glyph '{}' falls outside the bitfontmaker grid",
                x,
                y,
                glyph.codepoint()
            );
        }
    }
    rows
}

fn write_bitfontmaker<W: Write>(font: &FontCatalog, out: &mut W) -> FontResult<()> {
    let mut doc = Map::new();
    let header = [
        ("name", font.name().unwrap_or_default()),
        ("copy", ""),
        ("letterspace", "64"),
        ("basefont_size", "512"),
        ("basefont_left", "62"),
        ("basefont_top", "0"),
        ("basefont", "Arial"),
        ("basefont2", ""),
    ];
    for (key, value) in header {
        doc.insert(key.to_string(), Value::from(value));
    }

    for glyph in font.iter() {
        let rows = bitfontmaker_rows(glyph);
        doc.insert(
            (glyph.codepoint() as u32).to_string(),
            Value::from(rows.to_vec()),
        );
    }

    serde_json::to_writer(&mut *out, &Value::Object(doc))?;
    writeln!(out)?;
    Ok(())
}

fn write_python<W: Write>(
    font: &FontCatalog,
    options: ExportOptions,
    out: &mut W,
) -> FontResult<()> {
    writeln!(out, "from UDisplay import UDisplay")?;
    writeln!(out)?;
    writeln!(out, "glyphs = {{")?;

    for stored in font.iter() {
        // Blank glyphs such as space cannot be cropped; --no-optimize exports them
        let glyph = if options.no_optimize {
            stored.clone()
        } else {
            stored
                .optimize()
                .with_glyph_context("optimize", stored.codepoint())?
        };

        let bitmap = BitmapGlyph::pack(&glyph, DEFAULT_INK_THRESHOLD, PackingOrder::YBit);
        debug!("{}\n{}", glyph, bitmap.render_dots());

        let data: Vec<String> = bitmap
            .into_data()
            .into_iter()
            .map(|b| format!("0x{b:02x}"))
            .collect();
        writeln!(
            out,
            "\t\"{}\": UDisplay.create_glyph(width = {}, height = {}, xoffset = {}, yoffset = {}, xadvance = {}, data = bytes([{}])),",
            escape_python(glyph.codepoint()),
            glyph.width(),
            glyph.height(),
            glyph.xoffset(),
            glyph.yoffset(),
            glyph.xadvance(),
            data.join(", ")
        )?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

fn escape_python(c: char) -> String {
    match c {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        c => c.to_string(),
    }
}
