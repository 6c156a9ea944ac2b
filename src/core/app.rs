//! Command dispatch
//!
//! Each subcommand loads its inputs, runs the font engine and writes its
//! output. Nothing is written when any step fails.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use log::{debug, info};

use crate::core::cli::{CliArgs, Command, ConvertArgs, DrawArgs, ImportArgs, ManipulateArgs};
use crate::core::errors::{FontContext, FontResult};
use crate::data::unicode::{describe_codepoint, glyph_chars};
use crate::editing::manipulate::manipulate_font;
use crate::io::export::{export_font, ExportOptions};
use crate::io::font_file::{load_font, save_font};
use crate::io::segment::segment;
use crate::rendering::draw::draw_text;

/// Run the command selected on the command line
pub fn run(cli_args: CliArgs) -> FontResult<()> {
    match cli_args.command {
        Command::Import(args) => run_import(&args),
        Command::Convert(args) => run_convert(&args),
        Command::Draw(args) => run_draw(&args),
        Command::Manipulate(args) => run_manipulate(&args),
    }
}

fn run_import(args: &ImportArgs) -> FontResult<()> {
    let image = image::open(&args.png_image)
        .with_file_context("open", &args.png_image)?
        .to_rgb8();
    debug!(
        "{}: {} x {} pixels",
        args.png_image.display(),
        image.width(),
        image.height()
    );

    let codepoints = glyph_chars(&args.glyphs);
    let font = segment(&image, &codepoints)
        .with_context(|| format!("Failed to import {}", args.png_image.display()))?;
    info!("Imported {}", font);

    save_font(&font, &args.outfile)
}

fn run_convert(args: &ConvertArgs) -> FontResult<()> {
    let font = load_font(&args.font_filename)?;
    let options = ExportOptions {
        no_optimize: args.no_optimize,
    };

    // Render into memory first so a failed export leaves no partial file
    let mut buffer = Vec::new();
    export_font(&font, args.format, options, &mut buffer)?;

    let file = File::create(&args.outfile).with_file_context("create", &args.outfile)?;
    let mut out = BufWriter::new(file);
    out.write_all(&buffer)
        .and_then(|_| out.flush())
        .with_file_context("write", &args.outfile)?;
    info!("Wrote {:?} export to {}", args.format, args.outfile.display());
    Ok(())
}

fn run_draw(args: &DrawArgs) -> FontResult<()> {
    let font = load_font(&args.font_filename)?;
    let image = draw_text(&font, &args.text);
    image
        .save(&args.outfile)
        .with_file_context("write", &args.outfile)?;
    info!("Drew {:?} into {}", args.text, args.outfile.display());
    Ok(())
}

fn run_manipulate(args: &ManipulateArgs) -> FontResult<()> {
    let mut font = load_font(&args.infile)?;
    let selection = args.glyphs.as_deref().map(glyph_chars);
    if let Some(chars) = &selection {
        for c in chars.iter().filter(|c| font.get(**c).is_none()) {
            debug!("Skipping {}, not in font", describe_codepoint(*c));
        }
    }

    let changed = manipulate_font(&mut font, selection.as_deref(), &args.manipulators)?;
    info!("Manipulated {} glyphs", changed);
    font.dump();

    save_font(&font, &args.outfile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FontError;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pftk-{}-{}", std::process::id(), name))
    }

    /// Two separate ink columns on white
    fn write_strip(path: &PathBuf) {
        let mut img = RgbImage::from_pixel(5, 3, Rgb([255, 255, 255]));
        for y in 0..3 {
            img.put_pixel(0, y, Rgb([0, 0, 0]));
            img.put_pixel(3, y, Rgb([0, 0, 0]));
        }
        img.save(path).unwrap();
    }

    fn import(png: &PathBuf, out: &PathBuf, glyphs: &str) -> FontResult<()> {
        let args = CliArgs::try_parse_from([
            OsString::from("pftk"),
            OsString::from("import"),
            OsString::from("-g"),
            OsString::from(glyphs),
            OsString::from("-o"),
            out.clone().into_os_string(),
            png.clone().into_os_string(),
        ])
        .unwrap();
        run(args)
    }

    #[test]
    fn test_import_count_mismatch_writes_nothing() {
        let png = temp_path("mismatch.png");
        let out = temp_path("mismatch.json");
        write_strip(&png);
        let _ = std::fs::remove_file(&out);

        let error = import(&png, &out, "abc").unwrap_err();
        assert_eq!(
            error.downcast_ref::<FontError>(),
            Some(&FontError::GlyphCountMismatch {
                found: 2,
                expected: 3
            })
        );
        assert!(!out.exists(), "No font file is written on failure");
        std::fs::remove_file(&png).unwrap();
    }

    #[test]
    fn test_import_writes_font_file() {
        let png = temp_path("import.png");
        let out = temp_path("import.json");
        write_strip(&png);

        import(&png, &out, "ab").unwrap();
        let font = load_font(&out).unwrap();
        assert_eq!(font.len(), 2);
        assert_eq!(font.get('b').unwrap().height(), 3);

        std::fs::remove_file(&png).unwrap();
        std::fs::remove_file(&out).unwrap();
    }
}
