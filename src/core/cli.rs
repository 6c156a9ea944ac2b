//! Command line arguments for the toolkit

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::settings::DEFAULT_DRAW_TEXT;
use crate::editing::manipulate::Manipulator;
use crate::io::export::ExportFormat;

/// Pixel font generation and handling tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Increase verbosity; can be given multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a glyph strip image into the native font format
    Import(ImportArgs),
    /// Convert a native font into another format
    Convert(ConvertArgs),
    /// Draw some text using a font into a PNG image
    Draw(DrawArgs),
    /// Apply manipulators to the glyphs of a font
    Manipulate(ManipulateArgs),
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Characters that correspond to the imported glyphs, left to right
    #[arg(short, long, value_name = "GLYPHSTR")]
    pub glyphs: String,

    /// Font file to write
    #[arg(short, long, value_name = "FILENAME")]
    pub outfile: PathBuf,

    /// PNG image to import
    pub png_image: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Ascii)]
    pub format: ExportFormat,

    /// Export glyphs as stored instead of cropping them first
    #[arg(long, default_value_t = false)]
    pub no_optimize: bool,

    /// File to write
    #[arg(short, long, value_name = "FILENAME")]
    pub outfile: PathBuf,

    /// Font file to read
    pub font_filename: PathBuf,
}

#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Text to draw
    #[arg(short, long, default_value = DEFAULT_DRAW_TEXT)]
    pub text: String,

    /// PNG file to write
    #[arg(short, long, value_name = "FILENAME")]
    pub outfile: PathBuf,

    /// Font file to read
    pub font_filename: PathBuf,
}

#[derive(Args, Debug)]
pub struct ManipulateArgs {
    /// Glyphs to apply the manipulators to; all glyphs when omitted
    #[arg(short, long, value_name = "GLYPHSTR")]
    pub glyphs: Option<String>,

    /// Font file to read
    #[arg(short, long, value_name = "FILENAME")]
    pub infile: PathBuf,

    /// Font file to write
    #[arg(short, long, value_name = "FILENAME")]
    pub outfile: PathBuf,

    /// Manipulators such as `optimize`, `shift_left,1` or `monospace,6`
    #[arg(required = true, num_args = 1..)]
    pub manipulators: Vec<Manipulator>,
}
