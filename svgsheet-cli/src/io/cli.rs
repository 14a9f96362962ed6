use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Packs SVG icons into a single sprite sheet")]
pub struct Cli {
    /// SVG files, or directories containing SVG files, packed in the given order
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,
    /// Path of the sheet to build from SOURCES
    #[arg(short, long, value_name = "FILE", requires = "sources")]
    pub output: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[arg(long, value_name = "PX")]
    pub icon_padding: Option<f32>,
    #[arg(long, value_name = "PX")]
    pub sheet_max_width: Option<f32>,
    #[arg(long, value_name = "PX")]
    pub icon_default_width: Option<f32>,
    #[arg(long, value_name = "PX")]
    pub icon_default_height: Option<f32>,
    /// Do not write a stylesheet next to the sheet
    #[arg(long)]
    pub no_css: bool,
    /// Do not write an HTML preview next to the sheet
    #[arg(long)]
    pub no_html: bool,
}
