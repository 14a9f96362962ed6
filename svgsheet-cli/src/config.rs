use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use svgsheet::packer::PackConfig;

use crate::io::cli::Cli;

/// Configuration of a run: how icons are packed, which auxiliary files are written and which sheets are built
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SvgSheetConfig {
    /// Configuration of the row packer, shared by all sheets
    #[serde(flatten)]
    pub pack_config: PackConfig,
    /// Write a stylesheet with one rule per icon next to every sheet
    pub generate_css: bool,
    /// Write an HTML preview page next to every sheet
    pub generate_html: bool,
    /// The sheets to build, independently of each other
    pub sheets: Vec<SheetJob>,
}

impl Default for SvgSheetConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            generate_css: true,
            generate_html: true,
            sheets: vec![],
        }
    }
}

/// A single sheet to build
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SheetJob {
    /// SVG files, or directories whose `*.svg` files are all included, in order
    pub sources: Vec<PathBuf>,
    /// Path of the sheet's SVG file, the auxiliary files are written next to it
    pub dest: PathBuf,
}

impl SvgSheetConfig {
    /// Applies the options given on the command line on top of this configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        let pc = &mut self.pack_config;
        if let Some(padding) = cli.icon_padding {
            pc.icon_padding = padding;
        }
        if let Some(width) = cli.sheet_max_width {
            pc.sheet_max_width = width;
        }
        if let Some(width) = cli.icon_default_width {
            pc.icon_default_width = width;
        }
        if let Some(height) = cli.icon_default_height {
            pc.icon_default_height = height;
        }
        if cli.no_css {
            self.generate_css = false;
        }
        if cli.no_html {
            self.generate_html = false;
        }
        if let Some(dest) = &cli.output {
            if !cli.sources.is_empty() {
                self.sheets.push(SheetJob {
                    sources: cli.sources.clone(),
                    dest: dest.clone(),
                });
            }
        }
    }
}
