use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use svgsheet::diagnostics::Diagnostics;
use svgsheet::io::export::{export_layout, sheet_to_svg};
use svgsheet::packer::pack;

use crate::config::{SheetJob, SvgSheetConfig};
use crate::io;
use crate::io::templates::{render_css, render_html};

/// Summary of a finished sheet job
#[derive(Debug)]
pub struct SheetReport {
    pub dest: PathBuf,
    pub n_icons: usize,
    pub width: f32,
    pub height: f32,
    /// Every diagnostic of the job: discovery and reading first, packing after
    pub diagnostics: Diagnostics,
}

/// Builds every sheet of the configuration in parallel.
/// Fails on the first job which could not write its output.
pub fn build_sheets(config: &SvgSheetConfig) -> Result<Vec<SheetReport>> {
    config
        .sheets
        .par_iter()
        .map(|job| build_sheet(job, config))
        .collect()
}

/// Reads the job's sources, packs them and writes the sheet together with its layout, stylesheet and preview.
pub fn build_sheet(job: &SheetJob, config: &SvgSheetConfig) -> Result<SheetReport> {
    let mut diagnostics = Diagnostics::new();
    let sources = io::discover_sources(&job.sources, &mut diagnostics)?;
    let icons = io::read_icons(&sources, &mut diagnostics);

    let build = pack(&icons, &config.pack_config);

    let stem = job
        .dest
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid sheet destination: {}", job.dest.display()))?;
    let dir = job.dest.parent().unwrap_or(Path::new(""));
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).with_context(|| format!("could not create directory: {}", dir.display()))?;
    }
    let svg_file = format!("{stem}.svg");
    let css_file = format!("{stem}.css");

    io::write_svg(&sheet_to_svg(&build.sheet), &job.dest)?;
    io::write_json(&export_layout(stem, &build), &dir.join(format!("{stem}.json")))?;
    if config.generate_css {
        io::write_text(&render_css(stem, &svg_file, &build.layout), &dir.join(&css_file))?;
    }
    if config.generate_html {
        io::write_text(
            &render_html(stem, &css_file, &build.layout),
            &dir.join(format!("{stem}.html")),
        )?;
    }

    info!(
        "[JOB] {} icons packed into {} ({}x{})",
        build.layout.len(),
        job.dest.display(),
        build.sheet.width,
        build.sheet.height
    );

    let report = SheetReport {
        dest: job.dest.clone(),
        n_icons: build.layout.len(),
        width: build.sheet.width,
        height: build.sheet.height,
        diagnostics: {
            diagnostics.extend(build.diagnostics);
            diagnostics
        },
    };
    Ok(report)
}
