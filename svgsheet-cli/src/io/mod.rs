use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{Level, LevelFilter, debug, info, log};
use serde::Serialize;
use svg::Document;
use svgsheet::diagnostics::{Diagnostic, Diagnostics};
use svgsheet::entities::IconDocument;
use svgsheet::io::import::{identifier_from_path, import_icon};

use crate::EPOCH;
use crate::config::SvgSheetConfig;

pub mod cli;
pub mod templates;

pub fn read_config(path: &Path) -> Result<SvgSheetConfig> {
    let file = File::open(path).with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

/// Expands the given inputs into the list of SVG files to pack.
/// Directories contribute their `*.svg` files sorted by name, inputs which do not exist are reported and skipped.
pub fn discover_sources(inputs: &[PathBuf], diagnostics: &mut Diagnostics) -> Result<Vec<PathBuf>> {
    let mut sources = vec![];
    for input in inputs {
        if !input.exists() {
            diagnostics.report(Diagnostic::MissingSource {
                source: input.display().to_string(),
            });
        } else if input.is_dir() {
            let mut entries = fs::read_dir(input)
                .with_context(|| format!("could not read directory: {}", input.display()))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()?;
            entries.retain(|p| p.is_file() && is_svg(p));
            entries.sort();
            debug!("[IO] {} svg files found in {}", entries.len(), input.display());
            sources.extend(entries);
        } else {
            sources.push(input.clone());
        }
    }
    Ok(sources)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Reads and parses every source. Sources which cannot be read or parsed are reported and skipped.
pub fn read_icons(sources: &[PathBuf], diagnostics: &mut Diagnostics) -> Vec<IconDocument> {
    sources
        .iter()
        .filter_map(|path| {
            let source = path.display().to_string();
            let icon = fs::read_to_string(path)
                .map_err(anyhow::Error::from)
                .and_then(|content| import_icon(&source, &identifier_from_path(path), &content));
            match icon {
                Ok(icon) => Some(icon),
                Err(e) => {
                    diagnostics.report(Diagnostic::UnreadableSource {
                        source,
                        reason: format!("{e:#}"),
                    });
                    None
                }
            }
        })
        .collect()
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write json file: {}", path.display()))?;

    info!("[IO] json written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_text(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).with_context(|| format!("could not write file: {}", path.display()))?;
    info!("[IO] file written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Zoned::now());
    Ok(())
}
