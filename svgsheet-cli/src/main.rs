use anyhow::{Result, bail};
use clap::Parser;
use log::{info, warn};
use svgsheet_cli::config::SvgSheetConfig;
use svgsheet_cli::io;
use svgsheet_cli::io::cli::Cli;
use svgsheet_cli::sheet_job::build_sheets;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            warn!("[MAIN] Falling back default config:\n{}", serde_json::to_string(&SvgSheetConfig::default())?);
            SvgSheetConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    config.apply_cli(&args);

    if config.sheets.is_empty() {
        bail!("nothing to build: provide SOURCES with --output, or sheets in a config file");
    }
    info!("[MAIN] Successfully parsed config: {config:?}");

    let reports = build_sheets(&config)?;

    for report in &reports {
        info!(
            "[MAIN] {}: {} icons, {}x{}, {} diagnostics",
            report.dest.display(),
            report.n_icons,
            report.width,
            report.height,
            report.diagnostics.len()
        );
    }
    Ok(())
}
