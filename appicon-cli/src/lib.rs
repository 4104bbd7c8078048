//! Command-line front ends for appicon-core.
//!
//! `generate-icons <svg_file> <output_directory>` builds a full asset catalog;
//! `convert-icon` renders the fixed preview list into `generated-icons/`.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use appicon_core::generate::{fixed_file_name, generate_catalog, generate_fixed, APPICONSET_DIR};
use appicon_core::render::{default_rasterizer, RenderOptions};
use appicon_core::sizes::{CATALOG_TABLE, FIXED_SIZES};

/// Log filter variable, e.g. `APPICON_LOG=debug`.
pub const LOG_ENV: &str = "APPICON_LOG";

/// Extra font directories, `:` or `;` separated.
pub const FONT_DIRS_ENV: &str = "APPICON_FONT_DIRS";

pub const CATALOG_USAGE: &str = "Usage: generate-icons <svg_file> <output_directory>";

/// Builds an AppIcon.appiconset with its Contents.json from one SVG.
#[derive(Debug, Parser)]
#[command(name = "generate-icons", version, about)]
pub struct CatalogCli {
    /// Source SVG icon
    #[arg(allow_hyphen_values = true, value_hint = ValueHint::FilePath)]
    svg_file: PathBuf,

    /// Directory that receives AppIcon.appiconset
    #[arg(allow_hyphen_values = true, value_hint = ValueHint::DirPath)]
    output_directory: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

/// Renders the SVG at every preview and App Store size into one directory.
#[derive(Debug, Parser)]
#[command(name = "convert-icon", version, about)]
pub struct ConvertCli {
    /// Source SVG icon
    #[arg(long = "svg", default_value = "nopu_icon.svg", value_hint = ValueHint::FilePath)]
    svg: PathBuf,

    /// Output directory for the PNG files
    #[arg(long = "out-dir", default_value = "generated-icons", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Debug, Args)]
struct FontArgs {
    /// Load fonts for SVG text from this directory (repeatable)
    #[arg(long = "font-dir", value_hint = ValueHint::DirPath)]
    font_dirs: Vec<PathBuf>,

    /// Do not load the system fonts
    #[arg(long = "no-system-fonts", action = ArgAction::SetTrue)]
    no_system_fonts: bool,
}

/// Entry point of `generate-icons`. Returns the process exit status.
pub fn run_generate_icons() -> Result<i32> {
    let cli = match CatalogCli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(0);
        }
        Err(_) => {
            println!("{CATALOG_USAGE}");
            return Ok(1);
        }
    };

    init_logging();
    let stdout = io::stdout();
    run_catalog(&cli, stdout.lock())
}

/// Entry point of `convert-icon`.
pub fn run_convert_icon() -> Result<()> {
    let cli = ConvertCli::parse();

    init_logging();
    let stdout = io::stdout();
    run_convert(&cli, stdout.lock())
}

/// Install a stderr subscriber filtered by `APPICON_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_catalog(cli: &CatalogCli, mut out: impl Write) -> Result<i32> {
    if !cli.svg_file.exists() {
        writeln!(out, "Error: SVG file '{}' not found", cli.svg_file.display())?;
        return Ok(1);
    }

    let rasterizer = default_rasterizer(&render_options(&cli.fonts));
    let report = generate_catalog(
        &cli.svg_file,
        &cli.output_directory,
        CATALOG_TABLE,
        rasterizer.as_ref(),
        &mut out,
    )?;

    if !report.failed.is_empty() {
        tracing::warn!(failed = report.failed.len(), "some icons were not generated");
    }

    writeln!(out)?;
    writeln!(out, "Icon set generated in: {}", report.iconset_dir.display())?;
    writeln!(
        out,
        "Copy the {APPICONSET_DIR} folder to your Xcode project's Assets.xcassets"
    )?;
    Ok(0)
}

fn run_convert(cli: &ConvertCli, mut out: impl Write) -> Result<()> {
    let rasterizer = default_rasterizer(&render_options(&cli.fonts));
    generate_fixed(
        &cli.svg,
        &cli.out_dir,
        FIXED_SIZES,
        rasterizer.as_ref(),
        &mut out,
    )?;

    writeln!(out)?;
    writeln!(out, "All icon sizes generated successfully!")?;
    writeln!(
        out,
        "Check the \"{}\" folder for all generated PNG files",
        cli.out_dir.display()
    )?;
    if let Some(largest) = FIXED_SIZES.first() {
        writeln!(out, "To copy to Xcode project:")?;
        writeln!(
            out,
            "   cp {} ../nopu/Assets.xcassets/{APPICONSET_DIR}/",
            cli.out_dir.join(fixed_file_name(largest)).display()
        )?;
    }
    Ok(())
}

fn render_options(args: &FontArgs) -> RenderOptions {
    let mut font_dirs = args.font_dirs.clone();
    font_dirs.extend(font_dirs_from_env());

    RenderOptions {
        load_system_fonts: !args.no_system_fonts,
        font_dirs,
    }
}

fn font_dirs_from_env() -> Vec<PathBuf> {
    let Ok(raw) = env::var(FONT_DIRS_ENV) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = raw
        .split([':', ';'])
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .filter(|p| p.exists())
        .collect();

    dirs.sort();
    dirs.dedup();
    dirs
}
