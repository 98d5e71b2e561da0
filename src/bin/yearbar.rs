use std::{io::IsTerminal as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render the current year's progress onto the status image.
#[derive(Parser, Debug)]
#[command(name = "yearbar", version)]
struct Cli {
    /// Directory holding `img_base.png` and `consolasb.ttf` and receiving
    /// `final_status.jpg` (defaults to the executable's directory).
    #[arg(long)]
    asset_dir: Option<PathBuf>,

    /// Base image path (overrides the asset directory).
    #[arg(long)]
    base_image: Option<PathBuf>,

    /// Font path (overrides the asset directory).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output JPEG path (overrides the asset directory).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render for this local time instead of now (`YYYY-MM-DDTHH:MM:SS`).
    #[arg(long)]
    at: Option<String>,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut paths = match &cli.asset_dir {
        Some(dir) => yearbar::ResourcePaths::in_dir(dir),
        None => yearbar::ResourcePaths::install_default(),
    };
    if let Some(p) = cli.base_image {
        paths = paths.with_base_image(p);
    }
    if let Some(p) = cli.font {
        paths = paths.with_font(p);
    }
    if let Some(p) = cli.out {
        paths = paths.with_output(p);
    }

    let report = match cli.at.as_deref() {
        Some(at) => {
            let clock = yearbar::FixedClock(yearbar::parse_local_timestamp(at)?);
            yearbar::generate(&paths, &clock)
        }
        None => yearbar::generate(&paths, &yearbar::SystemClock),
    }
    .with_context(|| format!("generate '{}'", paths.output.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
        println!("{json}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
