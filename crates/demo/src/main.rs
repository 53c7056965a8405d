// File: crates/demo/src/main.rs
// Summary: Demo loads cyclist race times and writes the doping scatter chart as SVG, HTML and PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{theme, ChartRenderer, RenderOptions};
use tracing::info;

use peloton_demo::fetch::ReqwestClient;
use peloton_demo::input::load_records;

#[derive(Parser, Debug)]
#[command(name = "peloton-demo", about = "Render the doping-allegation scatter chart")]
struct Args {
    /// Dataset path (.json or .csv) or http(s) URL
    #[arg(default_value = "data/cyclist-data.json")]
    input: String,

    /// Directory receiving chart.svg, chart.html and chart.png
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset: light, dark or high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,

    /// Show the tooltip for this mark index before writing output
    #[arg(long)]
    hover: Option<usize>,

    /// Skip the Skia PNG raster
    #[arg(long)]
    no_png: bool,
}

fn main() -> Result<()> {
    // RUST_LOG takes precedence, fallback to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let records = load_records(&args.input, &ReqwestClient)?;
    info!(count = records.len(), "loaded records");

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let mut chart = ChartRenderer::new(opts).render_detached(&records).context("rendering chart")?;

    if let Some(index) = args.hover {
        let pointer = chart
            .mark_center(index)
            .with_context(|| format!("--hover {index}: only {} marks", chart.marks().len()))?;
        chart.hover(index, pointer)?;
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    write(&args.out_dir.join("chart.svg"), &chart.to_svg_markup())?;
    write(&args.out_dir.join("chart.html"), &chart.to_html_page())?;
    if !args.no_png {
        let png = args.out_dir.join("chart.png");
        scatter_render_skia::render_to_png(&chart, &png)?;
        info!(path = %png.display(), "wrote");
    }
    Ok(())
}

fn write(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote");
    Ok(())
}
