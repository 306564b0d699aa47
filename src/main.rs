use clap::Parser;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;

mod cli;

use cli::{Args, Command};
use ppmdraw::encoder::OutputFormat;
use ppmdraw::scene::Scene;

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn render(
    scene_arg: &str,
    output: Option<PathBuf>,
    format: &str,
    width: Option<usize>,
    height: Option<usize>,
    strict: bool,
) -> Result<()> {
    let format = OutputFormat::from_name(format)
        .with_context(|| format!("Unknown output format '{}' (expected ppm or png)", format))?;

    let mut scene = Scene::resolve(scene_arg)?;
    if let Some(width) = width {
        scene.width = width;
    }
    if let Some(height) = height {
        scene.height = height;
    }

    let (canvas, report) = scene.render(strict)?;

    let name = output.unwrap_or_else(|| PathBuf::from(&scene.name));
    let path = format.save(&canvas, &name)?;

    eprintln!("Drew {} of {} shapes", report.drawn, scene.shapes.len());
    for rejected in &report.rejected {
        eprintln!("  ✗ {} #{}: {}", rejected.shape, rejected.index, rejected.reason);
    }
    eprintln!("  ✓ {}", path.display());

    Ok(())
}

fn list_colors(scene_arg: &str) -> Result<()> {
    let scene = Scene::resolve(scene_arg)?;
    let palette = scene.palette()?;

    println!("Palette for scene '{}':", scene.name);
    println!("======================\n");
    for entry in palette.entries() {
        let marker = if entry.id == palette.background() { " (background)" } else { "" };
        println!(
            "  {:3}. {:<10} {:3} {:3} {:3}{}",
            entry.id, entry.name, entry.rgb[0], entry.rgb[1], entry.rgb[2], marker
        );
    }
    println!("\n  Total: {} colors", palette.entries().len());

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::debug!("ppmdraw version {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Render { scene, output, format, width, height, strict } => {
            render(&scene, output, &format, width, height, strict)
        }
        Command::Colors { scene } => list_colors(&scene),
    }
}
