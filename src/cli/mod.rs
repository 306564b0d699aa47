use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ppmdraw")]
#[command(version)]
#[command(about = "Draw rectangles, circles and triangles into PPM images", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw a scene and export it
    Render {
        /// Scene file or builtin scene name
        #[arg(default_value = "demo")]
        scene: String,

        /// Output name; the format's extension is appended (defaults to the scene name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (ppm, png)
        #[arg(short, long, default_value = "ppm")]
        format: String,

        /// Override the scene's canvas width
        #[arg(long)]
        width: Option<usize>,

        /// Override the scene's canvas height
        #[arg(long)]
        height: Option<usize>,

        /// Abort on the first shape the canvas rejects
        #[arg(long)]
        strict: bool,
    },

    /// Print the palette a scene draws with
    Colors {
        /// Scene file or builtin scene name
        #[arg(default_value = "demo")]
        scene: String,
    },
}
