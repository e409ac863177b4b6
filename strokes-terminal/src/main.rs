/// Strokes Terminal Demo - Line-drawn slide deck
///
/// Controls:
///   - Left / Right: Previous / next slide
///   - Mouse: Moves the pointer the line and curve slides follow
///   - Q/ESC: Quit
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use strokes_core::{Config, Slide};
use strokes_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(name = "strokes-terminal", about = "Line rasterizer slide deck in the terminal")]
struct Args {
    /// JSON config file (canvas size, colors, fractal depth, frustum)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Slide to start on (0-7)
    #[arg(short, long, default_value_t = 0)]
    slide: usize,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Write logs to this file (the screen is in raw mode)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let mut app = TerminalApp::new(config, args.fps)
        .context("failed to query terminal size")?
        .with_slide(Slide::from_index(args.slide));
    app.run()?;

    println!("Thank you for using the Strokes terminal renderer!");
    Ok(())
}
