use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use magicgrid_core::io::image_io::save_image;
use magicgrid_core::render::{GridSpec, OpacitySpec};
use magicgrid_core::session::{LoadOutcome, Session};
use magicgrid_core::source::SourceImage;

use super::{load_config, BoundsArgs};

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file
    pub file: PathBuf,

    /// Grid config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid spacing in pixels (overrides config)
    #[arg(short, long)]
    pub grid: Option<u32>,

    /// Image opacity, 0.0 to 1.0 (overrides config)
    #[arg(short = 'a', long)]
    pub opacity: Option<f32>,

    #[command(flatten)]
    pub bounds: BoundsArgs,

    /// Output file path
    #[arg(short, long, default_value = "grid.png")]
    pub output: PathBuf,
}

const RENDER_STEPS: u64 = 4;

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let grid = GridSpec::new(args.grid.unwrap_or(config.controls.grid_spacing))?;
    let opacity = OpacitySpec::new(args.opacity.unwrap_or(config.controls.opacity))?;
    let bounds = args.bounds.resolve(&config)?;

    crate::summary::print_render_summary(&args.file, &args.output, grid, opacity, &bounds);

    let pb = ProgressBar::new(RENDER_STEPS);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:12} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    pb.set_message("Decoding");
    let image = match SourceImage::open(&args.file) {
        Ok(image) => image,
        Err(e) => {
            pb.abandon();
            return Err(e).with_context(|| format!("Failed to load {}", args.file.display()));
        }
    };
    pb.inc(1);

    pb.set_message("Layers");
    let mut session = Session::new(grid, opacity);
    let ticket = session.begin_load();
    let size = match session.finish_load(ticket, Ok(image), bounds) {
        LoadOutcome::Displayed(size) => size,
        LoadOutcome::Stale | LoadOutcome::Ignored => {
            pb.abandon();
            bail!("{} is not a readable image", args.file.display());
        }
    };
    pb.inc(1);

    pb.set_message("Compositing");
    let Some(composite) = session.composite() else {
        pb.abandon();
        bail!("No layers to composite");
    };
    pb.inc(1);

    pb.set_message("Saving");
    save_image(&composite, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    pb.inc(1);
    pb.finish_and_clear();

    let (px_w, px_h) = size.pixel_dims();
    println!("Rendered {px_w}x{px_h} to {}", args.output.display());

    Ok(())
}
