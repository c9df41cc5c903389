use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use magicgrid_core::source::SourceImage;

use super::{load_config, BoundsArgs};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Grid config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub bounds: BoundsArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let image = SourceImage::open(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let bounds = args.bounds.resolve(&config)?;
    let size = bounds.fit(image.width() as f64, image.height() as f64);
    let (px_w, px_h) = size.pixel_dims();

    println!("File:        {}", args.file.display());
    println!("Type:        {}", image.media_type());
    println!("Natural:     {}x{}", image.width(), image.height());
    println!("Bounds:      {:.0}x{:.0}", bounds.max_width, bounds.max_height);
    println!("Display:     {:.2}x{:.2} ({px_w}x{px_h} px)", size.width, size.height);

    let scale = size.width / image.width() as f64;
    if scale < 1.0 {
        println!("Scale:       {:.1}%", scale * 100.0);
    } else {
        println!("Scale:       100% (fits)");
    }

    Ok(())
}
