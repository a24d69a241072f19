use anyhow::{Context, Result};
use background_stripper::strip_file;
use image::{Rgba, RgbaImage};
use std::{fs, path::PathBuf, time::Instant};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = PathBuf::from("./output");
    if !output_dir.exists() {
        fs::create_dir(&output_dir)?;
    }

    // Colored square on a white canvas.
    let img = RgbaImage::from_fn(256, 256, |x, y| {
        if (64..192).contains(&x) && (64..192).contains(&y) {
            Rgba([30, 90, 200, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });

    let input_path = output_dir.join("demo-input.png");
    img.save(&input_path)
        .with_context(|| input_path.to_string_lossy().to_string())?;
    log::info!("Saving input to: {:?}", input_path);

    let output_path = output_dir.join("demo-stripped.png");
    let strip_start = Instant::now();
    strip_file(&input_path, &output_path)?;
    log::info!("Strip background spent: {:?}", strip_start.elapsed());
    log::info!("Saving result to: {:?}", output_path);

    log::info!("Background stripping completed successfully!");

    Ok(())
}
