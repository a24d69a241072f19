use crate::{Error, Result};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;
use tempfile::NamedTempFile;

/// Per-channel cutoff above which a pixel counts as background (exclusive).
pub const WHITE_THRESHOLD: u8 = 240;

/// A pixel is background when all three color channels exceed the threshold.
/// Alpha is ignored by the predicate.
pub fn is_background(pixel: &Rgba<u8>) -> bool {
    pixel[0] > WHITE_THRESHOLD && pixel[1] > WHITE_THRESHOLD && pixel[2] > WHITE_THRESHOLD
}

/// Rewrite every background pixel to transparent white (255, 255, 255, 0),
/// leaving all other pixels untouched. Returns the number of pixels rewritten.
pub fn strip_pixels(image: &mut RgbaImage) -> u64 {
    const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

    let mut stripped = 0u64;

    for pixel in image.pixels_mut() {
        if is_background(pixel) && *pixel != TRANSPARENT_WHITE {
            *pixel = TRANSPARENT_WHITE;
            stripped += 1;
        }
    }

    stripped
}

/// Force the image to RGBA (sources without an alpha channel get opaque
/// alpha = 255) and strip its background.
pub fn strip_image(image: DynamicImage) -> RgbaImage {
    let mut rgba = image.into_rgba8();
    strip_pixels(&mut rgba);
    rgba
}

/// Decode `input`, strip its background and encode the result as PNG to
/// `output`. The two paths may be equal (in-place overwrite).
///
/// The PNG is written to a temporary file next to `output` and renamed into
/// place once encoding succeeded, so a failed run never truncates the input
/// or leaves a partial output behind.
pub fn strip_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let mut img = image::open(input)?.into_rgba8();
    let (width, height) = img.dimensions();

    let stripped = strip_pixels(&mut img);
    log::debug!(
        "stripped {} of {} pixels in {}",
        stripped,
        u64::from(width) * u64::from(height),
        input.display()
    );

    let out_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(out_dir)?;
    img.write_to(tmp.as_file_mut(), ImageFormat::Png)?;
    tmp.persist(output)
        .map_err(|e| Error::Persist(e.to_string()))?;

    log::info!(
        "removed white background: {} -> {} ({}x{})",
        input.display(),
        output.display(),
        width,
        height
    );

    Ok(())
}
