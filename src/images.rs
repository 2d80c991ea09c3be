// src/images.rs
// Resizes full-size covers into the width-bound JPEGs the page references.

use std::{error::Error, fs, path::Path};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::config::consts::{JPEG_QUALITY, TARGET_WIDTH};
use crate::file::{ensure_directory, list_jpgs};
use crate::progress::Progress;

/// Resize every `*.jpg` in `source_dir` into `target_dir` at TARGET_WIDTH,
/// keeping aspect ratio. A file that fails to decode or encode is logged
/// and skipped; the batch continues. Returns the number processed.
pub fn process_covers(
    source_dir: &Path,
    target_dir: &Path,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<usize, Box<dyn Error>> {
    ensure_directory(target_dir)?;
    let files = list_jpgs(source_dir)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }

    let mut done = 0usize;
    for name in &files {
        let src = source_dir.join(name);
        let dst = target_dir.join(name);
        match resize_one(&src, &dst) {
            Ok(()) => {
                done += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(name);
                }
            }
            Err(e) => {
                loge!("Images: {}: {}", name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name);
                }
            }
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Images: resized {} of {} files into {}", done, files.len(), target_dir.display());
    Ok(done)
}

fn resize_one(src: &Path, dst: &Path) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(src)?;
    let img = image::load_from_memory(&bytes)?;

    let (w, h) = (img.width(), img.height());
    let scaled = if w > TARGET_WIDTH {
        let new_h = ((h as f64) * (TARGET_WIDTH as f64) / (w as f64)).round() as u32;
        img.resize_exact(TARGET_WIDTH, new_h.max(1), FilterType::Lanczos3)
    } else {
        img
    };

    // Some sources carry alpha; JPEG cannot, so flatten to RGB first.
    let rgb = scaled.to_rgb8();
    let mut out = Vec::new();
    let enc = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    rgb.write_with_encoder(enc)?;
    fs::write(dst, out)?;
    Ok(())
}
