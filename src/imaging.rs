use eframe::egui;
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AppError;
use crate::scene::{Background, Scene};

pub fn load_background(path: &Path) -> Result<Background, AppError> {
    let image = image::open(path).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Background {
        path: path.to_path_buf(),
        image,
    })
}

/// Flatten the background and every annotation, back to front, at the
/// background's pixel size.
pub fn render(scene: &Scene) -> Result<RgbaImage, AppError> {
    let background = scene.background().ok_or(AppError::NoBackground)?;
    let mut img = background.image.to_rgba8();
    for ann in scene.annotations() {
        fill_rect(&mut img, ann.rect(), ann.fill.to_rgba());
    }
    Ok(img)
}

/// Always PNG-encoded, whatever extension `path` carries.
pub fn save_png(scene: &Scene, path: &Path) -> Result<(), AppError> {
    let img = render(scene)?;
    let io_err = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|source| AppError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    out.flush().map_err(io_err)?;
    log::info!("exported {}x{} to {}", img.width(), img.height(), path.display());
    Ok(())
}

fn fill_rect(img: &mut RgbaImage, rect: egui::Rect, color: Rgba<u8>) {
    let (w, h) = (img.width(), img.height());
    let x0 = (rect.min.x.round().max(0.0) as u32).min(w);
    let y0 = (rect.min.y.round().max(0.0) as u32).min(h);
    let x1 = (rect.max.x.round().max(0.0) as u32).min(w);
    let y1 = (rect.max.y.round().max(0.0) as u32).min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}
