use anyhow::Context;
use cgmath::Vector2;
use image::{Rgb, RgbImage};
use ndarray::Array2;
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Pixels per grid cell in velocity plots.
const CELL: u32 = 4;

/// Write `x` as a grayscale frame, one pixel per cell, `0..=255` mapped to luminance.
pub fn save_monochrome(prefix: &str, index: usize, x: &Array2<f64>) -> anyhow::Result<()> {
    let shape = x.dim();

    let mut img = RgbImage::new(shape.0 as u32, shape.1 as u32);

    for i in 0..shape.0 {
        for j in 0..shape.1 {
            let l = x[[i, j]].max(0.0).min(255.0) as u8;
            img.put_pixel(i as u32, j as u32, Rgb([l, l, l]));
        }
    }

    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}

/// Draw a line segment of length `scale * uv` every `step` cells.
///
/// Vectors with both components below 0.1 are skipped.
pub fn save_uv(
    prefix: &str,
    index: usize,
    uv: &Array2<Vector2<f64>>,
    step: usize,
    scale: f64,
) -> anyhow::Result<()> {
    let (w, h) = uv.dim();

    let mut pixmap = Pixmap::new(w as u32 * CELL, h as u32 * CELL).context("empty canvas")?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let mut pb = PathBuilder::new();
    for i in (0..w).step_by(step.max(1)) {
        for j in (0..h).step_by(step.max(1)) {
            let v = uv[[i, j]];
            if v.x.abs() < 0.1 && v.y.abs() <= 0.1 {
                continue;
            }

            let x = (i as u32 * CELL) as f32;
            let y = (j as u32 * CELL) as f32;
            pb.move_to(x, y);
            pb.line_to(x + (v.x * scale) as f32, y + (v.y * scale) as f32);
        }
    }

    let path = format!("out/{}_uv_{:06}.png", prefix, index);

    if let Some(lines) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };

        pixmap.stroke_path(&lines, &paint, &stroke, Transform::identity(), None);
    }

    pixmap
        .save_png(&path)
        .with_context(|| format!("writing {}", path))?;

    Ok(())
}
