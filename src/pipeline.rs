use std::path::PathBuf;

use crate::{
    assets::{
        decode::load_base_image,
        font::{ResolvedFont, TextLayoutEngine},
    },
    config::ResourcePaths,
    encode::jpeg::write_jpeg,
    foundation::{
        core::{CanvasSize, ProgressLayout},
        error::YearbarResult,
    },
    progress::{clock::Clock, year::YearProgress},
    render::cpu::{Overlay, compose},
};

/// Which font the percentage text was drawn with.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontUsed {
    Requested { path: PathBuf, family: String },
    Fallback { path: PathBuf, reason: String },
}

/// Summary of a successful run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderReport {
    pub output: PathBuf,
    pub progress: YearProgress,
    pub percent: f64,
    /// The drawn label, e.g. `"42.37%"`.
    pub text: String,
    pub fill_width: u32,
    pub canvas: CanvasSize,
    pub font: FontUsed,
}

/// Render the current year's progress with the fixed status layout.
pub fn generate(paths: &ResourcePaths, clock: &impl Clock) -> YearbarResult<RenderReport> {
    generate_with_layout(paths, clock, &ProgressLayout::STATUS)
}

/// Render the current year's progress onto `paths.base_image` and write the
/// JPEG to `paths.output`.
///
/// A missing or corrupt base image and an unwritable output are errors. A font
/// that cannot be loaded only degrades the text to the built-in font.
#[tracing::instrument(skip_all, fields(output = %paths.output.display()))]
pub fn generate_with_layout(
    paths: &ResourcePaths,
    clock: &impl Clock,
    layout: &ProgressLayout,
) -> YearbarResult<RenderReport> {
    let now = clock.now();
    let progress = YearProgress::at(now);
    tracing::debug!(%now, %progress, "year progress computed");

    let base = load_base_image(&paths.base_image)?;
    if base.size != layout.canvas {
        tracing::warn!(
            path = %paths.base_image.display(),
            width = base.size.width,
            height = base.size.height,
            expected_width = layout.canvas.width,
            expected_height = layout.canvas.height,
            "base image size differs from the expected canvas"
        );
    }

    let mut engine = TextLayoutEngine::new();
    let resolved = engine.resolve(&paths.font);
    let text = progress.label();
    let shaped = engine.shape(&text, &resolved, layout.font_size_px, layout.color)?;

    let fill_width = progress.fill_width(layout.bar_max_width);
    let frame = compose(&base, &Overlay::new(layout, &shaped, fill_width))?;
    drop(base);

    write_jpeg(&frame, layout.jpeg_quality, &paths.output)?;

    tracing::info!("Generated: {}", paths.output.display());
    tracing::info!("Year Progress: {progress}%");

    let font = match resolved {
        ResolvedFont::Requested(f) => FontUsed::Requested {
            path: f.path,
            family: f.family,
        },
        ResolvedFont::Fallback { path, cause } => FontUsed::Fallback {
            path,
            reason: cause.to_string(),
        },
    };

    Ok(RenderReport {
        output: paths.output.clone(),
        progress,
        percent: progress.percent(),
        text,
        fill_width,
        canvas: frame.size,
        font,
    })
}
