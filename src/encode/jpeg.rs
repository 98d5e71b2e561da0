use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{YearbarError, YearbarResult},
    render::cpu::FrameRgb8,
};

/// Encode `frame` as a baseline JPEG at `quality` (clamped to 1..=100).
pub fn encode_jpeg(frame: &FrameRgb8, quality: u8) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context as _;

    let expected = frame.size.width as usize * frame.size.height as usize * 3;
    if frame.data.len() != expected {
        anyhow::bail!(
            "rgb8 buffer length {} does not match {}x{} frame (expected {expected})",
            frame.data.len(),
            frame.size.width,
            frame.size.height
        );
    }

    let mut buf = Vec::new();
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    encoder
        .encode(
            &frame.data,
            frame.size.width,
            frame.size.height,
            image::ExtendedColorType::Rgb8,
        )
        .context("encode jpeg")?;
    Ok(buf)
}

/// Encode `frame` and replace `out_path` with the result.
///
/// The bytes go to a sibling temp file first and are renamed into place, so a
/// failed run never leaves a truncated file at `out_path`.
pub fn write_jpeg(frame: &FrameRgb8, quality: u8, out_path: &Path) -> YearbarResult<()> {
    let bytes =
        encode_jpeg(frame, quality).map_err(|e| YearbarError::write(out_path, format!("{e:#}")))?;

    let tmp = temp_sibling(out_path);
    if let Err(e) = std::fs::write(&tmp, &bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(YearbarError::write(out_path, e));
    }
    if let Err(e) = std::fs::rename(&tmp, out_path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(YearbarError::write(out_path, e));
    }

    tracing::debug!(path = %out_path.display(), bytes = bytes.len(), "jpeg written");
    Ok(())
}

fn temp_sibling(out_path: &Path) -> PathBuf {
    let name = out_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    out_path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jpeg.rs"]
mod tests;
