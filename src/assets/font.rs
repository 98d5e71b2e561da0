use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    assets::builtin,
    foundation::{
        core::Rgba8,
        error::{YearbarError, YearbarResult},
    },
};

/// A font file that parsed and registered successfully.
#[derive(Clone)]
pub struct LoadedFont {
    pub path: PathBuf,
    /// Primary family name reported by the font data.
    pub family: String,
    pub bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("path", &self.path)
            .field("family", &self.family)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Outcome of resolving the configured font.
///
/// A load failure is not an error for the run; it selects the built-in font and
/// keeps the cause so callers can report it.
#[derive(Debug)]
pub enum ResolvedFont {
    Requested(LoadedFont),
    Fallback {
        path: PathBuf,
        cause: YearbarError,
    },
}

impl ResolvedFont {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A glyph positioned relative to the top-left of its text box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Drawable ink for one line of text.
#[derive(Clone, Debug)]
pub enum TextInk {
    /// Glyph outlines taken from a loaded font.
    Glyphs {
        font: vello_cpu::peniko::FontData,
        font_size: f32,
        glyphs: Vec<PositionedGlyph>,
    },
    /// Pre-built outlines from the built-in font.
    Outlines(kurbo::BezPath),
}

/// Shaped text with its layout box size, ready to be placed on a canvas.
#[derive(Clone, Debug)]
pub struct ShapedText {
    pub width: f64,
    pub height: f64,
    pub color: Rgba8,
    pub ink: TextInk,
}

/// Owns the Parley contexts used to register fonts and shape text.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

/// RGBA8 brush carried through Parley layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrushRgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Read and register the font at `path`.
    ///
    /// Every failure is reported as [`YearbarError::FontLoad`].
    pub fn load_font(&mut self, path: &Path) -> YearbarResult<LoadedFont> {
        let bytes = std::fs::read(path).map_err(|e| YearbarError::font_load(path, e))?;
        let family = self.register(&bytes).map_err(|reason| YearbarError::font_load(path, reason))?;
        Ok(LoadedFont {
            path: path.to_path_buf(),
            family,
            bytes: Arc::new(bytes),
        })
    }

    /// Load the font at `path`, or select the built-in font if that fails.
    pub fn resolve(&mut self, path: &Path) -> ResolvedFont {
        match self.load_font(path) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), family = %font.family, "font loaded");
                ResolvedFont::Requested(font)
            }
            Err(cause) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %cause,
                    "Could not load font from {}, using default",
                    path.display()
                );
                ResolvedFont::Fallback {
                    path: path.to_path_buf(),
                    cause,
                }
            }
        }
    }

    fn register(&mut self, bytes: &[u8]) -> Result<String, &'static str> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or("no font families found in font data")?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or("registered font family has no name")?;
        Ok(name.to_string())
    }

    /// Shape a single line of `text` with whichever font `resolved` selected.
    pub fn shape(
        &mut self,
        text: &str,
        resolved: &ResolvedFont,
        size_px: f32,
        color: Rgba8,
    ) -> YearbarResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(YearbarError::render("text size_px must be finite and > 0"));
        }
        match resolved {
            ResolvedFont::Requested(font) => self.shape_with_font(text, font, size_px, color),
            ResolvedFont::Fallback { .. } => Ok(builtin::shape(text, size_px, color)),
        }
    }

    fn shape_with_font(
        &mut self,
        text: &str,
        font: &LoadedFont,
        size_px: f32,
        color: Rgba8,
    ) -> YearbarResult<ShapedText> {
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        let mut run_size = size_px;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                run_size = run.run().font_size();
                glyphs.extend(run.positioned_glyphs().map(|g| PositionedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }

        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            0,
        );

        Ok(ShapedText {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
            color,
            ink: TextInk::Glyphs {
                font: data,
                font_size: run_size,
                glyphs,
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
