pub use kurbo::{Point, Rect};

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Pixel size of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Fixed placement of the percentage text and the progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressLayout {
    /// Size the base image is expected to have.
    pub canvas: CanvasSize,
    /// Center of the percentage text (middle/middle anchor).
    pub text_anchor: Point,
    pub font_size_px: f32,
    /// Top-left corner of the bar fill.
    pub bar_origin: Point,
    pub bar_max_width: u32,
    pub bar_height: u32,
    pub color: Rgba8,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
}

impl ProgressLayout {
    pub const STATUS: Self = Self {
        canvas: CanvasSize {
            width: 720,
            height: 1278,
        },
        text_anchor: Point::new(360.0, 700.0),
        font_size_px: 75.0,
        bar_origin: Point::new(81.0, 860.0),
        bar_max_width: 558,
        bar_height: 30,
        color: Rgba8::WHITE,
        jpeg_quality: 95,
    };

    /// Rectangle covered by a bar fill of `fill_width` pixels.
    pub fn bar_rect(&self, fill_width: u32) -> Rect {
        let w = fill_width.min(self.bar_max_width);
        Rect::new(
            self.bar_origin.x,
            self.bar_origin.y,
            self.bar_origin.x + f64::from(w),
            self.bar_origin.y + f64::from(self.bar_height),
        )
    }
}

impl Default for ProgressLayout {
    fn default() -> Self {
        Self::STATUS
    }
}
