//! Yearbar renders how much of the current calendar year has elapsed onto a
//! fixed base image, as a percentage label and a proportional progress bar, and
//! writes the result as a JPEG.
//!
//! One run is a single linear pass:
//!
//! 1. **Progress**: read a [`Clock`] and compute [`YearProgress`] (hundredths of a percent).
//! 2. **Load**: decode the base image (fatal on failure) and resolve the font
//!    (falls back to a built-in font on failure, see [`ResolvedFont`]).
//! 3. **Compose**: draw the centered label and the bar on the CPU rasterizer.
//! 4. **Encode**: write a quality-95 JPEG atomically over the output path.
//!
//! All geometry and colors are fixed ([`ProgressLayout::STATUS`]); only resource
//! paths ([`ResourcePaths`]) and the clock are injectable.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod encode;
mod foundation;
mod pipeline;
mod progress;
mod render;

pub use assets::decode::{BaseImage, decode_base_image, load_base_image};
pub use assets::font::{
    LoadedFont, PositionedGlyph, ResolvedFont, ShapedText, TextInk, TextLayoutEngine,
};
pub use config::{BASE_IMAGE_FILE, FONT_FILE, OUTPUT_FILE, ResourcePaths, install_dir};
pub use encode::jpeg::{encode_jpeg, write_jpeg};
pub use foundation::core::{CanvasSize, Point, ProgressLayout, Rect, Rgba8};
pub use foundation::error::{YearbarError, YearbarResult};
pub use pipeline::{FontUsed, RenderReport, generate, generate_with_layout};
pub use progress::clock::{Clock, FixedClock, SystemClock, parse_local_timestamp};
pub use progress::year::{YearProgress, year_bounds};
pub use render::cpu::{FrameRgb8, Overlay, compose, text_origin};
