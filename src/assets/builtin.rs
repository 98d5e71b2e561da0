//! Built-in fallback font.
//!
//! A small segment-style vector font covering the digits, `.` and `%`, which is
//! everything a percentage label contains. Other characters advance the pen by a
//! digit width without drawing anything.

use kurbo::BezPath;

use super::font::{ShapedText, TextInk};
use crate::foundation::core::Rgba8;

// Proportions relative to the font size.
const GLYPH_HEIGHT: f64 = 0.72;
const DIGIT_WIDTH: f64 = 0.42;
const STROKE: f64 = 0.09;
const SPACING: f64 = 0.14;
const PERCENT_WIDTH: f64 = 0.56;

// Segment bits, a..g in the usual seven-segment order.
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | D | E | G,
    A | B | C | D | G,
    B | C | F | G,
    A | C | D | F | G,
    A | C | D | E | F | G,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

struct Metrics {
    h: f64,
    w: f64,
    t: f64,
}

/// Lay out `text` with the built-in font at `size_px`.
pub fn shape(text: &str, size_px: f32, color: Rgba8) -> ShapedText {
    let size = f64::from(size_px);
    let m = Metrics {
        h: GLYPH_HEIGHT * size,
        w: DIGIT_WIDTH * size,
        t: STROKE * size,
    };
    let spacing = SPACING * size;

    let mut path = BezPath::new();
    let mut pen = 0.0;
    let mut count = 0usize;
    for ch in text.chars() {
        let advance = match ch {
            '0'..='9' => {
                let bits = DIGITS[(ch as u8 - b'0') as usize];
                push_digit(&mut path, pen, bits, &m);
                m.w
            }
            '.' => {
                let dot = m.t * 1.4;
                push_rect(&mut path, pen, m.h - dot, pen + dot, m.h);
                dot
            }
            '%' => {
                push_percent(&mut path, pen, PERCENT_WIDTH * size, &m);
                PERCENT_WIDTH * size
            }
            _ => m.w,
        };
        pen += advance + spacing;
        count += 1;
    }
    let width = if count == 0 { 0.0 } else { pen - spacing };

    ShapedText {
        width,
        height: m.h,
        color,
        ink: TextInk::Outlines(path),
    }
}

fn push_digit(path: &mut BezPath, x: f64, bits: u8, m: &Metrics) {
    let (w, h, t) = (m.w, m.h, m.t);
    let mid = h / 2.0;
    let segments = [
        (A, (0.0, 0.0, w, t)),
        (B, (w - t, 0.0, w, mid)),
        (C, (w - t, mid, w, h)),
        (D, (0.0, h - t, w, h)),
        (E, (0.0, mid, t, h)),
        (F, (0.0, 0.0, t, mid)),
        (G, (0.0, mid - t / 2.0, w, mid + t / 2.0)),
    ];
    for (bit, (x0, y0, x1, y1)) in segments {
        if bits & bit != 0 {
            push_rect(path, x + x0, y0, x + x1, y1);
        }
    }
}

fn push_percent(path: &mut BezPath, x: f64, w: f64, m: &Metrics) {
    let dot = m.t * 2.0;
    push_rect(path, x, 0.0, x + dot, dot);
    push_rect(path, x + w - dot, m.h - dot, x + w, m.h);

    path.move_to((x + w - m.t * 1.2, 0.0));
    path.line_to((x + w, 0.0));
    path.line_to((x + m.t * 1.2, m.h));
    path.line_to((x, m.h));
    path.close_path();
}

fn push_rect(path: &mut BezPath, x0: f64, y0: f64, x1: f64, y1: f64) {
    path.move_to((x0, y0));
    path.line_to((x1, y0));
    path.line_to((x1, y1));
    path.line_to((x0, y1));
    path.close_path();
}
