use super::*;
use crate::assets::builtin;

fn solid_base(width: u32, height: u32, rgb: [u8; 3]) -> BaseImage {
    let mut rgba8 = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width * height {
        rgba8.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    BaseImage {
        size: CanvasSize { width, height },
        rgba8,
    }
}

fn px(frame: &FrameRgb8, x: u32, y: u32) -> [u8; 3] {
    let i = (y as usize * frame.size.width as usize + x as usize) * 3;
    [frame.data[i], frame.data[i + 1], frame.data[i + 2]]
}

#[test]
fn text_origin_centers_the_box() {
    let text = builtin::shape("50.00%", 75.0, Rgba8::WHITE);
    let o = text_origin(Point::new(360.0, 700.0), &text);
    assert!((o.x + text.width / 2.0 - 360.0).abs() < 1e-9);
    assert!((o.y + text.height / 2.0 - 700.0).abs() < 1e-9);
}

#[test]
fn bar_fill_covers_exactly_fill_width() {
    let layout = ProgressLayout::STATUS;
    let base = solid_base(720, 1278, [0, 0, 0]);
    let text = builtin::shape("50.00%", layout.font_size_px, layout.color);
    let overlay = Overlay::new(&layout, &text, 279);

    let frame = compose(&base, &overlay).unwrap();
    assert_eq!(frame.size, base.size);
    assert_eq!(frame.data.len(), 720 * 1278 * 3);

    let (x0, y0) = (81, 860);
    assert_eq!(px(&frame, x0, y0), [255, 255, 255]);
    assert_eq!(px(&frame, x0 + 278, y0 + 29), [255, 255, 255]);
    assert_eq!(px(&frame, x0 + 279, y0 + 15), [0, 0, 0]);
    assert_eq!(px(&frame, x0 - 1, y0 + 15), [0, 0, 0]);
    assert_eq!(px(&frame, x0 + 100, y0 + 30), [0, 0, 0]);
    assert_eq!(px(&frame, 5, 5), [0, 0, 0]);
}

#[test]
fn zero_fill_draws_no_bar() {
    let layout = ProgressLayout::STATUS;
    let base = solid_base(720, 1278, [10, 20, 30]);
    let text = builtin::shape("0.00%", layout.font_size_px, layout.color);
    let overlay = Overlay::new(&layout, &text, 0);
    assert!(overlay.bar.is_none());

    let frame = compose(&base, &overlay).unwrap();
    assert_eq!(px(&frame, 81, 860), [10, 20, 30]);
    assert_eq!(px(&frame, 81 + 200, 875), [10, 20, 30]);
}

#[test]
fn text_is_drawn_around_the_anchor() {
    let layout = ProgressLayout::STATUS;
    let base = solid_base(720, 1278, [0, 0, 0]);
    let text = builtin::shape("88.88%", layout.font_size_px, layout.color);
    let overlay = Overlay::new(&layout, &text, 0);
    let frame = compose(&base, &overlay).unwrap();

    let o = text_origin(layout.text_anchor, &text);
    let mut lit = 0;
    for y in (o.y as u32)..((o.y + text.height) as u32) {
        for x in (o.x as u32)..((o.x + text.width) as u32) {
            if px(&frame, x, y)[0] > 200 {
                lit += 1;
            }
        }
    }
    assert!(lit > 500, "only {lit} text pixels lit");

    // nothing above the text box
    let above = (o.y as u32).saturating_sub(4);
    for x in 0..720 {
        assert_eq!(px(&frame, x, above), [0, 0, 0]);
    }
}

#[test]
fn same_inputs_compose_identically() {
    let layout = ProgressLayout::STATUS;
    let base = solid_base(720, 1278, [40, 40, 40]);
    let text = builtin::shape("42.37%", layout.font_size_px, layout.color);
    let overlay = Overlay::new(&layout, &text, 236);
    let a = compose(&base, &overlay).unwrap();
    let b = compose(&base, &overlay).unwrap();
    assert_eq!(a, b);
}

#[test]
fn mismatched_base_buffer_is_rejected() {
    let layout = ProgressLayout::STATUS;
    let mut base = solid_base(8, 8, [0, 0, 0]);
    base.rgba8.truncate(10);
    let text = builtin::shape("1.00%", 4.0, layout.color);
    let overlay = Overlay::new(&layout, &text, 0);
    assert!(matches!(
        compose(&base, &overlay),
        Err(YearbarError::Render(_))
    ));
}

#[test]
fn oversized_canvas_is_rejected() {
    let base = BaseImage {
        size: CanvasSize {
            width: 70_000,
            height: 1,
        },
        rgba8: Vec::new(),
    };
    let layout = ProgressLayout::STATUS;
    let text = builtin::shape("1.00%", 4.0, layout.color);
    let overlay = Overlay::new(&layout, &text, 0);
    assert!(compose(&base, &overlay).is_err());
}
