use crate::{
    assets::{
        decode::BaseImage,
        font::{ShapedText, TextInk},
    },
    foundation::{
        core::{CanvasSize, Point, ProgressLayout, Rect, Rgba8},
        error::{YearbarError, YearbarResult},
    },
    render::composite::over_in_place,
};

/// Final composed pixels, opaque RGB8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb8 {
    pub size: CanvasSize,
    pub data: Vec<u8>,
}

/// Everything drawn on top of the base image.
#[derive(Clone, Debug)]
pub struct Overlay<'a> {
    pub text: &'a ShapedText,
    pub text_anchor: Point,
    /// Bar fill, already clipped to the layout's maximum width.
    pub bar: Option<(Rect, Rgba8)>,
}

impl<'a> Overlay<'a> {
    pub fn new(layout: &ProgressLayout, text: &'a ShapedText, fill_width: u32) -> Self {
        let bar = (fill_width > 0).then(|| (layout.bar_rect(fill_width), layout.color));
        Self {
            text,
            text_anchor: layout.text_anchor,
            bar,
        }
    }
}

/// Top-left corner that centers a `text` box on `anchor`.
pub fn text_origin(anchor: Point, text: &ShapedText) -> Point {
    Point::new(anchor.x - text.width / 2.0, anchor.y - text.height / 2.0)
}

/// Rasterize `overlay` and composite it over `base`.
pub fn compose(base: &BaseImage, overlay: &Overlay<'_>) -> YearbarResult<FrameRgb8> {
    let CanvasSize { width, height } = base.size;
    let width_u16: u16 = width
        .try_into()
        .map_err(|_| YearbarError::render("canvas width exceeds u16"))?;
    let height_u16: u16 = height
        .try_into()
        .map_err(|_| YearbarError::render("canvas height exceeds u16"))?;
    if base.rgba8.len() != width as usize * height as usize * 4 {
        return Err(YearbarError::render("base image byte length mismatch"));
    }

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    draw_text(&mut ctx, overlay.text, text_origin(overlay.text_anchor, overlay.text));
    if let Some((rect, color)) = overlay.bar {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        ctx.fill_rect(&rect_to_cpu(rect));
    }
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let mut rgba = base.rgba8.clone();
    over_in_place(&mut rgba, pixmap.data_as_u8_slice())?;

    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for px in rgba.chunks_exact(4) {
        data.extend_from_slice(&px[..3]);
    }

    tracing::debug!(width, height, "canvas composed");
    Ok(FrameRgb8 {
        size: base.size,
        data,
    })
}

fn draw_text(ctx: &mut vello_cpu::RenderContext, text: &ShapedText, origin: Point) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        text.color.r,
        text.color.g,
        text.color.b,
        text.color.a,
    ));

    match &text.ink {
        TextInk::Glyphs {
            font,
            font_size,
            glyphs,
        } => {
            let glyphs = glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font).font_size(*font_size).fill_glyphs(glyphs);
        }
        TextInk::Outlines(path) => ctx.fill_path(&bezpath_to_cpu(path)),
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
