use super::*;

const FIXTURE_FONT: &str = "tests/data/fonts/DejaVuSansMono-Bold.ttf";

#[test]
fn missing_font_is_font_load_error() {
    let mut engine = TextLayoutEngine::new();
    let err = engine
        .load_font(Path::new("target/no-such-dir/consolasb.ttf"))
        .unwrap_err();
    assert!(matches!(err, YearbarError::FontLoad { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn garbage_font_is_font_load_error() {
    let dir = PathBuf::from("target").join("unit_font_garbage");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.ttf");
    std::fs::write(&path, b"this is not a font").unwrap();

    let mut engine = TextLayoutEngine::new();
    let err = engine.load_font(&path).unwrap_err();
    assert!(matches!(err, YearbarError::FontLoad { .. }));
}

#[test]
fn resolve_falls_back_and_keeps_cause() {
    let mut engine = TextLayoutEngine::new();
    let path = Path::new("target/no-such-dir/consolasb.ttf");
    let resolved = engine.resolve(path);
    assert!(resolved.is_fallback());
    let ResolvedFont::Fallback { path: p, cause } = resolved else {
        unreachable!();
    };
    assert_eq!(p, path);
    assert!(cause.to_string().contains("consolasb.ttf"));
}

#[test]
fn fallback_shapes_to_outlines() {
    let mut engine = TextLayoutEngine::new();
    let resolved = engine.resolve(Path::new("target/no-such-dir/consolasb.ttf"));
    let shaped = engine
        .shape("42.37%", &resolved, 75.0, Rgba8::WHITE)
        .unwrap();
    assert!(matches!(shaped.ink, TextInk::Outlines(_)));
    assert!(shaped.width > 0.0);
    assert!(shaped.height > 0.0);
    assert_eq!(shaped.color, Rgba8::WHITE);
}

#[test]
fn shape_rejects_bad_sizes() {
    let mut engine = TextLayoutEngine::new();
    let resolved = engine.resolve(Path::new("target/no-such-dir/x.ttf"));
    assert!(engine.shape("1%", &resolved, 0.0, Rgba8::WHITE).is_err());
    assert!(engine.shape("1%", &resolved, f32::NAN, Rgba8::WHITE).is_err());
}

#[test]
fn fixture_font_shapes_to_glyphs() {
    let path = PathBuf::from(FIXTURE_FONT);

    let mut engine = TextLayoutEngine::new();
    let resolved = engine.resolve(&path);
    let ResolvedFont::Requested(font) = &resolved else {
        panic!("expected {} to load", path.display());
    };
    assert_eq!(font.family, "DejaVu Sans Mono");

    let shaped = engine.shape("42.37%", &resolved, 75.0, Rgba8::WHITE).unwrap();
    let TextInk::Glyphs { glyphs, font_size, .. } = &shaped.ink else {
        panic!("expected glyph ink");
    };
    assert_eq!(glyphs.len(), 6);
    assert_eq!(*font_size, 75.0);
    assert!(glyphs.windows(2).all(|w| w[0].x < w[1].x));
    assert!(shaped.width > 0.0 && shaped.height > 0.0);
}
