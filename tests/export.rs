use egui::{Color32, Pos2, Vec2};
use sketchpad::export::{encode_png, render_export};
use sketchpad::renderer::Renderer;
use sketchpad::{
    CommandLog, Drawable, EditorContext, Element, InputEvent, RecordingSurface, ScaledSurface,
    SketchpadConfig, Stroke, SurfaceOp,
};

fn log_with_stroke(width: f32) -> CommandLog {
    let mut stroke = Stroke::new(Pos2::new(10.0, 20.0), width, Color32::RED);
    stroke.extend(Pos2::new(50.0, 20.0));
    let mut log = CommandLog::new();
    log.commit(Drawable::Stroke(stroke));
    log
}

#[test]
fn test_export_scales_width_and_geometry() {
    let log = log_with_stroke(3.0);
    let mut recorder = RecordingSurface::new(Vec2::splat(1024.0));
    {
        let mut scaled = ScaledSurface::new(&mut recorder, 4.0);
        Renderer::compose(&mut scaled, &log);
    }

    assert_eq!(
        recorder.ops(),
        &[SurfaceOp::Stroke {
            points: vec![Pos2::new(40.0, 80.0), Pos2::new(200.0, 80.0)],
            width: 12.0,
            color: Color32::RED,
        }]
    );
}

#[test]
fn test_export_raster_paints_scaled_stroke() {
    let log = log_with_stroke(2.0);
    let image = render_export(&log, Vec2::splat(64.0), 4.0).unwrap();
    assert_eq!((image.width(), image.height()), (256, 256));

    // The stroke runs along y = 80 from x = 40 to x = 200 with width 8
    assert_eq!(image.get_pixel(120, 79).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(120, 82).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(120, 90).0[3], 0);
    assert_eq!(image.get_pixel(230, 80).0[3], 0);
}

#[test]
fn test_context_export_produces_png_artifact() {
    let mut context = EditorContext::new(SketchpadConfig::default());
    context.handle_input(InputEvent::PointerDown(Pos2::new(10.0, 10.0)));
    context.handle_input(InputEvent::PointerMove(Pos2::new(100.0, 100.0)));
    context.handle_input(InputEvent::PointerUp);

    let artifact = context.export().unwrap();
    assert_eq!(artifact.file_name, "sketchpad.png");
    assert_eq!((artifact.width, artifact.height), (1024, 1024));

    let decoded = image::load_from_memory(&artifact.png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (1024, 1024));
    // (55, 55) on the canvas lies on the diagonal stroke
    assert!(decoded.get_pixel(220, 220).0[3] > 0);
    assert_eq!(decoded.get_pixel(1000, 20).0[3], 0);
}

#[test]
fn test_export_ignores_cursor_preview() {
    let mut context = EditorContext::new(SketchpadConfig::default());
    context.handle_input(InputEvent::PointerEnter(Pos2::new(100.0, 100.0)));
    assert!(context.cursor().is_some());

    let artifact = context.export().unwrap();
    let decoded = image::load_from_memory(&artifact.png).unwrap().to_rgba8();
    assert!(decoded.pixels().all(|pixel| pixel.0[3] == 0));
}

#[test]
fn test_export_renders_sticker_glyph() {
    let mut log = CommandLog::new();
    log.commit(Drawable::Sticker(sketchpad::Sticker::new(
        Pos2::new(8.0, 40.0),
        "☕",
        24.0,
        Color32::BLACK,
    )));
    assert_eq!(log.committed()[0].element_type(), "sticker");

    let image = render_export(&log, Vec2::splat(64.0), 4.0).unwrap();
    assert!(image.pixels().any(|pixel| pixel.0[3] > 0));
    let png = encode_png(&image).unwrap();
    assert!(!png.is_empty());
}

#[test]
fn test_export_places_sticker_above_scaled_anchor() {
    let anchor = Pos2::new(100.0, 100.0);
    let size = 24.0;
    let scale = 4.0;

    for glyph in ["☕", "🍩", "A"] {
        let mut log = CommandLog::new();
        log.commit(Drawable::Sticker(sketchpad::Sticker::new(
            anchor,
            glyph,
            size,
            Color32::BLACK,
        )));
        let image = render_export(&log, Vec2::splat(256.0), scale).unwrap();

        let painted: Vec<(u32, u32)> = image
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[3] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!painted.is_empty(), "{glyph} painted nothing");

        // Bottom-left anchored em box, scaled about the origin
        let (min_x, max_x) = (anchor.x * scale, (anchor.x + size) * scale);
        let (min_y, max_y) = ((anchor.y - size) * scale, anchor.y * scale);
        for (x, y) in painted {
            let (x, y) = (x as f32, y as f32);
            assert!(
                (min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y),
                "{glyph} pixel ({x}, {y}) outside the sticker box"
            );
        }
    }
}
