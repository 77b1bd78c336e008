//! Integration tests for label rendering.
//!
//! Swatch and banner colors are sampled away from the border and the text.
//! Text regions are compared against the same text drawn alone on a blank
//! canvas. All renders use the bundled font, which keeps the tests
//! independent of the fonts installed on the machine.

use image::RgbImage;
use label_core::render::fill_rect;
use label_core::{
    encode_png, gradient_row, render_form_to_png, save_png, ColorChoice, ColorEntry, FontSet,
    FormSubmission, Gauge, LabelFields, Layout, Material, Palette, Renderer, Rgb, Status,
};
use pretty_assertions::assert_eq;

/// Inside the swatch, clear of the 5px border.
const SWATCH_SAMPLES: [(u32, u32); 4] = [(225, 291), (10, 30), (440, 555), (300, 100)];

/// Inside the banner, right of any status text.
const BANNER_SAMPLE: (u32, u32) = (1640, 550);

fn renderer() -> Renderer {
    Renderer::new(Palette::standard(), FontSet::bundled().unwrap(), Layout::standard())
}

fn label(color: ColorChoice, status: Status) -> LabelFields {
    LabelFields::new(color, Material::Galvalume, Gauge::Ga24, status)
}

fn at(canvas: &RgbImage, (x, y): (u32, u32)) -> Rgb {
    Rgb::from(*canvas.get_pixel(x, y))
}

fn count_in(
    canvas: &RgbImage,
    x: std::ops::Range<u32>,
    y: std::ops::Range<u32>,
    pred: impl Fn(Rgb) -> bool,
) -> usize {
    y.flat_map(|py| x.clone().map(move |px| (px, py)))
        .filter(|&p| pred(at(canvas, p)))
        .count()
}

/// Whether two canvases agree on every pixel of the region.
fn same_region(
    actual: &RgbImage,
    expected: &RgbImage,
    x: std::ops::Range<u32>,
    y: std::ops::Range<u32>,
) -> bool {
    y.flat_map(|py| x.clone().map(move |px| (px, py)))
        .all(|p| at(actual, p) == at(expected, p))
}

/// A blank canvas with only `text` drawn into the given slot.
fn text_alone(layout: &Layout, slot: label_core::TextSlot, text: &str) -> RgbImage {
    let mut canvas =
        RgbImage::from_pixel(layout.canvas_width, layout.canvas_height, Rgb::WHITE.to_pixel());
    FontSet::bundled().unwrap().draw_text_bold(
        &mut canvas,
        slot.x,
        slot.y,
        slot.size,
        text,
        Rgb::BLACK,
        slot.bold,
    );
    canvas
}

/// A blank canvas with only the banner and its text.
fn banner_alone(layout: &Layout, color: Rgb, text: &str) -> RgbImage {
    let mut canvas =
        RgbImage::from_pixel(layout.canvas_width, layout.canvas_height, Rgb::WHITE.to_pixel());
    fill_rect(&mut canvas, layout.banner, color);
    let slot = layout.status;
    FontSet::bundled().unwrap().draw_text_bold(
        &mut canvas,
        slot.x,
        slot.y,
        slot.size,
        text,
        Rgb::WHITE,
        slot.bold,
    );
    canvas
}

fn assert_close(actual: Rgb, expected: Rgb, tolerance: i32) {
    let diff = |a: u8, b: u8| (a as i32 - b as i32).abs();
    assert!(
        diff(actual.0, expected.0) <= tolerance
            && diff(actual.1, expected.1) <= tolerance
            && diff(actual.2, expected.2) <= tolerance,
        "expected {} within {}, got {}",
        expected,
        tolerance,
        actual
    );
}

// ==================== Swatch ====================

#[test]
fn test_every_flat_color_fills_swatch() {
    let r = renderer();
    let palette = Palette::standard();
    let mut checked = 0;

    for row in palette.entries() {
        let ColorEntry::Flat(rgb) = row.entry else {
            continue;
        };
        let canvas = r.render(&label(ColorChoice::named(&row.name), Status::Open));
        for sample in SWATCH_SAMPLES {
            assert_eq!(at(&canvas, sample), rgb, "{} at {:?}", row.name, sample);
        }
        checked += 1;
    }

    assert_eq!(checked, 23);
}

#[test]
fn test_every_gradient_color_peaks_at_middle() {
    let r = renderer();
    let layout = Layout::standard();
    let top = layout.swatch.y0 as u32;
    let (_, height) = layout.swatch_size();
    let palette = Palette::standard();
    let mut checked = 0;

    for row in palette.entries() {
        let ColorEntry::Gradient(stops) = row.entry else {
            continue;
        };
        let canvas = r.render(&label(ColorChoice::named(&row.name), Status::Open));

        assert_close(at(&canvas, (225, top + height / 2)), stops.middle(), 1);
        assert_eq!(gradient_row(&stops, 0, height), stops.start());

        // One interpolation step is the largest channel delta over half the rows
        let last = gradient_row(&stops, height - 1, height);
        let step = stops
            .stops
            .windows(2)
            .flat_map(|w| {
                [
                    (w[0].0 as i32 - w[1].0 as i32).abs(),
                    (w[0].1 as i32 - w[1].1 as i32).abs(),
                    (w[0].2 as i32 - w[1].2 as i32).abs(),
                ]
            })
            .max()
            .unwrap_or(0)
            / (height as i32 / 2)
            + 1;
        assert_close(last, stops.end(), step);

        // Scanlines clear of the border match the routine
        for scanline in [5, 100, 274, 276, 540] {
            assert_eq!(
                at(&canvas, (225, top + scanline)),
                gradient_row(&stops, scanline, height),
                "{} scanline {}",
                row.name,
                scanline
            );
        }
        checked += 1;
    }

    assert_eq!(checked, 3);
}

#[test]
fn test_custom_color_swatch_and_title() {
    let fields = label(ColorChoice::custom(Rgb(255, 0, 0), "Flame Red"), Status::Open);
    let canvas = renderer().render(&fields);
    for sample in SWATCH_SAMPLES {
        assert_eq!(at(&canvas, sample), Rgb(255, 0, 0));
    }
    assert_eq!(fields.title_text(), "Flame Red");
}

#[test]
fn test_unknown_color_leaves_swatch_white_with_border() {
    let canvas = renderer().render(&label(ColorChoice::named("Plaid"), Status::Open));
    for sample in SWATCH_SAMPLES {
        assert_eq!(at(&canvas, sample), Rgb::WHITE);
    }
    assert_eq!(at(&canvas, (2, 291)), Rgb::BLACK);
    assert_eq!(at(&canvas, (447, 291)), Rgb::BLACK);
    assert_eq!(at(&canvas, (225, 18)), Rgb::BLACK);
    assert_eq!(at(&canvas, (225, 564)), Rgb::BLACK);
}

#[test]
fn test_mill_finish_image_fills_swatch() {
    let photo = RgbImage::from_pixel(40, 30, image::Rgb([0, 0, 255]));
    let bytes = encode_png(&photo).unwrap();
    let fields = label(ColorChoice::mill_finish(Some(bytes)), Status::Open);

    let canvas = renderer().render(&fields);
    for sample in SWATCH_SAMPLES {
        assert_close(at(&canvas, sample), Rgb(0, 0, 255), 1);
    }
    assert_eq!(fields.title_text(), "Mill Finish");
}

#[test]
fn test_mill_finish_bad_or_missing_image_is_blank() {
    let r = renderer();
    let broken = r.render(&label(
        ColorChoice::mill_finish(Some(b"definitely not a png".to_vec())),
        Status::Open,
    ));
    let missing = r.render(&label(ColorChoice::mill_finish(None), Status::Open));

    for sample in SWATCH_SAMPLES {
        assert_eq!(at(&broken, sample), Rgb::WHITE);
        assert_eq!(at(&missing, sample), Rgb::WHITE);
    }
    assert_eq!(at(&broken, (2, 291)), Rgb::BLACK);
}

// ==================== Text and banner ====================

#[test]
fn test_title_and_material_text_are_drawn() {
    let canvas = renderer().render(&label(ColorChoice::named("Regal Blue"), Status::Open));
    let dark = |c: Rgb| c.0 < 64 && c.1 < 64 && c.2 < 64;

    assert!(count_in(&canvas, 459..1650, 36..300, dark) > 1000);
    assert!(count_in(&canvas, 459..1650, 346..450, dark) > 500);
    // Nothing between the top of the canvas and the bold title offset
    assert_eq!(count_in(&canvas, 459..1650, 0..20, dark), 0);
}

// Right of the swatch border, above the divider.
const TITLE_COLUMNS: std::ops::Range<u32> = 452..1650;
const TITLE_ROWS: std::ops::Range<u32> = 17..334;
// Between the divider and the banner.
const MATERIAL_ROWS: std::ops::Range<u32> = 339..456;
const BANNER_COLUMNS: std::ops::Range<u32> = 459..1650;
const BANNER_ROWS: std::ops::Range<u32> = 456..562;

#[test]
fn test_title_region_shows_title_text() {
    let layout = Layout::standard();
    let r = renderer();
    let cases = [
        (ColorChoice::named("Regal Blue"), "Regal Blue"),
        (ColorChoice::custom(Rgb(255, 0, 0), "Flame Red"), "Flame Red"),
        (ColorChoice::custom(Rgb(255, 0, 0), ""), "Unknown"),
        (ColorChoice::mill_finish(None), "Mill Finish"),
    ];

    for (color, title) in cases {
        let canvas = r.render(&label(color, Status::Open));
        let expected = text_alone(&layout, layout.title, title);
        assert!(
            same_region(&canvas, &expected, TITLE_COLUMNS, TITLE_ROWS),
            "title region should read '{}'",
            title
        );
    }

    // Different text in the same slot does not match
    let canvas = r.render(&label(ColorChoice::named("Regal Blue"), Status::Open));
    let other = text_alone(&layout, layout.title, "24ga Galvalume");
    assert!(!same_region(&canvas, &other, TITLE_COLUMNS, TITLE_ROWS));
}

#[test]
fn test_material_region_shows_gauge_and_material() {
    let layout = Layout::standard();
    let fields = LabelFields::new(
        ColorChoice::named("Almond"),
        Material::Copper,
        Gauge::Thou032,
        Status::Open,
    );
    let canvas = renderer().render(&fields);

    let expected = text_alone(&layout, layout.material, ".032 Copper");
    assert!(same_region(&canvas, &expected, TITLE_COLUMNS, MATERIAL_ROWS));

    let swapped = text_alone(&layout, layout.material, "Almond");
    assert!(!same_region(&canvas, &swapped, TITLE_COLUMNS, MATERIAL_ROWS));
}

#[test]
fn test_banner_region_shows_status_text() {
    let layout = Layout::standard();
    let r = renderer();
    let cases = [
        (Status::Open, Rgb(95, 178, 34), "Open"),
        (Status::reserved("Unit 7B"), Rgb(0, 99, 150), "Unit 7B"),
        (Status::reserved(""), Rgb(0, 99, 150), "Reserved"),
        (Status::Reserved { project: None }, Rgb(0, 99, 150), "Reserved"),
    ];

    for (status, color, text) in cases {
        let canvas = r.render(&label(ColorChoice::named("Almond"), status));
        let expected = banner_alone(&layout, color, text);
        assert!(
            same_region(&canvas, &expected, BANNER_COLUMNS, BANNER_ROWS),
            "banner should read '{}'",
            text
        );
    }

    let canvas = r.render(&label(ColorChoice::named("Almond"), Status::reserved("")));
    let blank = banner_alone(&layout, Rgb(0, 99, 150), "");
    assert!(!same_region(&canvas, &blank, BANNER_COLUMNS, BANNER_ROWS));
}

#[test]
fn test_open_banner() {
    let fields = label(ColorChoice::named("Almond"), Status::Open);
    let canvas = renderer().render(&fields);

    assert_eq!(at(&canvas, BANNER_SAMPLE), Rgb(95, 178, 34));
    assert_eq!(at(&canvas, (459, 456)), Rgb(95, 178, 34));
    assert_eq!(at(&canvas, (1649, 561)), Rgb(95, 178, 34));
    assert_eq!(at(&canvas, (1649, 562)), Rgb::WHITE);
    assert_eq!(at(&canvas, (458, 500)), Rgb::WHITE);
    assert_eq!(fields.status_text(), "Open");

    let white = |c: Rgb| c == Rgb::WHITE;
    assert!(count_in(&canvas, 459..1650, 456..562, white) > 0);
}

#[test]
fn test_reserved_banner() {
    let r = renderer();

    let fields = label(ColorChoice::named("Almond"), Status::reserved("Unit 7B"));
    let canvas = r.render(&fields);
    assert_eq!(at(&canvas, BANNER_SAMPLE), Rgb(0, 99, 150));
    assert_eq!(fields.status_text(), "Unit 7B");

    let fields = label(ColorChoice::named("Almond"), Status::reserved(""));
    let canvas = r.render(&fields);
    assert_eq!(at(&canvas, BANNER_SAMPLE), Rgb(0, 99, 150));
    assert_eq!(fields.status_text(), "Reserved");
}

#[test]
fn test_material_line() {
    let fields = label(ColorChoice::named("Almond"), Status::Open);
    assert_eq!(fields.material_text(), "24ga Galvalume");
}

// ==================== Whole label ====================

#[test]
fn test_render_is_idempotent() {
    let r = renderer();
    let photo = encode_png(&RgbImage::from_pixel(7, 9, image::Rgb([10, 20, 30]))).unwrap();

    for color in [
        ColorChoice::named("Copper Penny"),
        ColorChoice::custom(Rgb(1, 2, 3), "Ink"),
        ColorChoice::mill_finish(Some(photo)),
    ] {
        let fields = label(color, Status::reserved("Unit 7B"));
        let first = r.render(&fields);
        let second = r.render(&fields);
        assert!(first.as_raw() == second.as_raw());
    }
}

#[test]
fn test_compact_layout() {
    let r = Renderer::new(Palette::standard(), FontSet::bundled().unwrap(), Layout::compact());
    let canvas = r.render(&label(ColorChoice::named("Evergreen"), Status::Open));

    assert_eq!(canvas.dimensions(), (1650, 570));
    assert_eq!(at(&canvas, (225, 2)), Rgb::BLACK);
    assert_eq!(at(&canvas, (225, 275)), Rgb(55, 82, 69));
    assert_eq!(at(&canvas, (1640, 540)), Rgb(95, 178, 34));
    assert_eq!(at(&canvas, (1640, 546)), Rgb::WHITE);
}

#[test]
fn test_custom_palette_injected() {
    let palette = Palette::from_json(
        r#"[{"name": "Signal Orange", "entry": {"flat": [255, 120, 0]}}]"#,
    )
    .unwrap();
    let r = Renderer::new(palette, FontSet::bundled().unwrap(), Layout::standard());

    let canvas = r.render(&label(ColorChoice::named("Signal Orange"), Status::Open));
    assert_eq!(at(&canvas, (225, 291)), Rgb(255, 120, 0));

    // Not in the injected palette
    let canvas = r.render(&label(ColorChoice::named("Almond"), Status::Open));
    assert_eq!(at(&canvas, (225, 291)), Rgb::WHITE);
}

#[test]
fn test_form_pipeline_to_png_file() {
    let form = FormSubmission::from_pairs([
        ("color", "Bright Silver"),
        ("material", "Aluminum"),
        ("gauge", ".032"),
        ("status", "Reserved"),
        ("project", "Unit 7B"),
    ]);
    let bytes = render_form_to_png(form, &renderer()).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (1650, 586));
    assert_eq!(at(&decoded, BANNER_SAMPLE), Rgb(0, 99, 150));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("label.png");
    save_png(&decoded, &path).unwrap();
    let reloaded = image::open(&path).unwrap().to_rgb8();
    assert!(reloaded.as_raw() == decoded.as_raw());
}

#[test]
fn test_form_pipeline_rejects_bad_hex() {
    let form = FormSubmission::from_pairs([("color", "Other"), ("custom_color_hex", "#12345")]);
    assert!(render_form_to_png(form, &renderer()).is_err());
}
