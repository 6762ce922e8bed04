//! End-to-end tests for plaque generation.
//!
//! Most tests replace the QR encoder with fixture matrices; the `qr_` tests
//! run the bundled encoder end to end.

use std::cell::Cell;
use std::fs;

use proptest::prelude::*;
use qrplaque_rs::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic QR-like matrix: three finder patterns and a scattered body.
fn fixture_matrix(side: usize) -> ModuleMatrix {
    let finder = |r: usize, c: usize| {
        let d = (r.abs_diff(3)).max(c.abs_diff(3));
        d != 2
    };
    let rows = (0..side)
        .map(|r| {
            (0..side)
                .map(|c| {
                    let (mr, mc) = (side - 1 - r, side - 1 - c);
                    if r < 7 && c < 7 {
                        finder(r, c)
                    } else if r < 7 && mc < 7 {
                        finder(r, mc)
                    } else if mr < 7 && c < 7 {
                        finder(mr, c)
                    } else {
                        (r * 7 + c * 3) % 5 < 2
                    }
                })
                .collect()
        })
        .collect();
    ModuleMatrix::from_rows(rows).unwrap()
}

fn module_blocks(geometry: &GeometryNode) -> usize {
    geometry.count_primitives(|p| matches!(p, Primitive::Square { center: false, .. }))
}

#[test]
fn test_full_plaque() {
    init_logging();
    let matrix = fixture_matrix(21);
    let params = PlaqueParams::new("Test")
        .with_title("Test")
        .with_subtitle("Hello!")
        .with_frame_outline(0.0)
        .with_nfc(true)
        .with_magnets(true);

    let plaque = generate_plaque(&params, &matrix).unwrap();
    let geometry = &plaque.geometry;

    assert_eq!(
        geometry.count_primitives(|p| matches!(p, Primitive::Cylinder { .. })),
        5
    );
    assert_eq!(module_blocks(geometry), matrix.filled_count());
    assert_eq!(
        geometry.count_primitives(|p| matches!(p, Primitive::Text { .. })),
        2
    );
    assert!(plaque.layout.bottom_spacing > 0.0);
    assert!(plaque.layout.frame_length > plaque.layout.frame_width);
    assert_eq!(
        geometry.count(|n| matches!(n, GeometryNode::Colored { color: Color::OUTLINE, .. })),
        0
    );
}

#[test]
fn test_plain_plaque() {
    init_logging();
    let matrix = fixture_matrix(21);
    let params = PlaqueParams::new("plain").with_nfc(false).with_magnets(false);
    let plaque = generate_plaque(&params, &matrix).unwrap();

    assert_eq!(plaque.layout.frame_width, plaque.layout.frame_length);
    assert_eq!(plaque.layout.bottom_spacing, 0.0);
    assert_eq!(
        plaque
            .geometry
            .count_primitives(|p| matches!(p, Primitive::Cylinder { .. } | Primitive::Text { .. })),
        0
    );
}

#[test]
fn test_compact_preset_has_outline_band() {
    init_logging();
    let params = PlaqueParams::compact("compact").with_title("Compact");
    let geometry = generate(&params, &fixture_matrix(25)).unwrap();
    assert_eq!(
        geometry.count(|n| matches!(n, GeometryNode::Colored { color: Color::OUTLINE, .. })),
        1
    );
    assert_eq!(
        geometry.count(|n| matches!(n, GeometryNode::Offset { .. })),
        1
    );
}

#[test]
fn test_generation_is_deterministic() {
    let matrix = fixture_matrix(21);
    let params = PlaqueParams::new("Test").with_title("Test").with_subtitle("Hello!");
    let a = generate(&params, &matrix).unwrap();
    let b = generate(&params, &matrix).unwrap();
    assert_eq!(a, b);
    assert_eq!(to_scad(&a), to_scad(&b));
}

#[test]
fn test_fingerprint() {
    let params = PlaqueParams::new("Test").with_title("Test");
    assert_eq!(params.fingerprint().unwrap(), params.clone().fingerprint().unwrap());

    let reloaded = PlaqueParams::from_json(&params.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.fingerprint().unwrap(), params.fingerprint().unwrap());

    let resized = params.clone().with_qr_size(51.0);
    assert_ne!(resized.fingerprint().unwrap(), params.fingerprint().unwrap());
}

#[test]
fn test_invalid_outline_rejected_before_encoding() {
    init_logging();
    let calls = Cell::new(0);
    let encoder = |_: &str| {
        calls.set(calls.get() + 1);
        ModuleMatrix::from_ascii("#")
    };

    let params = PlaqueParams::new("x").with_frame_outline(27.5);
    let err = generate(&params, &encoder).unwrap_err();
    assert!(matches!(err, PlaqueError::Configuration { .. }));
    assert_eq!(err.field(), Some("frame_outline_mm"));
    assert_eq!(calls.get(), 0);

    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("out");
    assert!(ensure_scad(&dir, &params, &encoder).is_err());
    assert!(!dir.exists());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_missing_title_size_rejected() {
    let mut params = PlaqueParams::new("x").with_title("T");
    params.title_size_mm = 0.0;
    let err = generate(&params, &fixture_matrix(21)).unwrap_err();
    assert_eq!(err.field(), Some("title_size_mm"));
}

#[test]
fn test_encoder_errors_propagate() {
    let ragged = |_: &str| ModuleMatrix::from_rows(vec![vec![true, false], vec![true]]);
    let err = generate(&PlaqueParams::new("x"), &ragged).unwrap_err();
    assert!(matches!(err, PlaqueError::Encoding(_)));

    let failing = |data: &str| -> Result<ModuleMatrix> {
        Err(PlaqueError::Encoding(format!("{data} does not fit")))
    };
    let err = generate(&PlaqueParams::new("too long"), &failing).unwrap_err();
    assert_eq!(err.to_string(), "encoding error: too long does not fit");
}

#[test]
fn test_scad_output() {
    let params = PlaqueParams::new("Test").with_title("Test").with_subtitle("Hello!");
    let scad = to_scad(&generate(&params, &fixture_matrix(21)).unwrap());

    assert!(scad.starts_with("union() {\n"));
    assert!(scad.contains("text(text=\"Test\", size=10"));
    assert!(scad.contains("text(text=\"Hello!\""));
    assert!(scad.contains("$fn=32"));
    assert!(scad.contains("linear_extrude(height="));
    assert!(scad.contains("difference() {"));
    assert_eq!(scad.matches("cylinder(").count(), 5);
    assert_eq!(scad.matches('{').count(), scad.matches('}').count());
}

#[test]
fn test_ensure_scad_is_idempotent() {
    init_logging();
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let matrix = fixture_matrix(21);
    let calls = Cell::new(0);
    let encoder = |_: &str| -> Result<ModuleMatrix> {
        calls.set(calls.get() + 1);
        Ok(matrix.clone())
    };
    let params = PlaqueParams::new("Test").with_title("Test");

    let path = ensure_scad(dir, &params, &encoder).unwrap();
    let paths = ArtifactPaths::for_params(dir, &params).unwrap();
    assert_eq!(path, paths.scad());
    assert_eq!(calls.get(), 1);

    let source = fs::read_to_string(&path).unwrap();
    assert_eq!(source, to_scad(&generate(&params, &matrix).unwrap()));

    let again = ensure_scad(dir, &params, &encoder).unwrap();
    assert_eq!(again, path);
    assert_eq!(calls.get(), 1);
    assert_eq!(fs::read_dir(dir).unwrap().count(), 1);

    // A different parameter set gets its own artifact.
    let other = ensure_scad(dir, &params.clone().with_qr_size(51.0), &encoder).unwrap();
    assert_ne!(other, path);
    assert_eq!(calls.get(), 2);
    assert_eq!(fs::read_dir(dir).unwrap().count(), 2);
}

#[test]
fn test_qr_full_plaque() {
    init_logging();
    let params = PlaqueParams::new("Test")
        .with_title("Test")
        .with_subtitle("Hello!")
        .with_frame_outline(0.0)
        .with_nfc(true)
        .with_magnets(true);
    let matrix = QrEncoder::new().encode(&params.data).unwrap();
    assert_eq!(matrix.side(), 21);

    let geometry = generate(&params, &QrEncoder::new()).unwrap();
    assert_eq!(geometry, generate(&params, &matrix).unwrap());
    assert_eq!(module_blocks(&geometry), matrix.filled_count());
    assert_eq!(
        geometry.count_primitives(|p| matches!(p, Primitive::Cylinder { .. })),
        5
    );
    assert_eq!(
        geometry.count_primitives(|p| matches!(p, Primitive::Text { .. })),
        2
    );
    // Four plate corners plus the three finder corners of the symbol.
    assert_eq!(
        geometry.count_primitives(|p| matches!(p, Primitive::Polygon { .. })),
        7
    );
}

#[test]
fn test_qr_ensure_scad() {
    init_logging();
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join(DEFAULT_OUTPUT_DIR);
    let params = PlaqueParams::new("Test");

    let path = ensure_scad(&dir, &params, &QrEncoder::new()).unwrap();
    assert_eq!(path, ArtifactPaths::for_params(&dir, &params).unwrap().scad());
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        format!("{}.scad", params.fingerprint().unwrap())
    );

    let source = fs::read_to_string(&path).unwrap();
    assert!(source.starts_with("union() {\n"));
    assert_eq!(source.matches("cylinder(").count(), 5);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
}

#[test]
fn test_qr_payload_too_long() {
    let params = PlaqueParams::new("x".repeat(3000));
    let err = generate(&params, &QrEncoder::new()).unwrap_err();
    assert!(matches!(err, PlaqueError::Encoding(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_every_filled_module_is_built(
        side in 1usize..30,
        qr_size in 20.0f64..120.0,
        title in proptest::option::of("[A-Za-z ]{1,24}"),
    ) {
        let matrix = fixture_matrix(side);
        let mut params = PlaqueParams::new("p").with_qr_size(qr_size);
        if let Some(title) = title {
            params = params.with_title(title);
        }
        let plaque = generate_plaque(&params, &matrix).unwrap();
        prop_assert_eq!(module_blocks(&plaque.geometry), matrix.filled_count());
        prop_assert!(plaque.layout.title_scale > 0.0 && plaque.layout.title_scale <= 1.0);
    }
}
