//! # End-to-End API Tests
//!
//! These tests drive the public API with the built-in renderers: every
//! supported symbology renders to a valid PNG, ZPL directives flow into
//! generation, and batch generation stays index-aligned. Images are
//! checked structurally (signature, dimensions, ink) rather than
//! byte-exactly, since renderer crates may legitimately change module
//! layouts between versions.

use cebra::{BarcodeGenerator, BarcodeRequest, Outcome, Symbology, zpl};
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Generate one request and unwrap the success image as PNG bytes.
async fn generate_png(generator: &BarcodeGenerator, kind: &str, data: &str) -> Vec<u8> {
    match generator
        .generate(&BarcodeRequest::new(kind, data))
        .await
        .unwrap()
    {
        Outcome::Success { image } => image.to_png().unwrap(),
        Outcome::Warning { message, .. } => panic!("{kind}: unexpected warning: {message}"),
    }
}

#[tokio::test]
async fn every_symbology_renders_to_png() {
    let generator = BarcodeGenerator::with_default_renderers();
    let cases = [
        ("CODE128", "Hello World 123"),
        ("CODE39", "HELLO-123"),
        ("CODE93", "HELLO93"),
        ("EAN13", "123456789012"),
        ("EAN13", "4006381333931"),
        ("UPCA", "03600029145"),
        ("EAN8", "1234567"),
        ("ITF14", "12345678901234"),
        ("PDF417", "Hello, PDF417!"),
        ("DATAMATRIX", "Hello"),
        ("QR", "https://example.com"),
    ];

    for (kind, data) in cases {
        let png = generate_png(&generator, kind, data).await;
        assert_eq!(&png[..8], &PNG_SIGNATURE, "{kind} did not produce a PNG");
    }
}

#[tokio::test]
async fn symbology_names_are_case_insensitive() {
    let generator = BarcodeGenerator::with_default_renderers();
    let upper = generate_png(&generator, "CODE128", "abc").await;
    let lower = generate_png(&generator, "code128", "abc").await;
    assert_eq!(upper, lower);
}

#[tokio::test]
async fn unknown_symbology_renders_as_code128() {
    let generator = BarcodeGenerator::with_default_renderers();

    // The unknown type maps to the Code 128 renderer (same module
    // sequence, so the same width) but keeps the generic defaults rather
    // than the Code 128 preset, so the bars are taller.
    let unknown = match generator
        .generate(&BarcodeRequest::new("SOMETHING_ELSE", "abc"))
        .await
        .unwrap()
    {
        Outcome::Success { image } => image,
        Outcome::Warning { message, .. } => panic!("unexpected warning: {message}"),
    };
    let code128 = match generator
        .generate(&BarcodeRequest::new("CODE128", "abc"))
        .await
        .unwrap()
    {
        Outcome::Success { image } => image,
        Outcome::Warning { message, .. } => panic!("unexpected warning: {message}"),
    };

    assert_eq!(unknown.width(), code128.width());
    assert!(unknown.height() > code128.height());
}

#[tokio::test]
async fn ean13_wrong_length_warns_with_fallback() {
    let generator = BarcodeGenerator::with_default_renderers();
    let outcome = generator
        .generate(&BarcodeRequest::new("EAN13", "12345"))
        .await
        .unwrap();

    match outcome {
        Outcome::Warning { message, fallback } => {
            assert_eq!(fallback, Symbology::Code128);
            assert!(message.contains("12 or 13"));
        }
        Outcome::Success { .. } => panic!("expected a warning"),
    }
}

#[tokio::test]
async fn zpl_label_renders_end_to_end() {
    let zpl_text = "^XA\n^FO50,50^BC,100,Y,N,N\n^FD123456^FS\n^FO50,200^BQN,2,4\n^FDhttps://example.com^FS\n^XZ";
    let directives = zpl::interpret(zpl_text);
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0].symbology, Symbology::Code128);
    assert_eq!(directives[1].symbology, Symbology::Qr);

    let generator = BarcodeGenerator::with_default_renderers();
    for directive in &directives {
        let outcome = generator
            .generate(&BarcodeRequest::from(directive))
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::Success { .. }));
    }
}

#[tokio::test]
async fn templates_for_all_types_render() {
    let generator = BarcodeGenerator::with_default_renderers();
    let cases = [
        (Symbology::Code128, "TEMPLATE128"),
        (Symbology::Code39, "TPL-39"),
        (Symbology::Qr, "template"),
        (Symbology::DataMatrix, "template"),
        (Symbology::Ean13, "400638133393"),
        (Symbology::UpcA, "03600029145"),
    ];

    for (symbology, data) in cases {
        let text = zpl::generate_template(symbology, data);
        let directives = zpl::interpret(&text);
        assert_eq!(directives.len(), 1, "{symbology}");

        let outcome = generator
            .generate(&BarcodeRequest::from(&directives[0]))
            .await
            .unwrap();
        assert!(
            matches!(outcome, Outcome::Success { .. }),
            "{symbology} did not render"
        );
    }
}

#[tokio::test]
async fn generate_many_returns_index_aligned_results() {
    let generator = BarcodeGenerator::with_default_renderers();
    let outcomes = generator
        .generate_many(vec![
            BarcodeRequest::new("CODE128", "first"),
            BarcodeRequest::new("EAN13", "bad-length"),
            BarcodeRequest::new("QR", "third"),
        ])
        .await;

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], Ok(Outcome::Success { .. })));
    assert!(matches!(outcomes[1], Ok(Outcome::Warning { .. })));
    assert!(matches!(outcomes[2], Ok(Outcome::Success { .. })));
}

#[tokio::test]
async fn request_height_is_honored_without_a_preset() {
    let generator = BarcodeGenerator::with_default_renderers();

    // Unknown type, no preset: the request height drives the image height.
    let short = generator
        .generate(&BarcodeRequest::new("MYSTERY", "abc").height(30))
        .await
        .unwrap();
    let tall = generator
        .generate(&BarcodeRequest::new("MYSTERY", "abc").height(120))
        .await
        .unwrap();

    match (short, tall) {
        (Outcome::Success { image: short }, Outcome::Success { image: tall }) => {
            assert!(tall.height() > short.height());
        }
        _ => panic!("expected two successes"),
    }
}
