use std::path::PathBuf;

use image::{Rgb, RgbImage};
use sha2::{Digest, Sha256};

use cv_builder::assembler::Assembler;
use cv_builder::content::Language;
use cv_builder::fonts;
use cv_builder::model::DocumentConfig;
use cv_builder::render;

fn skip_notice(test: &str) {
    eprintln!(
        "Skipping {test}: bundled fonts missing. Set CV_BUILDER_FONTS_DIR or copy \
         assets/fonts into the crate checkout."
    );
}

fn config_without_photo(language: Language) -> DocumentConfig {
    let mut config = language.config();
    config.photo_path = PathBuf::from("no-such-photo.jpg");
    config
}

fn render_variant(language: Language, config: &DocumentConfig) -> Vec<u8> {
    let content = language.content();
    let blocks = Assembler::new(language.styles()).assemble(&content, config);
    render::render_to_bytes(blocks, config).expect("render variant")
}

fn write_sample_photo(path: &std::path::Path) {
    let mut pixels = RgbImage::new(8, 8);
    for x in 0..8 {
        pixels.put_pixel(x, 0, Rgb([180, 60, 40]));
    }
    pixels.save(path).expect("write sample photo");
}

/// Blanks the metadata segments the PDF writer stamps per run (creation and
/// modification dates, document id, producer) so renders can be compared.
fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub_pdf(bytes)).into()
}

#[test]
fn both_variants_render_non_empty_output() {
    if !fonts::fonts_available() {
        skip_notice("both_variants_render_non_empty_output");
        return;
    }

    for language in Language::ALL {
        let bytes = render_variant(language, &config_without_photo(language));
        assert!(
            !bytes.is_empty(),
            "{language:?} render should contain at least a header"
        );
        assert!(bytes.starts_with(b"%PDF"), "{language:?} output is not a PDF");
    }
}

#[test]
fn rendering_is_deterministic() {
    if !fonts::fonts_available() {
        skip_notice("rendering_is_deterministic");
        return;
    }

    let config = config_without_photo(Language::English);
    let bytes_a = render_variant(Language::English, &config);
    let bytes_b = render_variant(Language::English, &config);

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "renders must be identical after metadata normalization"
    );
}

#[test]
fn photo_embeds_into_the_header() {
    if !fonts::fonts_available() {
        skip_notice("photo_embeds_into_the_header");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let photo_path = dir.path().join("avatar.png");
    write_sample_photo(&photo_path);

    let mut config = config_without_photo(Language::German);
    let without_photo = render_variant(Language::German, &config);

    config.photo_path = photo_path;
    let with_photo = render_variant(Language::German, &config);

    assert!(
        with_photo.len() > without_photo.len(),
        "embedding the photo should grow the output"
    );
}

#[test]
fn render_to_file_writes_the_configured_path() {
    if !fonts::fonts_available() {
        skip_notice("render_to_file_writes_the_configured_path");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let language = Language::English;
    let mut config = config_without_photo(language);
    config.output_path = dir.path().join(config.output_path);

    let content = language.content();
    let blocks = Assembler::new(language.styles()).assemble(&content, &config);
    let bytes = render::render_to_file(blocks, &config).expect("render to file");

    let written = std::fs::read(&config.output_path).expect("read output file");
    assert!(!written.is_empty());
    assert_eq!(written, bytes);
}
