//! Turns the literal CV content into the ordered block sequence.

use log::warn;

use crate::content::CvContent;
use crate::model::{ContentBlock, DocumentConfig, ImageBlock, Span, TableBlock, TextBlock};
use crate::photo;
use crate::style::StyleSheet;

/// Rendered size of the profile photo.
const PHOTO_WIDTH_MM: f64 = 30.5;
const PHOTO_HEIGHT_MM: f64 = 30.5;

/// Relative widths of the header table (photo column, text column).
const HEADER_COLUMNS: [usize; 2] = [1, 3];

const HEADER_GAP_MM: f64 = 7.0;
const FALLBACK_HEADER_GAP_MM: f64 = 4.2;
const SECTION_GAP_MM: f64 = 4.2;
const PROJECT_GAP_MM: f64 = 2.1;

/// Builds the ordered content sequence for one CV variant.
///
/// The assembler owns the sequence while it grows; [`Assembler::assemble`]
/// hands it off for rendering.  Apart from the photo lookup in the header,
/// every step is infallible literal construction.
pub struct Assembler {
    styles: StyleSheet,
    blocks: Vec<ContentBlock>,
}

impl Assembler {
    /// Creates an assembler using the given style sheet.
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            styles,
            blocks: Vec::new(),
        }
    }

    /// Assembles the full document in display order.
    pub fn assemble(mut self, content: &CvContent, config: &DocumentConfig) -> Vec<ContentBlock> {
        let normal = self.styles.normal();

        self.header(content, config);

        self.section(
            content.about_heading,
            [ContentBlock::plain(content.about, normal)],
        );

        self.section(
            content.skills_heading,
            content
                .skills
                .iter()
                .map(|line| ContentBlock::plain(*line, normal)),
        );

        self.projects_section(content);

        self.section(
            content.experience_heading,
            [
                ContentBlock::text(vec![Span::new(content.experience_role).bold()], normal),
                ContentBlock::text(vec![Span::new(content.experience_period).italic()], normal),
                ContentBlock::plain(content.experience_summary, normal),
            ],
        );

        self.section(
            content.education_heading,
            [
                ContentBlock::text(vec![Span::new(content.education_degree).bold()], normal),
                ContentBlock::text(vec![Span::new(content.education_period).italic()], normal),
                ContentBlock::plain(content.education_focus, normal),
            ],
        );

        self.section(
            content.certifications_heading,
            content
                .certifications
                .iter()
                .map(|line| ContentBlock::plain(*line, normal)),
        );

        self.section(
            content.languages_heading,
            content
                .languages
                .iter()
                .map(|line| ContentBlock::plain(*line, normal)),
        );

        self.blocks
    }

    /// Lays the photo beside the name and contact lines.
    ///
    /// When the photo cannot be loaded the header degrades to the centered
    /// text lines alone; the failure never reaches the caller.
    fn header(&mut self, content: &CvContent, config: &DocumentConfig) {
        let text_lines = vec![
            TextBlock::plain(content.name, self.styles.title()),
            TextBlock::plain(content.address, self.styles.contact()),
            TextBlock::plain(content.contact_line, self.styles.contact()),
            TextBlock::plain(content.links_line, self.styles.contact()),
        ];

        match photo::load_profile_photo(&config.photo_path) {
            Ok(image) => {
                let photo_cell = vec![ContentBlock::Image(ImageBlock::new(
                    image,
                    PHOTO_WIDTH_MM,
                    PHOTO_HEIGHT_MM,
                ))];
                let text_cell = text_lines.into_iter().map(ContentBlock::Text).collect();
                let table = TableBlock::new(HEADER_COLUMNS.to_vec())
                    .with_row(vec![photo_cell, text_cell]);
                self.blocks.push(ContentBlock::Table(table));
                self.blocks.push(ContentBlock::spacer(HEADER_GAP_MM));
            }
            Err(err) => {
                warn!(
                    "Profile photo unavailable at {}; building text-only header: {err}",
                    config.photo_path.display()
                );
                self.blocks
                    .extend(text_lines.into_iter().map(ContentBlock::Text));
                self.blocks
                    .push(ContentBlock::spacer(FALLBACK_HEADER_GAP_MM));
            }
        }
    }

    /// Appends a heading, the given body blocks and a closing gap.
    fn section<I>(&mut self, heading: &str, body: I)
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        self.blocks
            .push(ContentBlock::plain(heading, self.styles.heading()));
        self.blocks.extend(body);
        self.blocks.push(ContentBlock::spacer(SECTION_GAP_MM));
    }

    /// Appends the projects section: intro line, then one bulleted entry per
    /// project in input order.
    fn projects_section(&mut self, content: &CvContent) {
        let normal = self.styles.normal();
        let mut body = vec![ContentBlock::plain(content.projects_intro, normal)];
        for project in content.projects {
            body.push(ContentBlock::text(
                vec![Span::new("\u{2022} "), Span::new(project.title).bold()],
                normal,
            ));
            body.push(ContentBlock::plain(project.description, normal));
            body.push(ContentBlock::plain(format!("GitHub: {}", project.url), normal));
            body.push(ContentBlock::spacer(PROJECT_GAP_MM));
        }
        self.section(content.projects_heading, body);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use image::{Rgb, RgbImage};

    use super::*;
    use crate::content::Language;
    use crate::model::ContentBlock;

    fn assemble_without_photo(language: Language) -> Vec<ContentBlock> {
        let mut config = language.config();
        config.photo_path = PathBuf::from("no-such-photo.jpg");
        Assembler::new(language.styles()).assemble(&language.content(), &config)
    }

    fn assemble_with_photo(language: Language) -> Vec<ContentBlock> {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("avatar.png");
        let mut pixels = RgbImage::new(4, 4);
        pixels.put_pixel(0, 0, Rgb([200, 40, 40]));
        pixels.save(&path).expect("write png");

        let mut config = language.config();
        config.photo_path = path;
        Assembler::new(language.styles()).assemble(&language.content(), &config)
    }

    fn collect_texts(blocks: &[ContentBlock], out: &mut Vec<String>) {
        for block in blocks {
            match block {
                ContentBlock::Text(text) => out.push(text.text()),
                ContentBlock::Table(table) => {
                    for row in table.rows() {
                        for cell in row {
                            collect_texts(cell, out);
                        }
                    }
                }
                ContentBlock::Image(_) | ContentBlock::Spacer(_) => {}
            }
        }
    }

    fn texts(blocks: &[ContentBlock]) -> Vec<String> {
        let mut out = Vec::new();
        collect_texts(blocks, &mut out);
        out
    }

    fn contains_image(blocks: &[ContentBlock]) -> bool {
        blocks.iter().any(|block| match block {
            ContentBlock::Image(_) => true,
            ContentBlock::Table(table) => table
                .rows()
                .iter()
                .flatten()
                .any(|cell| contains_image(cell)),
            _ => false,
        })
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        for language in Language::ALL {
            let content = language.content();
            let headings = [
                content.about_heading,
                content.skills_heading,
                content.projects_heading,
                content.experience_heading,
                content.education_heading,
                content.certifications_heading,
                content.languages_heading,
            ];

            let texts = texts(&assemble_without_photo(language));
            let mut last_index = 0;
            for heading in headings {
                let index = texts
                    .iter()
                    .position(|text| text == heading)
                    .unwrap_or_else(|| panic!("missing heading {heading:?}"));
                assert!(index >= last_index, "{heading:?} out of order");
                last_index = index;
            }
        }
    }

    #[test]
    fn projects_emit_four_linked_entries() {
        let texts = texts(&assemble_without_photo(Language::English));
        let links: Vec<_> = texts
            .iter()
            .filter(|text| text.starts_with("GitHub: https://github.com/saadhasan07/"))
            .collect();
        assert_eq!(links.len(), 4);
    }

    #[test]
    fn missing_photo_falls_back_to_text_only_header() {
        let blocks = assemble_without_photo(Language::English);
        assert!(!contains_image(&blocks));
        assert!(!blocks
            .iter()
            .any(|block| matches!(block, ContentBlock::Table(_))));
        assert_eq!(texts(&blocks)[0], "Saad Hasan");
    }

    #[test]
    fn photo_header_adds_image_without_changing_text() {
        for language in Language::ALL {
            let with_photo = assemble_with_photo(language);
            let without_photo = assemble_without_photo(language);

            assert!(contains_image(&with_photo));
            assert!(matches!(with_photo[0], ContentBlock::Table(_)));
            assert_eq!(texts(&with_photo), texts(&without_photo));
        }
    }
}
