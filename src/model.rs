//! Data model for the ordered content sequence submitted to the renderer.
//!
//! The types in this module describe the logical content of the CV without
//! referencing the layout engine, so block construction stays testable
//! without fonts or a PDF writer.  The assembler produces one ordered
//! [`ContentBlock`] sequence; the renderer consumes it exactly once, in
//! order.

use std::fmt;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView};

use crate::style::StyleSpec;

/// A fragment of paragraph text with inline decorations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
}

impl Span {
    /// Creates a new span with the provided text and no decorations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Marks the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A paragraph rendered with one of the named styles.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    spans: Vec<Span>,
    style: StyleSpec,
}

impl TextBlock {
    /// Creates a paragraph from the provided spans.
    pub fn new(spans: impl Into<Vec<Span>>, style: StyleSpec) -> Self {
        Self {
            spans: spans.into(),
            style,
        }
    }

    /// Creates a paragraph holding a single undecorated span.
    pub fn plain(text: impl Into<String>, style: StyleSpec) -> Self {
        Self::new(vec![Span::new(text)], style)
    }

    /// Returns the spans that make up the paragraph.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the paragraph style.
    pub fn style(&self) -> StyleSpec {
        self.style
    }

    /// Returns the concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// A decoded photo placed into the layout at a fixed size.
///
/// The image is loaded (and orientation-corrected) while the sequence is
/// assembled; rendering only scales and places it.
#[derive(Clone)]
pub struct ImageBlock {
    image: DynamicImage,
    width_mm: f64,
    height_mm: f64,
}

impl ImageBlock {
    /// Creates an image block rendered at the given size.
    pub fn new(image: DynamicImage, width_mm: f64, height_mm: f64) -> Self {
        Self {
            image,
            width_mm,
            height_mm,
        }
    }

    /// Returns the decoded image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consumes the block and returns the decoded image.
    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Returns the rendered width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Returns the rendered height in millimetres.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }
}

impl fmt::Debug for ImageBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width_px, height_px) = self.image.dimensions();
        f.debug_struct("ImageBlock")
            .field("width_px", &width_px)
            .field("height_px", &height_px)
            .field("width_mm", &self.width_mm)
            .field("height_mm", &self.height_mm)
            .finish()
    }
}

/// One table cell: a vertical stack of content blocks.
pub type TableCell = Vec<ContentBlock>;

/// A table of content blocks with weighted columns.
#[derive(Clone, Debug, Default)]
pub struct TableBlock {
    column_weights: Vec<usize>,
    rows: Vec<Vec<TableCell>>,
}

impl TableBlock {
    /// Creates an empty table with the given relative column weights.
    pub fn new(column_weights: Vec<usize>) -> Self {
        Self {
            column_weights,
            rows: Vec::new(),
        }
    }

    /// Appends a row.  Each row must carry one cell per column.
    pub fn with_row(mut self, cells: Vec<TableCell>) -> Self {
        debug_assert_eq!(cells.len(), self.column_weights.len());
        self.rows.push(cells);
        self
    }

    /// Returns the relative column weights.
    pub fn column_weights(&self) -> &[usize] {
        &self.column_weights
    }

    /// Returns the table rows.
    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }

    /// Consumes the table and returns its column weights and rows.
    pub fn into_parts(self) -> (Vec<usize>, Vec<Vec<TableCell>>) {
        (self.column_weights, self.rows)
    }
}

/// One unit of document content, laid out sequentially by the renderer.
#[derive(Clone, Debug)]
pub enum ContentBlock {
    /// Styled paragraph content.
    Text(TextBlock),
    /// A raster image at a fixed size.
    Image(ImageBlock),
    /// A table with weighted columns.
    Table(TableBlock),
    /// Vertical whitespace, height in millimetres.
    Spacer(f64),
}

impl ContentBlock {
    /// Convenience helper for building a styled paragraph block.
    pub fn text(spans: impl Into<Vec<Span>>, style: StyleSpec) -> Self {
        Self::Text(TextBlock::new(spans, style))
    }

    /// Convenience helper for building a single-span paragraph block.
    pub fn plain(text: impl Into<String>, style: StyleSpec) -> Self {
        Self::Text(TextBlock::plain(text, style))
    }

    /// Convenience helper for building a spacer block.
    pub fn spacer(height_mm: f64) -> Self {
        Self::Spacer(height_mm)
    }
}

/// A single portfolio project, rendered as a bulleted title, a description
/// and a repository link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Project name, including the implementation language.
    pub title: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Repository URL.
    pub url: &'static str,
}

/// Physical page size of the output document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSize {
    /// ISO A4, used by the German variant.
    A4,
    /// US Letter, used by the English variant.
    Letter,
}

/// Page margins in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PageMargins {
    /// Creates margins from top, right, bottom and left values.
    pub fn trbl(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Page geometry and fixed file locations for one CV variant.
///
/// Resolved once per invocation and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentConfig {
    /// Title recorded in the PDF metadata.
    pub title: String,
    /// Physical page size.
    pub page_size: PageSize,
    /// Page margins.
    pub margins: PageMargins,
    /// Path the profile photo is read from.
    pub photo_path: PathBuf,
    /// Path the finished PDF is written to.
    pub output_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSpec;

    #[test]
    fn plain_block_holds_single_span() {
        let block = TextBlock::plain("Hello", StyleSpec::new(10));
        assert_eq!(block.spans().len(), 1);
        assert_eq!(block.text(), "Hello");
        assert!(!block.spans()[0].is_bold());
    }

    #[test]
    fn text_concatenates_spans() {
        let block = TextBlock::new(
            vec![Span::new("\u{2022} "), Span::new("Hashify").bold()],
            StyleSpec::new(10),
        );
        assert_eq!(block.text(), "\u{2022} Hashify");
        assert!(block.spans()[1].is_bold());
    }

    #[test]
    fn table_keeps_rows_in_order() {
        let table = TableBlock::new(vec![1, 3])
            .with_row(vec![Vec::new(), vec![ContentBlock::spacer(1.0)]]);
        assert_eq!(table.column_weights(), &[1, 3]);
        assert_eq!(table.rows().len(), 1);
        assert!(table.rows()[0][0].is_empty());
        assert!(matches!(table.rows()[0][1][0], ContentBlock::Spacer(_)));
    }
}
