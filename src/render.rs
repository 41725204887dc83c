//! Conversion of the block sequence into a paginated PDF.
//!
//! Pagination, styling and PDF emission are owned by [`genpdf`]; this module
//! only maps the renderer-agnostic [`ContentBlock`] model onto genpdf
//! elements and drives a single render pass.

use std::fs;

use genpdf::elements::{Break, FramedElement, LinearLayout, Paragraph, TableLayout};
use genpdf::error::Error;
use genpdf::{Alignment, Document, Element, Margins, Mm, PaperSize, Scale, SimplePageDecorator};
use image::GenericImageView;

use crate::fonts;
use crate::model::{ContentBlock, DocumentConfig, ImageBlock, PageSize, TextBlock};

/// Resolution genpdf assumes for raster images placed at scale 1.0.
const IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

/// Inner padding between a framed heading and its border.
const FRAME_PADDING_MM: f64 = 1.0;

fn mm(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Renders the sequence into PDF bytes.
///
/// The sequence is consumed: every block is laid out exactly once, in order.
pub fn render_to_bytes(
    blocks: Vec<ContentBlock>,
    config: &DocumentConfig,
) -> Result<Vec<u8>, Error> {
    let mut document = Document::new(fonts::font_family()?);
    document.set_title(config.title.as_str());
    document.set_paper_size(match config.page_size {
        PageSize::A4 => PaperSize::A4,
        PageSize::Letter => PaperSize::Letter,
    });

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(
        mm(config.margins.top),
        mm(config.margins.right),
        mm(config.margins.bottom),
        mm(config.margins.left),
    ));
    document.set_page_decorator(decorator);

    for block in blocks {
        append_block(&mut document, block)?;
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}

/// Renders the sequence and writes it to the configured output path,
/// returning the written bytes.
pub fn render_to_file(
    blocks: Vec<ContentBlock>,
    config: &DocumentConfig,
) -> Result<Vec<u8>, Error> {
    let bytes = render_to_bytes(blocks, config)?;
    fs::write(&config.output_path, &bytes).map_err(|err| {
        Error::new(
            format!("Failed to write {}", config.output_path.display()),
            err,
        )
    })?;
    Ok(bytes)
}

/// Receives finished elements, letting blocks target the document and nested
/// cell layouts through one code path.
trait ElementSink {
    fn sink<E: Element + 'static>(&mut self, element: E);
}

impl ElementSink for Document {
    fn sink<E: Element + 'static>(&mut self, element: E) {
        self.push(element);
    }
}

impl ElementSink for LinearLayout {
    fn sink<E: Element + 'static>(&mut self, element: E) {
        self.push(element);
    }
}

fn append_block<S: ElementSink>(sink: &mut S, block: ContentBlock) -> Result<(), Error> {
    match block {
        ContentBlock::Text(text) => append_text(sink, text),
        ContentBlock::Image(image) => append_image(sink, image)?,
        ContentBlock::Table(table) => {
            let (weights, rows) = table.into_parts();
            let mut layout = TableLayout::new(weights);
            for row in rows {
                let mut table_row = layout.row();
                for cell in row {
                    let mut cell_layout = LinearLayout::vertical();
                    for cell_block in cell {
                        append_block(&mut cell_layout, cell_block)?;
                    }
                    table_row = table_row.element(cell_layout);
                }
                table_row.push()?;
            }
            sink.sink(layout);
        }
        ContentBlock::Spacer(height_mm) => {
            sink.sink(Break::new(0).padded(Margins::trbl(mm(height_mm), 0, 0, 0)));
        }
    }
    Ok(())
}

fn append_text<S: ElementSink>(sink: &mut S, text: TextBlock) {
    let spec = text.style();
    let base = spec.text_style();

    let mut paragraph = Paragraph::default();
    for span in text.spans() {
        let mut style = base.clone();
        if span.is_bold() {
            style.set_bold();
        }
        if span.is_italic() {
            style.set_italic();
        }
        paragraph.push_styled(span.text().to_owned(), style);
    }
    paragraph.set_alignment(Alignment::from(spec.alignment()));

    let spacing = Margins::trbl(mm(spec.space_before_mm()), 0, mm(spec.space_after_mm()), 0);
    if spec.is_bordered() {
        let padding = Margins::trbl(
            mm(FRAME_PADDING_MM),
            mm(FRAME_PADDING_MM),
            mm(FRAME_PADDING_MM),
            mm(FRAME_PADDING_MM),
        );
        sink.sink(FramedElement::new(paragraph.padded(padding)).padded(spacing));
    } else {
        sink.sink(paragraph.padded(spacing));
    }
}

fn append_image<S: ElementSink>(sink: &mut S, block: ImageBlock) -> Result<(), Error> {
    let (px_width, px_height) = block.image().dimensions();
    let width_mm = block.width_mm();
    let height_mm = block.height_mm();

    let mut image = genpdf::elements::Image::from_dynamic_image(block.into_image())?;

    let natural_width = MM_PER_INCH * f64::from(px_width) / IMAGE_DPI;
    let natural_height = MM_PER_INCH * f64::from(px_height) / IMAGE_DPI;
    if natural_width > f64::EPSILON && natural_height > f64::EPSILON {
        image.set_scale(Scale::new(
            width_mm / natural_width,
            height_mm / natural_height,
        ));
    }
    image.set_alignment(Alignment::Center);

    sink.sink(image);
    Ok(())
}
