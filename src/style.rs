//! Named paragraph styles shared by every part of the CV.
//!
//! A [`StyleSheet`] is resolved once per language variant and never mutated
//! afterwards.  A [`StyleSpec`] stays renderer-agnostic apart from the color
//! type; [`StyleSpec::text_style`] produces the character-level [`genpdf`]
//! style when the block is finally rendered.

use genpdf::style::{Color, Style};
use genpdf::Alignment;

/// Horizontal alignment of a paragraph.
///
/// The variants map directly to [`genpdf::Alignment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

impl From<HorizontalAlignment> for Alignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::Right,
        }
    }
}

/// A named paragraph style: character attributes plus the vertical spacing
/// and optional frame applied around the paragraph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSpec {
    font_size: u8,
    bold: bool,
    color: Option<Color>,
    alignment: HorizontalAlignment,
    space_before_mm: f64,
    space_after_mm: f64,
    bordered: bool,
}

impl StyleSpec {
    /// Creates a left-aligned style with the given font size and no further
    /// decorations.
    pub fn new(font_size: u8) -> Self {
        Self {
            font_size,
            bold: false,
            color: None,
            alignment: HorizontalAlignment::Left,
            space_before_mm: 0.0,
            space_after_mm: 0.0,
            bordered: false,
        }
    }

    /// Marks the style as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Assigns a text color.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the paragraph alignment.
    pub fn aligned(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the vertical gap inserted above the paragraph.
    pub fn with_space_before(mut self, mm: f64) -> Self {
        self.space_before_mm = mm;
        self
    }

    /// Sets the vertical gap inserted below the paragraph.
    pub fn with_space_after(mut self, mm: f64) -> Self {
        self.space_after_mm = mm;
        self
    }

    /// Draws a frame around the paragraph.
    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns whether the style is bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns the configured color, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the paragraph alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Returns the gap above the paragraph in millimetres.
    pub fn space_before_mm(&self) -> f64 {
        self.space_before_mm
    }

    /// Returns the gap below the paragraph in millimetres.
    pub fn space_after_mm(&self) -> f64 {
        self.space_after_mm
    }

    /// Returns whether the paragraph is framed.
    pub fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Builds the character-level [`Style`] for text rendered with this spec.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new();
        style.set_font_size(self.font_size);
        if self.bold {
            style.set_bold();
        }
        if let Some(color) = self.color {
            style.set_color(color);
        }
        style
    }
}

/// Accent color of the German variant's title and headings.
const ACCENT_BLUE: Color = Color::Rgb(0x2c, 0x5a, 0xa0);

/// Body text color of the German variant.
const BODY_GREY: Color = Color::Rgb(0x33, 0x33, 0x33);

const HEADING_GAP_BEFORE_MM: f64 = 4.2;
const LINE_GAP_MM: f64 = 2.1;
const CONTACT_GAP_MM: f64 = 1.1;

/// The four named styles used by one CV variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSheet {
    title: StyleSpec,
    contact: StyleSpec,
    heading: StyleSpec,
    normal: StyleSpec,
}

impl StyleSheet {
    /// Plain black-on-white styles used by the English CV.
    pub fn english() -> Self {
        Self {
            title: StyleSpec::new(24)
                .bold()
                .aligned(HorizontalAlignment::Center)
                .with_space_after(LINE_GAP_MM),
            contact: StyleSpec::new(10)
                .aligned(HorizontalAlignment::Center)
                .with_space_after(CONTACT_GAP_MM),
            heading: StyleSpec::new(14)
                .bold()
                .with_space_before(HEADING_GAP_BEFORE_MM)
                .with_space_after(LINE_GAP_MM),
            normal: StyleSpec::new(10).with_space_after(LINE_GAP_MM),
        }
    }

    /// Blue-accented styles with framed headings used by the German CV.
    pub fn german() -> Self {
        Self {
            title: StyleSpec::new(24)
                .bold()
                .colored(ACCENT_BLUE)
                .aligned(HorizontalAlignment::Center)
                .with_space_after(HEADING_GAP_BEFORE_MM),
            contact: StyleSpec::new(10)
                .colored(BODY_GREY)
                .aligned(HorizontalAlignment::Center)
                .with_space_after(CONTACT_GAP_MM),
            heading: StyleSpec::new(14)
                .bold()
                .colored(ACCENT_BLUE)
                .with_space_before(HEADING_GAP_BEFORE_MM)
                .with_space_after(LINE_GAP_MM)
                .bordered(),
            normal: StyleSpec::new(10)
                .colored(BODY_GREY)
                .with_space_after(LINE_GAP_MM),
        }
    }

    /// Style of the name line at the top of the document.
    pub fn title(&self) -> StyleSpec {
        self.title
    }

    /// Style of the address and contact lines.
    pub fn contact(&self) -> StyleSpec {
        self.contact
    }

    /// Style of section headings.
    pub fn heading(&self) -> StyleSpec {
        self.heading
    }

    /// Style of body paragraphs.
    pub fn normal(&self) -> StyleSpec {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_style_reflects_flags() {
        let spec = StyleSpec::new(14).bold().colored(Color::Rgb(10, 20, 30));
        let style = spec.text_style();
        assert!(style.is_bold());
        assert!(!style.is_italic());
        assert_eq!(style.font_size(), 14);
        assert_eq!(style.color(), Some(Color::Rgb(10, 20, 30)));
    }

    #[test]
    fn headings_differ_between_variants() {
        let english = StyleSheet::english().heading();
        let german = StyleSheet::german().heading();
        assert!(!english.is_bordered());
        assert!(german.is_bordered());
        assert_eq!(english.color(), None);
        assert_eq!(german.color(), Some(ACCENT_BLUE));
        assert_eq!(english.font_size(), german.font_size());
    }

    #[test]
    fn title_is_centered_in_both_variants() {
        for sheet in [StyleSheet::english(), StyleSheet::german()] {
            assert_eq!(sheet.title().alignment(), HorizontalAlignment::Center);
            assert!(sheet.title().is_bold());
        }
    }
}
