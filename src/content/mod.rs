//! Embedded CV content for the supported language variants.
//!
//! All biographical text lives here as literal data.  The assembler and
//! renderer are language-agnostic; picking a [`Language`] resolves the
//! content dictionary, the style sheet and the document configuration for
//! that variant.

mod english;
mod german;

use std::path::PathBuf;

use crate::model::{DocumentConfig, PageMargins, PageSize, ProjectEntry};
use crate::style::StyleSheet;

/// File the profile photo is read from, relative to the working directory.
pub const PHOTO_FILE: &str = "Saad Hasan avatar.jpg";

/// Language variants the CV can be produced in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    German,
}

impl Language {
    /// All supported variants, in build order.
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// Returns the literal content dictionary for this variant.
    pub fn content(self) -> CvContent {
        match self {
            Language::English => english::content(),
            Language::German => german::content(),
        }
    }

    /// Returns the style sheet for this variant.
    pub fn styles(self) -> StyleSheet {
        match self {
            Language::English => StyleSheet::english(),
            Language::German => StyleSheet::german(),
        }
    }

    /// Returns the page geometry and fixed file locations for this variant.
    pub fn config(self) -> DocumentConfig {
        let (title, page_size, output) = match self {
            Language::English => (
                "Saad Hasan - CV",
                PageSize::Letter,
                "Saad_Hasan_CV_Updated_English.pdf",
            ),
            Language::German => (
                "Saad Hasan - Lebenslauf",
                PageSize::A4,
                "Saad_Hasan_CV_Updated_German.pdf",
            ),
        };

        DocumentConfig {
            title: title.to_string(),
            page_size,
            margins: PageMargins::trbl(25.4, 25.4, 6.4, 25.4),
            photo_path: PathBuf::from(PHOTO_FILE),
            output_path: PathBuf::from(output),
        }
    }
}

/// The complete literal content of one CV variant.
///
/// The section fields appear in display order; the assembler walks them top
/// to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CvContent {
    pub name: &'static str,
    pub address: &'static str,
    pub contact_line: &'static str,
    pub links_line: &'static str,

    pub about_heading: &'static str,
    pub about: &'static str,

    pub skills_heading: &'static str,
    pub skills: &'static [&'static str],

    pub projects_heading: &'static str,
    pub projects_intro: &'static str,
    pub projects: &'static [ProjectEntry],

    pub experience_heading: &'static str,
    pub experience_role: &'static str,
    pub experience_period: &'static str,
    pub experience_summary: &'static str,

    pub education_heading: &'static str,
    pub education_degree: &'static str,
    pub education_period: &'static str,
    pub education_focus: &'static str,

    pub certifications_heading: &'static str,
    pub certifications: &'static [&'static str],

    pub languages_heading: &'static str,
    pub languages: &'static [&'static str],
}
