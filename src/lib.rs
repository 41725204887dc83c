//! Builds Saad Hasan's CV as a PDF document.
//!
//! The crate assembles an ordered sequence of content blocks from embedded
//! literal content (available in English and German) and renders it through
//! [`genpdf`].  See [`content::Language`] for the variant selector and
//! [`assembler::Assembler`] for the sequence construction.

pub mod assembler;
pub mod content;
pub mod fonts;
pub mod model;
pub mod photo;
pub mod render;
pub mod style;
