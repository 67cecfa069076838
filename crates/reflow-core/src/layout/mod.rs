//! Layout reconstruction: positioned fragments to lines, lines to blocks.

pub mod lines;
pub mod paragraphs;

pub use lines::{line_key, reconstruct};
pub use paragraphs::{assemble, assemble_with_font_size};
