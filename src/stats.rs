//! Summary figures for a rendered table.
//!
//! `TableStats` is computed after rendering and reported either as a
//! human readable stderr summary or as machine readable JSON.

use serde::Serialize;

use crate::render::CHARS_PER_LINE;
use crate::table::Table;

#[derive(Debug, Clone, Serialize)]
pub struct TableStats {
    /// Total entries rendered from the table, reserved slot included.
    pub characters: usize,
    /// Entries gathered from the input, reserved slot excluded.
    pub real_characters: usize,
    /// Codepoint width every entry was padded to.
    pub max_width: usize,
    /// Output lines, trailing filler entries included.
    pub lines: usize,
    /// Size of the output buffer in bytes.
    pub output_bytes: usize,
}

impl TableStats {
    /// Collect figures from a frozen table and its rendered buffer.
    pub fn collect(table: &Table, rendered: &[u8]) -> Self {
        let characters = table.len();
        Self {
            characters,
            real_characters: characters - 1,
            max_width: table.max_width(),
            lines: (characters + CHARS_PER_LINE - 1) / CHARS_PER_LINE,
            output_bytes: rendered.len(),
        }
    }

    /// Print a short summary to stderr.
    pub fn report(&self) {
        eprintln!(
            "Table: {} characters ({} from input), {} codepoints wide",
            self.characters, self.real_characters, self.max_width
        );
        eprintln!("Output: {} bytes in {} lines", self.output_bytes, self.lines);
    }
}
