//! Serialization of a frozen table into the fixed-width output format.
//!
//! Every entry is padded with U+0000 NULL codepoints to the width of the
//! widest entry, decoded to text, and written as UTF-8. Output is packed
//! into lines of exactly [`CHARS_PER_LINE`] entries, each line terminated
//! by CR LF. The final line is completed with synthetic all-NUL entries,
//! so the total entry count is always a multiple of [`CHARS_PER_LINE`]
//! and the buffer always ends with a line terminator.
//!
//! Padding is computed at render time; stored characters are never
//! mutated.

use crate::table::{Character, Codepoint, Table};

/// Number of table entries per output line.
pub const CHARS_PER_LINE: usize = 16;

/// Line terminator: U+000D CARRIAGE RETURN, U+000A LINE FEED.
const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Extend a character's codepoints with NULs up to `width`.
pub fn padded_codepoints(character: &Character, width: usize) -> Vec<Codepoint> {
    let mut cps = character.codepoints().to_vec();
    cps.resize(width.max(cps.len()), 0);
    cps
}

/// Decode a codepoint sequence as UTF-32 text. Values outside the
/// scalar range (surrogates) decode lossily to U+FFFD.
pub fn decode_utf32(codepoints: &[Codepoint]) -> String {
    codepoints
        .iter()
        .map(|&cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Accumulates rendered entries, tracking the 1..=16 position within
/// the current output line and inserting terminators on wrap.
struct LineWriter {
    buf: Vec<u8>,
    column: usize,
}

impl LineWriter {
    fn new() -> Self {
        Self {
            buf: Vec::new(),
            column: 1,
        }
    }

    fn append_character(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
        if self.column == CHARS_PER_LINE {
            self.buf.extend_from_slice(LINE_TERMINATOR);
        }
        self.column = self.column % CHARS_PER_LINE + 1;
    }

    fn at_line_start(&self) -> bool {
        self.column == 1
    }
}

/// Render the whole table, reserved entry first, into the output byte
/// buffer.
pub fn render_table(table: &Table) -> Vec<u8> {
    let width = table.max_width();
    let mut out = LineWriter::new();

    for character in table.characters() {
        out.append_character(&decode_utf32(&padded_codepoints(character, width)));
    }

    // Complete the last line with all-NUL entries of full width.
    let filler = "\0".repeat(width);
    while !out.at_line_start() {
        out.append_character(&filler);
    }

    out.buf
}
