//! Fixed-width character table generation from codepoint listings.
//!
//! Input is a human authored list of Unicode codepoints, one reference
//! per line, where blank or otherwise non-matching lines separate
//! multi-codepoint characters. The pipeline gathers those lines into a
//! table of characters, pads every entry to the width of the widest
//! one with U+0000 NULL codepoints, and serializes the result as UTF-8
//! text packed into CRLF-terminated lines of 16 entries each. Entry 0
//! of the table is always the empty "no character" slot.

pub mod error;
pub mod io_utils;
pub mod parse;
pub mod render;
pub mod stats;
pub mod table;

pub use error::CharlistError;
pub use parse::{parse_line, LineKind, CODEPOINT_WINDOW};
pub use render::{decode_utf32, padded_codepoints, render_table, CHARS_PER_LINE};
pub use stats::TableStats;
pub use table::{read_table, Character, Codepoint, Table, TableBuilder};
