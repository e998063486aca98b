use std::io::BufRead;

use crate::error::CharlistError;
use crate::parse::{parse_line, LineKind};

/// A single Unicode scalar value, stored as UTF-32.
pub type Codepoint = u32;

/// One table entry: an ordered run of codepoints decoded together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Character {
    codepoints: Vec<Codepoint>,
}

impl Character {
    fn new() -> Self {
        Self::default()
    }

    pub fn codepoints(&self) -> &[Codepoint] {
        &self.codepoints
    }

    /// Number of codepoints in this entry.
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    fn push(&mut self, cp: Codepoint) {
        self.codepoints.push(cp);
    }
}

/// Whether the next parsed codepoint opens a new character or extends
/// the one currently being gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ReadyForNewCharacter,
    Appending,
}

/// Gathers characters from input lines one at a time.
///
/// Entry 0 is reserved at construction as the empty "no character"
/// slot; real characters are appended after it. A separator line seals
/// the open character, and sealed characters are never reopened.
#[derive(Debug)]
pub struct TableBuilder {
    chars: Vec<Character>,
    state: ScanState,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            chars: vec![Character::new()],
            state: ScanState::ReadyForNewCharacter,
        }
    }

    /// Feed one input line through the accumulator.
    pub fn push_line(&mut self, line: &str) {
        match parse_line(line) {
            LineKind::Codepoint(cp) => {
                if self.state == ScanState::ReadyForNewCharacter {
                    self.chars.push(Character::new());
                    self.state = ScanState::Appending;
                }
                // At least the reserved entry is always present.
                if let Some(open) = self.chars.last_mut() {
                    open.push(cp);
                }
            }
            LineKind::Separator => {
                self.state = ScanState::ReadyForNewCharacter;
            }
        }
    }

    /// Seal the current character and freeze the table.
    pub fn finish(self) -> Table {
        Table { chars: self.chars }
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The frozen, ordered collection of characters destined for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    chars: Vec<Character>,
}

impl Table {
    pub fn characters(&self) -> &[Character] {
        &self.chars
    }

    /// Total number of entries, reserved slot included. Always at least 1.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Codepoint count of the widest entry, floor 1. Every entry is
    /// padded to this width when rendered.
    pub fn max_width(&self) -> usize {
        self.chars
            .iter()
            .map(Character::len)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Build a table from an in-memory sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TableBuilder::new();
        for line in lines {
            builder.push_line(line.as_ref());
        }
        builder.finish()
    }
}

/// Read lines from `input` until end of stream and gather them into a
/// frozen [`Table`].
pub fn read_table<R: BufRead>(input: R) -> Result<Table, CharlistError> {
    let mut builder = TableBuilder::new();
    for line in input.lines() {
        builder.push_line(&line?);
    }
    Ok(builder.finish())
}
