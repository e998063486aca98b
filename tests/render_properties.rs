use proptest::prelude::*;

use charlist::{
    decode_utf32, padded_codepoints, parse_line, render_table, LineKind, Table, TableStats,
    CHARS_PER_LINE,
};

proptest! {
    #[test]
    fn parsed_codepoints_stay_in_unicode_range(line in "\\PC{0,12}") {
        if let LineKind::Codepoint(cp) = parse_line(&line) {
            prop_assert!(cp <= 0x10FFFF);
        }
    }

    #[test]
    fn rendered_size_matches_the_layout(lines in prop::collection::vec("[ -~]{0,10}", 0..48)) {
        let table = Table::from_lines(&lines);
        let rendered = render_table(&table);

        let width = table.max_width();
        let entries = table.len();
        let out_lines = (entries + CHARS_PER_LINE - 1) / CHARS_PER_LINE;
        let filler = out_lines * CHARS_PER_LINE - entries;

        // Each real entry contributes the UTF-8 size of its padded
        // decode, each filler entry one NUL byte per codepoint, each
        // line two terminator bytes.
        let real_bytes: usize = table
            .characters()
            .iter()
            .map(|c| decode_utf32(&padded_codepoints(c, width)).len())
            .sum();
        prop_assert_eq!(rendered.len(), real_bytes + filler * width + out_lines * 2);
        prop_assert!(rendered.ends_with(b"\r\n"));
    }

    #[test]
    fn every_entry_decodes_to_exactly_max_width_scalars(lines in prop::collection::vec("[0-9A-Fa-f]{0,6}", 0..32)) {
        let table = Table::from_lines(&lines);
        let width = table.max_width();
        for character in table.characters() {
            let text = decode_utf32(&padded_codepoints(character, width));
            prop_assert_eq!(text.chars().count(), width);
        }
    }

    #[test]
    fn reserved_entry_renders_as_nuls(lines in prop::collection::vec("[ -~]{0,10}", 0..32)) {
        let table = Table::from_lines(&lines);
        let rendered = render_table(&table);
        let width = table.max_width();
        // The reserved entry is first in the buffer: one NUL byte per
        // codepoint of table width.
        prop_assert!(rendered[..width].iter().all(|&b| b == 0));
    }

    #[test]
    fn separator_lines_never_open_entries(lines in prop::collection::vec("[g-z #;]{0,8}", 0..16)) {
        let table = Table::from_lines(&lines);
        prop_assert_eq!(table.len(), 1);
        prop_assert!(table.characters()[0].is_empty());
    }

    #[test]
    fn stats_agree_with_the_buffer(lines in prop::collection::vec("[ -~]{0,10}", 0..48)) {
        let table = Table::from_lines(&lines);
        let rendered = render_table(&table);
        let stats = TableStats::collect(&table, &rendered);

        prop_assert_eq!(stats.characters, table.len());
        prop_assert_eq!(stats.real_characters, table.len() - 1);
        prop_assert_eq!(stats.max_width, table.max_width());
        prop_assert_eq!(stats.output_bytes, rendered.len());
        prop_assert_eq!(stats.lines, (table.len() + CHARS_PER_LINE - 1) / CHARS_PER_LINE);
    }
}
