use honggfuzz::fuzz;

use charlist::{render_table, Table};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let table = Table::from_lines(text.lines());
                let rendered = render_table(&table);
                assert!(rendered.ends_with(b"\r\n"));
            }
        });
    }
}
