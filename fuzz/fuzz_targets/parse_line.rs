use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(line) = std::str::from_utf8(data) {
                if let charlist::LineKind::Codepoint(cp) = charlist::parse_line(line) {
                    assert!(cp <= 0x10FFFF);
                }
            }
        });
    }
}
