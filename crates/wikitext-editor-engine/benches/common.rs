// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wikitext_page(sections: usize) -> String {
    let section = "==Section==\nIntro with '''bold''', ''italic'' and {{cite web|url=x}}.<ref>Source</ref>\n\
                   *first point\n**nested point\n#numbered <sup>1</sup>\n\n";
    section.repeat(sections)
}

/// Offset of the first `needle` in `text`, for placing cursors.
#[allow(dead_code)]
pub fn offset_of(text: &str, needle: &str) -> usize {
    text.find(needle).unwrap_or(0)
}
