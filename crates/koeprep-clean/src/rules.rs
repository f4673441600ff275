use std::sync::LazyLock;

use regex::Regex;

/// Ordered annotation-stripping rules, compiled once.
///
/// The order is load-bearing: the line-anchored indentation rule assumes CRLF
/// pairs are already collapsed, and the colophon rule must run on whatever the
/// earlier rules left behind.
static STRIP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Indentation directive plus the rest of its line: ［＃３字下げ］...
        (Regex::new(r"(?m)［＃[０-９]+字下げ］.+$").unwrap(), ""),
        // Ruby-base marker.
        (Regex::new(r"｜").unwrap(), ""),
        // Bracketed annotation span; shortest match keeps adjacent spans separate.
        (Regex::new(r"［.+?］").unwrap(), ""),
        // Reading-gloss span, same rationale.
        (Regex::new(r"《.+?》").unwrap(), ""),
        // Hyphenation artifact: text, a hyphen, then a blank line. Greedy across
        // the whole document, newlines included.
        (Regex::new(r"(?s).+-\n\n").unwrap(), ""),
        // Colophon marker through end of file.
        (Regex::new(r"(?s)底本：.+").unwrap(), ""),
    ]
});

/// Apply the cleanup pipeline to decoded corpus text.
///
/// CRLF normalization runs first; every later rule assumes LF-only input.
pub fn clean_text(input: &str) -> String {
    let mut output = input.replace("\r\n", "\n");
    for (pattern, replacement) in STRIP_RULES.iter() {
        output = pattern.replace_all(&output, *replacement).to_string();
    }
    output
}
