use std::borrow::Cow;

const BOM: char = '\u{feff}';

/// Strips a leading byte-order mark and converts CRLF line endings to LF.
///
/// Every scanner runs over normalized text, so a CRLF document and its LF
/// twin produce the same deck and the same line numbers.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Splits normalized text into lines the way an editor numbers them.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so
/// the number of lines always equals the number of `\n` plus one.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Returns true if the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
