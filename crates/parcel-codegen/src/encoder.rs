use std::fmt::Write;

/// Soft line-length limit for the byte literal block.
pub const WRAP_THRESHOLD: usize = 60;

/// Prefix for each fresh line: two indent levels.
pub const INDENT: &str = "\t\t";

/// Render `data` as comma-separated decimal literals, wrapped into lines.
///
/// A line is flushed once it reaches [`WRAP_THRESHOLD`] characters, checked
/// only after a whole `"N, "` token has been appended, so numbers are never
/// split. Whatever remains at the end is flushed as the last line, even when
/// empty. Trailing whitespace is trimmed from every emitted line.
pub fn encode(data: &[u8]) -> String {
    let mut prepared = String::new();
    let mut buffer = String::new();

    for byte in data {
        if buffer.is_empty() {
            buffer.push_str(INDENT);
        }

        // Formatting into a String cannot fail.
        let _ = write!(buffer, "{byte}, ");

        if buffer.len() >= WRAP_THRESHOLD {
            prepared.push_str(buffer.trim_end());
            prepared.push('\n');
            buffer.clear();
        }
    }

    prepared.push_str(buffer.trim_end());
    prepared.push('\n');
    prepared
}
