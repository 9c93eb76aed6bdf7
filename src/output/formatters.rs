//! Formatting utilities for terminal output

/// Lay words out in balanced columns, filled top-to-bottom
///
/// Returns one string per row, columns padded to their widest word and
/// separated by two spaces, trailing whitespace removed.
#[must_use]
pub fn columnize(words: &[String], columns: usize) -> Vec<String> {
    if words.is_empty() || columns == 0 {
        return Vec::new();
    }

    let rows = words.len().div_ceil(columns);
    let column_chunks: Vec<&[String]> = words.chunks(rows).collect();
    let widths: Vec<usize> = column_chunks
        .iter()
        .map(|chunk| chunk.iter().map(String::len).max().unwrap_or(0))
        .collect();

    (0..rows)
        .map(|row| {
            let mut line = String::new();
            for (chunk, &width) in column_chunks.iter().zip(&widths) {
                let word = chunk.get(row).map_or("", String::as_str);
                line.push_str(&format!("{word:<width$}  "));
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Format a character count as a compact size
#[must_use]
pub fn format_chars(count: f64) -> String {
    if count >= 1024.0 {
        format!("{:.1} KiB", count / 1024.0)
    } else {
        format!("{count:.1} chars")
    }
}
