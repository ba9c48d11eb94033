//! CSV splitting for word lists
//!
//! Std-only so the build script can compile the same parser with `#[path]`.

/// Name of the header column holding the words
pub const WORD_COLUMN: &str = "Word";

/// Problems with a word list's header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    Missing,
    NoWordColumn,
}

/// The `Word` cells of a CSV document, in file order
///
/// A leading BOM is ignored. Rows whose `Word` cell is empty or missing are
/// skipped; cells are otherwise returned verbatim.
pub fn word_cells(content: &str) -> Result<Vec<String>, HeaderError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();

    let header = lines.next().ok_or(HeaderError::Missing)?;
    let column = parse_record(header)
        .iter()
        .position(|name| name.trim() == WORD_COLUMN)
        .ok_or(HeaderError::NoWordColumn)?;

    let cells = lines
        .filter_map(|line| {
            let mut fields = parse_record(line);
            (column < fields.len()).then(|| fields.swap_remove(column))
        })
        .filter(|cell| !cell.is_empty())
        .collect();

    Ok(cells)
}

/// Split one CSV line into fields
///
/// Quoted fields may contain commas and `""` escapes.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);

    fields
}
