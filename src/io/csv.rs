use std::mem::take;

/// Splits a whole CSV document into records.
///
/// Quoted fields may contain commas, doubled quotes (`""` for a literal `"`)
/// and newlines, which is how free-text review columns arrive in practice.
/// Each record is returned with the 1-based line number it starts on, for
/// error reporting. Blank lines are skipped.
pub fn parse_records(text: &str) -> Vec<(usize, Vec<String>)> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_start = 1;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        current.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    current.push('\n');
                }
                _ => current.push(ch),
            }
            continue;
        }
        match ch {
            '"' if current.is_empty() => in_quotes = true,
            ',' => fields.push(take(&mut current)),
            '\r' => {}
            '\n' => {
                line += 1;
                fields.push(take(&mut current));
                if fields.len() > 1 || !fields[0].is_empty() {
                    records.push((record_start, take(&mut fields)));
                } else {
                    fields.clear();
                }
                record_start = line;
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push((record_start, fields));
    }
    records
}

/// Splits a single record line; a convenience wrapper over [`parse_records`]
/// for inputs known to hold no embedded newlines.
pub fn split_record(line: &str) -> Vec<String> {
    parse_records(line)
        .into_iter()
        .next()
        .map(|(_, fields)| fields)
        .unwrap_or_default()
}

/// Quotes a field for writing when it needs it (embedded comma, quote or
/// newline), doubling any quotes; otherwise returns it untouched.
pub fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
