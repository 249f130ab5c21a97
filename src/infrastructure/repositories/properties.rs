//! Java properties codec
//!
//! Reads any properties document: `#`/`!` comments, `=`, `:` or whitespace
//! separators, backslash escapes, line continuations and `\uXXXX` units
//! (surrogate pairs included). Writes sorted keys with every non-ASCII or
//! control character escaped, so output is plain ASCII.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use thiserror::Error;

/// Parsed properties, sorted by key
pub type Properties = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError {
    #[error("line {line}: malformed \\uXXXX escape")]
    MalformedUnicode { line: usize },
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Split on `\n`, `\r\n` or a lone `\r`.
fn natural_lines(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&input[start..]);
    }
    lines
}

fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let malformed = PropertiesError::MalformedUnicode { line };
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }
        match chars.next() {
            None => {}
            Some('t') => units.push(u16::from(b'\t')),
            Some('n') => units.push(u16::from(b'\n')),
            Some('r') => units.push(u16::from(b'\r')),
            Some('f') => units.push(0x0c),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    return Err(malformed);
                }
                let unit = u16::from_str_radix(&hex, 16).map_err(|_| malformed.clone())?;
                units.push(unit);
            }
            Some(other) => push_char(&mut units, other),
        }
    }

    String::from_utf16(&units).map_err(|_| malformed)
}

/// Parse a properties document. A repeated key keeps its last value.
pub fn parse(input: &str) -> Result<Properties, PropertiesError> {
    let lines = natural_lines(input);
    let mut props = Properties::new();
    let mut idx = 0;

    while idx < lines.len() {
        let line_no = idx + 1;
        let first = lines[idx].trim_start_matches(is_blank);
        idx += 1;
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = first.to_string();
        while continues(&logical) {
            logical.pop();
            let Some(next) = lines.get(idx) else {
                break;
            };
            logical.push_str(next.trim_start_matches(is_blank));
            idx += 1;
        }

        let (key, value) = split_key_value(&logical);
        props.insert(unescape(key, line_no)?, unescape(value, line_no)?);
    }

    Ok(props)
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if !(' '..='~').contains(&c) => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            c => out.push(c),
        }
    }
}

/// Render properties as `key=value` lines in key order.
///
/// Each line of `comment` becomes a leading `#` comment line.
pub fn render(props: &Properties, comment: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(comment) = comment {
        for line in comment.lines() {
            out.push('#');
            out.push_str(line);
            out.push('\n');
        }
    }
    for (key, value) in props {
        escape_into(&mut out, key, true);
        out.push('=');
        escape_into(&mut out, value, false);
        out.push('\n');
    }
    out
}

/// Decode bytes the way properties files are defined: ISO-8859-1.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
