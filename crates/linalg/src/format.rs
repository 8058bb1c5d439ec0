//! Textual rendering of vectors and matrices for diagnostics
//!
//! All functions are total: empty or ragged input produces placeholder
//! text instead of an error.
//!
//! - ASCII grid: one bracketed, right-aligned row per line
//! - code literal: `{ 1.0E0, 2.5E-1 }` with scientific notation
//! - bracketed literal: `[ 1.0, 0.25 ]`

/// Placeholder for an input that cannot be rendered at all
pub const UNDEFINED: &str = "undefined";

/// Placeholder for a missing cell in a ragged matrix
pub const MISSING: &str = "err";

fn plain(value: f64) -> String {
    format!("{:?}", value)
}

fn scientific(value: f64) -> String {
    if !value.is_finite() {
        return plain(value);
    }
    let formatted = format!("{:.10e}", value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let mut mantissa = mantissa.trim_end_matches('0').to_string();
    if mantissa.ends_with('.') {
        mantissa.push('0');
    }
    format!("{}E{}", mantissa, exponent)
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}

/// One `[ value ]` line per element, values right-aligned
pub fn format_ascii_vector(v: &[f64]) -> String {
    if v.is_empty() {
        return "[ ]".to_string();
    }
    let cells: Vec<String> = v.iter().map(|&x| plain(x)).collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);
    cells
        .iter()
        .map(|cell| format!("[ {} ]\n", pad_left(cell, width)))
        .collect()
}

/// One bracketed line per row, all cells right-aligned to a common width
pub fn format_ascii_matrix(m: &[Vec<f64>]) -> String {
    if m.is_empty() {
        return UNDEFINED.to_string();
    }
    let cols = m.iter().map(Vec::len).max().unwrap_or(0);
    let cells: Vec<Vec<String>> = m
        .iter()
        .map(|row| {
            (0..cols)
                .map(|c| row.get(c).map_or_else(|| MISSING.to_string(), |&x| plain(x)))
                .collect()
        })
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in &cells {
        out.push('[');
        for cell in row {
            out.push_str(&pad_left(cell, width + 1));
        }
        out.push_str(" ]\n");
    }
    out
}

/// Source-literal form `{ 1.0E0, 2.0E0 }`
pub fn format_code_vector(v: &[f64]) -> String {
    if v.is_empty() {
        return "{ }".to_string();
    }
    let body: Vec<String> = v.iter().map(|&x| scientific(x)).collect();
    format!("{{ {} }}", body.join(", "))
}

/// Source-literal form of nested rows
pub fn format_code_matrix(m: &[Vec<f64>]) -> String {
    if m.is_empty() {
        return "{ }".to_string();
    }
    let body: Vec<String> = m.iter().map(|row| format_code_vector(row)).collect();
    format!("{{ {} }}", body.join(", "))
}

/// Bracketed literal `[ 1.0, 2.0 ]`
pub fn format_bracketed_vector(v: &[f64]) -> String {
    if v.is_empty() {
        return "[ ]".to_string();
    }
    let body: Vec<String> = v.iter().map(|&x| plain(x)).collect();
    format!("[ {} ]", body.join(", "))
}

/// Bracketed literal of nested rows
pub fn format_bracketed_matrix(m: &[Vec<f64>]) -> String {
    if m.is_empty() {
        return UNDEFINED.to_string();
    }
    let body: Vec<String> = m.iter().map(|row| format_bracketed_vector(row)).collect();
    format!("[ {} ]", body.join(", "))
}
