// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;`) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True for cells that read as a number, allowing the footnote markers and
/// unicode minus the fact sheet uses (`0.0748*`, `−244`).
pub fn looks_numeric(s: &str) -> bool {
    let t = s.trim().trim_end_matches('*').replace('\u{2212}', "-");
    !t.is_empty() && t.parse::<f64>().is_ok()
}
