//! Environment variable validation with helpful warnings
//!
//! Invalid values never abort a run: the validator prints a warning
//! (with a typo suggestion when one is close) and keeps the fallback.

use std::io::Write;

/// Validator for a single `PROGMEM_*` environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expected: &'a str,
    candidates: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// `expected` describes accepted values in the warning text.
    pub fn new(var_name: &'a str, expected: &'a str) -> Self {
        Self {
            var_name,
            expected,
            candidates: &[],
        }
    }

    /// Spellings offered as "did you mean" suggestions.
    pub fn with_candidates(mut self, candidates: &'a [&'a str]) -> Self {
        self.candidates = candidates;
        self
    }

    /// Parse a value, returning `fallback` (with a warning on stderr) if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse with a custom writer (for testing)
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value.trim()) {
            Some(parsed) => parsed,
            None => {
                let suggestion = self.suggest(value);
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name, value, suggestion
                );
                let _ = writeln!(writer, "Expected: {}", self.expected);
                fallback
            }
        }
    }

    fn suggest(&self, value: &str) -> String {
        match closest(&value.trim().to_lowercase(), self.candidates) {
            Some((suggested, dist)) if dist > 0 => format!(". Did you mean '{}'?", suggested),
            _ => String::new(),
        }
    }
}

/// Closest candidate within two edits, with its distance
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<(&'c str, usize)> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    let b_len = b_bytes.len();

    if a_bytes.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
