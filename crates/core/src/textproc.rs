// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure text-processing algorithms shared by the per-repository pipeline:
//! candidate word ranking, case-preserving whole-word replacement, and
//! README excerpt selection. Kept free of I/O and of engine types so they
//! can be exercised directly in tests.

use crate::ports::SpellCheckReport;

/// Rank candidate words by `(suggestion_priority, file_count, replacement)`
/// descending, skipping words already flagged as non-words. Returns the
/// ranked word list; callers show the first N and report how many were
/// skipped.
pub fn rank_words(report: &SpellCheckReport) -> Vec<String> {
    let mut order: Vec<((u8, usize, String), String)> = report
        .iter()
        .filter(|(_, details)| !details.nonword)
        .map(|(word, details)| {
            let priority = details.suggestion.as_ref().map(|s| s.priority()).unwrap_or(0);
            let replacement = details
                .suggestion
                .as_ref()
                .and_then(|s| s.replacement())
                .unwrap_or("")
                .to_string();
            ((priority, details.files.len(), replacement), word.clone())
        })
        .collect();
    order.sort_by(|a, b| b.0.cmp(&a.0));
    order.into_iter().map(|(_, word)| word).collect()
}

/// `true` if `byte` is not an ASCII alphabetic character — the custom
/// word-boundary condition this system uses instead of Unicode `\b`.
fn is_boundary_byte(byte: u8) -> bool {
    !byte.is_ascii_alphabetic()
}

/// Replace every whole-word occurrence of `word` in `line` with
/// `replacement`, honoring a custom boundary (start/end of line or any
/// non-alphabetic byte — not Unicode word-boundary semantics) and
/// preserving the case of an initial-capital occurrence.
///
/// Operates on bytes so that lines containing non-UTF-8 content pass
/// through unmodified rather than corrupting on replacement. Returns
/// `None` if `word` does not occur.
pub fn replace_whole_word(line: &[u8], word: &str, replacement: &str) -> Option<Vec<u8>> {
    let word_bytes = word.as_bytes();
    if word_bytes.is_empty() {
        return None;
    }
    let mut result = Vec::with_capacity(line.len());
    let mut pos = 0;
    let mut found = false;

    while pos < line.len() {
        if let Some(rel) = find_at_ci(line, pos, word_bytes) {
            let start = pos + rel;
            let end = start + word_bytes.len();
            let left_ok = start == 0 || is_boundary_byte(line[start - 1]);
            let right_ok = end == line.len() || is_boundary_byte(line[end]);
            if left_ok && right_ok {
                result.extend_from_slice(&line[pos..start]);
                result.extend_from_slice(&capitalized_like(line[start], replacement));
                pos = end;
                found = true;
                continue;
            }
            // Not a real boundary match; copy past this occurrence's
            // first byte and keep scanning from the next position.
            result.extend_from_slice(&line[pos..start + 1]);
            pos = start + 1;
            continue;
        }
        result.extend_from_slice(&line[pos..]);
        pos = line.len();
    }

    if found {
        Some(result)
    } else {
        None
    }
}

/// Find the next ASCII-case-insensitive occurrence of `needle` in
/// `haystack[from..]`, returning its offset relative to `from`.
fn find_at_ci(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

/// `replacement` capitalized to match `matched_first_byte`'s case: an
/// uppercase ASCII letter capitalizes just the first character of
/// `replacement`; anything else leaves it verbatim.
fn capitalized_like(matched_first_byte: u8, replacement: &str) -> Vec<u8> {
    if matched_first_byte.is_ascii_uppercase() {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => {
                let mut out = first.to_uppercase().collect::<String>();
                out.push_str(chars.as_str());
                out.into_bytes()
            }
            None => Vec::new(),
        }
    } else {
        replacement.as_bytes().to_vec()
    }
}

/// The first `max` lines matching `^\s*[A-Za-z0-9]` (whitespace then an
/// alphanumeric character) — the "interesting lines" heuristic used to
/// excerpt a README.
pub fn first_interesting_lines(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .filter(|line| {
            line.trim_start()
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric())
        })
        .take(max)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "textproc_tests.rs"]
mod tests;
