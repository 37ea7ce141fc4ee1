//! Plain-text deck-list parsing.
//!
//! ## Format
//!
//! ```text
//! # comment
//! 2 AntQueen
//! 5x LMR
//! DerangedResearcher      <- count defaults to 1
//! ```
//!
//! Blank lines and lines starting with `#` or `//` are skipped. Every
//! malformed line is reported, not just the first.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cards::CardRequest;
use crate::core::AssetId;

/// A malformed deck-list line (1-based line numbers) or an unreadable file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: count `{count}` has no card name")]
    MissingName { line: usize, count: String },

    #[error("line {line}: invalid card count `{count}`")]
    InvalidCount { line: usize, count: String },

    #[error("could not read deck list {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

/// Parse a deck list into ordered card requests.
///
/// ```
/// use tabletop_deck::decklist::parse_deck_list;
///
/// let requests = parse_deck_list("2 AntQueen\n\n5x LMR\nDerangedResearcher\n").unwrap();
/// assert_eq!(requests.len(), 3);
/// assert_eq!(requests[1].count, 5);
/// assert_eq!(requests[2].count, 1);
/// ```
pub fn parse_deck_list(text: &str) -> Result<Vec<CardRequest>, Vec<ParseError>> {
    let mut requests = Vec::new();
    let mut errors = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        match parse_line(line, index + 1) {
            Ok((count, name)) => {
                let position = requests.len();
                requests.push(CardRequest::new(AssetId::new(name), count, position));
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(requests)
    } else {
        Err(errors)
    }
}

/// Read and parse a deck-list file.
pub fn parse_deck_file(path: impl AsRef<Path>) -> Result<Vec<CardRequest>, Vec<ParseError>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        vec![ParseError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        }]
    })?;
    parse_deck_list(&text)
}

fn parse_line(line: &str, line_no: usize) -> Result<(u32, &str), ParseError> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let digits = head.strip_suffix(['x', 'X']).unwrap_or(head);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        // No leading count: the whole line is the name
        return Ok((1, line));
    }

    let count = digits.parse::<u32>().map_err(|_| ParseError::InvalidCount {
        line: line_no,
        count: head.to_string(),
    })?;
    if rest.is_empty() {
        return Err(ParseError::MissingName {
            line: line_no,
            count: head.to_string(),
        });
    }
    Ok((count, rest))
}
