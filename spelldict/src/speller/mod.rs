//! Line-oriented spell checking against a dictionary.
//!
//! Each input line is tokenized on whitespace and every token is
//! looked up in the dictionary; unrecognized tokens are rendered with
//! a trailing marker. Line grouping and token order are preserved.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::tokenizer::Tokenize;

/// Marker appended to tokens missing from the dictionary.
pub const MISSPELLED_MARKER: &str = "[X]";

/// Outcome of spell checking one input.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// One rendered line per input line: tokens space-joined, each
    /// unrecognized token suffixed with [`MISSPELLED_MARKER`].
    pub lines: Vec<String>,
    /// True when every token across the whole input was recognized.
    pub all_correct: bool,
}

/// Checks every token of `reader` against the dictionary.
///
/// `None` for the dictionary is the degenerate case where no token can
/// be validated: every token is marked, and the report is clean only
/// if the input held no tokens at all.
pub fn check_reader<R: BufRead>(
    dictionary: Option<&Dictionary>,
    reader: R,
) -> io::Result<CheckReport> {
    let mut lines = Vec::new();
    let mut all_correct = true;

    for line in reader.lines() {
        let line = line?;
        let mut rendered: Vec<String> = Vec::new();

        for token in line.tokens() {
            let known = dictionary.map_or(false, |dict| dict.contains(token));
            if known {
                rendered.push(token.to_string());
            } else {
                all_correct = false;
                rendered.push(format!("{}{}", token, MISSPELLED_MARKER));
            }
        }

        lines.push(rendered.join(" "));
    }

    Ok(CheckReport { lines, all_correct })
}

/// Opens a text file and spell checks it. Fails only when the file
/// cannot be opened or read.
pub fn check_path<P: AsRef<Path>>(
    dictionary: Option<&Dictionary>,
    path: P,
) -> io::Result<CheckReport> {
    let file = File::open(path)?;
    check_reader(dictionary, BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn dict_of(words: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new();
        for word in words {
            dict.insert(word).unwrap();
        }
        dict
    }

    #[test]
    fn unknown_token_is_marked() {
        let dict = dict_of(&["the", "fox"]);
        let report = check_reader(Some(&dict), Cursor::new("the qwrty fox")).unwrap();

        assert_eq!(report.lines, ["the qwrty[X] fox"]);
        assert!(!report.all_correct);
    }

    #[test]
    fn fully_recognized_input_is_clean() {
        let dict = dict_of(&["the", "fox"]);
        let report = check_reader(Some(&dict), Cursor::new("the fox\nfox the\n")).unwrap();

        assert_eq!(report.lines, ["the fox", "fox the"]);
        assert!(report.all_correct);
    }

    #[test]
    fn line_grouping_is_preserved() {
        let dict = dict_of(&["the", "fox"]);
        let report = check_reader(Some(&dict), Cursor::new("the fox\nqwrty\n")).unwrap();

        assert_eq!(report.lines, ["the fox", "qwrty[X]"]);
        assert!(!report.all_correct);
    }

    #[test]
    fn missing_dictionary_marks_every_token() {
        let report = check_reader(None, Cursor::new("the fox")).unwrap();

        assert_eq!(report.lines, ["the[X] fox[X]"]);
        assert!(!report.all_correct);
    }

    #[test]
    fn empty_input_is_vacuously_clean() {
        let dict = dict_of(&["the"]);
        let report = check_reader(Some(&dict), Cursor::new("")).unwrap();

        assert!(report.lines.is_empty());
        assert!(report.all_correct);

        // Still vacuously clean with no dictionary at all.
        let report = check_reader(None, Cursor::new("")).unwrap();
        assert!(report.all_correct);
    }

    #[test]
    fn unopenable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");

        assert!(check_path(None, &missing).is_err());
    }
}
