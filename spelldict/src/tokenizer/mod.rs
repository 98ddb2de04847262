//! Whitespace tokenization shared by dictionary loading and spell
//! checking.

use std::str::SplitWhitespace;

/// Splits text into maximal runs of non-whitespace characters.
pub trait Tokenize {
    /// Iterator over the tokens of this text, in order.
    fn tokens(&self) -> SplitWhitespace;
}

impl Tokenize for str {
    fn tokens(&self) -> SplitWhitespace {
        self.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace_run() {
        let tokens: Vec<&str> = "  the\tquick  fox\n".tokens().collect();
        assert_eq!(tokens, ["the", "quick", "fox"]);
    }

    #[test]
    fn blank_text_yields_no_tokens() {
        assert_eq!("".tokens().next(), None);
        assert_eq!("   \t ".tokens().next(), None);
    }
}
