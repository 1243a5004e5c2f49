//! Lexer (tokenizer) for arithmetic expressions
//!
//! Splits the input on single spaces. Nothing is classified here: whether a
//! token is read as a number or an operator depends on where the parser finds
//! it, so tokens stay raw slices of the input tagged with their index.

use std::fmt;

/// A raw token borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Zero-based position in the token stream
    pub index: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, index: usize) -> Self {
        Token { text, index }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

/// Split `input` on every single space.
///
/// Consecutive or leading spaces produce empty tokens. Trailing empty tokens
/// are dropped, so `"5 + 2 "` tokenizes like `"5 + 2"` and blank input yields
/// no tokens at all.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = input
        .split(' ')
        .enumerate()
        .map(|(index, text)| Token::new(text, index))
        .collect();

    while tokens.last().is_some_and(Token::is_empty) {
        tokens.pop();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("5 + 2 - 3");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["5", "+", "2", "-", "3"]);
        assert_eq!(tokens[4].index, 4);
    }

    #[test]
    fn test_double_space_yields_empty_token() {
        let tokens = tokenize("5  + 2");
        assert_eq!(tokens.len(), 4);
        assert!(tokens[1].is_empty());
        assert_eq!(tokens[1].first_char(), None);
    }

    #[test]
    fn test_trailing_spaces_dropped() {
        let tokens = tokenize("5 + 2  ");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "2");
    }

    #[test]
    fn test_leading_space_kept() {
        let tokens = tokenize(" 5");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_empty());
    }

    #[test]
    fn test_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
