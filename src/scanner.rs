use logos::Logos;

use crate::table::Mnemonic;

/// Tokens of a mnemonic listing.
///
/// Anything that is not part of a word is a separator, so the lexer never
/// produces [TokenKind::Error] for well-formed UTF-8 input.
#[derive(PartialEq, Debug, Clone, Copy, Logos)]
pub enum TokenKind {
    #[regex(r"\w+")]
    Mnemonic,

    #[error]
    #[regex(r"\W+", logos::skip)]
    Error,
}

/// Pull every word out of `source`, in order, keeping repeats.
pub fn extract(source: &str) -> Vec<Mnemonic> {
    let mut lexer = TokenKind::lexer(source);
    let mut mnemonics = vec![];
    while let Some(token) = lexer.next() {
        if token == TokenKind::Mnemonic {
            mnemonics.push(Mnemonic::new(lexer.slice()));
        }
    }
    mnemonics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(source: &str) -> Vec<String> {
        extract(source).iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn splits_on_whitespace_and_newlines() {
        assert_eq!(words("add sub\n\tequals"), vec!["add", "sub", "equals"]);
    }

    #[test]
    fn ignores_blank_lines_and_padding() {
        let source = "\n\n   pop_ push_   \n\n  inc\n   ";
        assert_eq!(words(source), vec!["pop_", "push_", "inc"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(words("push_ pop_ push_"), vec!["push_", "pop_", "push_"]);
    }

    #[test]
    fn punctuation_is_a_separator() {
        assert_eq!(words("add,sub;(equals)-inc_n"), vec!["add", "sub", "equals", "inc_n"]);
        assert_eq!(words("load€byte"), vec!["load", "byte"]);
        assert_eq!(words("load→byte"), vec!["load", "byte"]);
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(words("push2 3way"), vec!["push2", "3way"]);
    }

    #[test]
    fn unicode_words_stay_whole() {
        assert_eq!(words("café dé_x"), vec!["café", "dé_x"]);
        assert_eq!(words("größe\tñ2"), vec!["größe", "ñ2"]);
        assert_eq!(extract("dé_x")[0].upper(), "DÉ_X");
    }

    #[test]
    fn nothing_to_extract() {
        assert!(extract("").is_empty());
        assert!(extract("  \n\t ").is_empty());
        assert!(extract("+-*/ ,.;").is_empty());
    }
}
