// minish - a minimal POSIX-style shell.
// Copyright (C) 2026 The minish authors.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// One lexical unit of a command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A word: a maximal run of non-metacharacter text, possibly including
    /// quoted stretches.
    ///
    /// The text is the exact slice of the source line, quote delimiters
    /// retained verbatim.  `ab'cd'ef` lexes as one word with text
    /// `ab'cd'ef`; stripping the quotes is the expansion phase's job.
    Word(String),

    /// A control operator.
    Operator(Operator),

    /// End of input.
    ///
    /// Every token list produced by [tokenize](super::scan::tokenize) ends
    /// with exactly one of these, and only word and operator tokens come
    /// before it.
    End,
}

impl Token {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word.as_str()),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(operator) => Some(*operator),
            _ => None,
        }
    }

    pub fn is_end(&self) -> bool {
        self == &Self::End
    }

    /// The source text of the token.  [Token::End] has none.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word.as_str()),
            Self::Operator(operator) => Some(operator.as_str()),
            Self::End => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Word(word) => write!(f, "{word}"),
            Token::Operator(operator) => operator.fmt(f),
            Token::End => Ok(()),
        }
    }
}

/// A control operator symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `||`.
    OrIf,

    /// `&&`.
    AndIf,

    /// `;;`.
    DoubleSemi,

    /// `&`.
    Ampersand,

    /// `;`.
    Semicolon,

    /// `(`.
    LParen,

    /// `)`.
    RParen,

    /// `|`.
    Pipe,

    /// Newline.
    ///
    /// Listed for completeness: the scanner treats a newline as a blank
    /// before it is ever considered as an operator, so [tokenize](super::scan::tokenize)
    /// never emits this token.
    Newline,
}

impl Operator {
    /// Operators in match order.  Two-character symbols come before their
    /// one-character prefixes, so taking the first entry that prefixes the
    /// input is a longest-match scan: `&&` must never lex as `&` `&`.
    pub const TABLE: [Operator; 9] = [
        Operator::OrIf,
        Operator::AndIf,
        Operator::DoubleSemi,
        Operator::Ampersand,
        Operator::Semicolon,
        Operator::LParen,
        Operator::RParen,
        Operator::Pipe,
        Operator::Newline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrIf => "||",
            Self::AndIf => "&&",
            Self::DoubleSemi => ";;",
            Self::Ampersand => "&",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Pipe => "|",
            Self::Newline => "\n",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use crate::lex::token::{Operator, Token};

    #[test]
    fn test_display() {
        assert_eq!(Token::Word(String::from("'a b'c")).to_string(), "'a b'c");
        assert_eq!(Token::Operator(Operator::AndIf).to_string(), "&&");
        assert_eq!(Token::End.to_string(), "");
    }

    #[test]
    fn test_table_prefix_order() {
        // Any operator that is a prefix of another must come after it.
        for (i, shorter) in Operator::TABLE.iter().enumerate() {
            for longer in &Operator::TABLE[i + 1..] {
                assert!(
                    !longer.as_str().starts_with(shorter.as_str()),
                    "{shorter:?} shadows {longer:?}"
                );
            }
        }
    }
}
