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

//! Command-line scanning.
//!
//! [Scanner] walks a line left to right.  At each position it consumes a run
//! of blanks (which yield no token), a control operator, or a word, in that
//! priority order.  [tokenize] drives the scanner over a whole line and
//! appends the [Token::End] marker.
//!
//! Scanning never recovers from malformed input: an unterminated quote or a
//! character outside the input alphabet ends the scan with a [ScanError]
//! and no token list.

use thiserror::Error as ThisError;

use super::token::{Operator, Token};

#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// Unterminated single-quoted string.
    #[error("Unterminated single-quoted string.")]
    UnclosedSingleQuote,

    /// Unterminated double-quoted string.
    #[error("Unterminated double-quoted string.")]
    UnclosedDoubleQuote,

    /// Unexpected character.
    ///
    /// Reachable for `<` and `>`, which separate words without being control
    /// operators (redirection is not supported), and for an embedded NUL,
    /// which is outside the input alphabet.
    #[error("Unexpected character {0:?} in input.")]
    UnexpectedChar(char),
}

/// Returns true for a space, tab, or newline.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Returns true for a character that, when unquoted, separates words.
pub fn is_metacharacter(c: char) -> bool {
    matches!(
        c,
        '|' | '&' | ';' | '(' | ')' | '<' | '>' | ' ' | '\t' | '\n'
    )
}

/// Quoting state during a word scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum QuoteState {
    /// Outside any quotes.
    Bare,

    /// Between single quotes.  Every character is literal, double quotes
    /// and metacharacters included.
    SingleQuoted,

    /// Between double quotes.  Single quotes inside are literal.
    DoubleQuoted,
}

/// An iterator over the word and operator tokens of a command line.
///
/// Yields tokens in source order.  Does not yield [Token::End]; use
/// [tokenize] for a terminated token list.  After yielding an error the
/// scanner is exhausted.
pub struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Advances past consecutive blanks.  Blanks produce no token, so a
    /// newline is consumed here before it can match the operator table.
    fn take_blanks(&mut self) {
        self.rest = self.rest.trim_start_matches(is_blank);
    }

    /// Looks up the operator, if any, at the head of the remaining input.
    /// The first prefix match in [Operator::TABLE] is the longest match.
    fn peek_operator(&self) -> Option<Operator> {
        Operator::TABLE
            .iter()
            .copied()
            .find(|operator| self.rest.starts_with(operator.as_str()))
    }

    fn take_operator(&mut self, operator: Operator) -> Token {
        self.rest = &self.rest[operator.as_str().len()..];
        Token::Operator(operator)
    }

    /// Scans a word: everything from the current position up to the next
    /// metacharacter outside quotes, or the end of input.  The token text is
    /// the exact source slice, quote delimiters included.
    fn take_word(&mut self) -> Result<Token, ScanError> {
        let mut state = QuoteState::Bare;
        let mut indices = self.rest.char_indices();
        let end = loop {
            let Some((offset, c)) = indices.next() else {
                break match state {
                    QuoteState::Bare => self.rest.len(),
                    QuoteState::SingleQuoted => return Err(ScanError::UnclosedSingleQuote),
                    QuoteState::DoubleQuoted => return Err(ScanError::UnclosedDoubleQuote),
                };
            };
            if c == '\0' {
                return Err(ScanError::UnexpectedChar(c));
            }
            match state {
                QuoteState::Bare if is_metacharacter(c) => break offset,
                QuoteState::Bare if c == '\'' => state = QuoteState::SingleQuoted,
                QuoteState::Bare if c == '"' => state = QuoteState::DoubleQuoted,
                QuoteState::SingleQuoted if c == '\'' => state = QuoteState::Bare,
                QuoteState::DoubleQuoted if c == '"' => state = QuoteState::Bare,
                _ => (),
            }
        };
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(Token::Word(word.into()))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_blanks();
        let c = self.rest.chars().next()?;
        let result = if let Some(operator) = self.peek_operator() {
            Ok(self.take_operator(operator))
        } else if !is_metacharacter(c) && c != '\0' {
            self.take_word()
        } else {
            // `<`, `>`, or NUL: a metacharacter with no operator meaning
            // cannot start a word either.
            Err(ScanError::UnexpectedChar(c))
        };
        if result.is_err() {
            self.rest = "";
        }
        Some(result)
    }
}

/// Divides `line` into tokens.
///
/// Returns the word and operator tokens in source order, terminated by
/// exactly one [Token::End].  Blank-only input yields just the marker.  On
/// malformed input no token list is returned at all.
pub fn tokenize(line: &str) -> Result<Vec<Token>, ScanError> {
    let mut tokens = Scanner::new(line).collect::<Result<Vec<_>, _>>()?;
    tokens.push(Token::End);
    Ok(tokens)
}
