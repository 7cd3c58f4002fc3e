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

//! Conversion of token lists into executable argument vectors.

use std::ffi::{CStr, CString};

use libc::c_char;

use crate::lex::token::Token;

/// An owned argument vector, the shape that `execvp`-style calls expect.
///
/// Holds a copy of each argument as a null-terminated string; the vector is
/// independent of whatever the arguments were built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Argv {
    args: Vec<CString>,
}

impl Argv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an argument vector from the tokens before the first
    /// [Token::End], in order.  Each entry is a copy of its token's text: a
    /// word verbatim, quotes included, or an operator symbol.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut argv = Self::new();
        for token in tokens {
            match token {
                Token::Word(word) => {
                    // The scanner rejects NUL, so the text has no interior
                    // NUL byte.
                    argv.push(CString::new(word.as_str()).unwrap());
                }
                Token::Operator(operator) => {
                    argv.push(CString::new(operator.as_str()).unwrap());
                }
                Token::End => break,
            }
        }
        argv
    }

    pub fn push(&mut self, arg: CString) {
        self.args.push(arg);
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CStr> {
        self.args.iter().map(|arg| arg.as_c_str())
    }

    /// The C-style vector: one pointer per argument plus the null sentinel,
    /// so an empty `Argv` yields a single null pointer.  The pointers borrow
    /// from `self` and are valid only until it is modified or dropped.
    pub fn as_exec_vector(&self) -> Vec<*const c_char> {
        self.args
            .iter()
            .map(|arg| arg.as_ptr())
            .chain(std::iter::once(std::ptr::null()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use crate::{
        argv::Argv,
        lex::{
            scan::tokenize,
            token::{Operator, Token},
        },
    };

    fn entries(argv: &Argv) -> Vec<&str> {
        argv.iter().map(|arg| arg.to_str().unwrap()).collect()
    }

    #[test]
    fn test_from_tokens() {
        let tokens = tokenize("echo 'a b' | wc -l").unwrap();
        let argv = Argv::from_tokens(&tokens);
        assert_eq!(entries(&argv), ["echo", "'a b'", "|", "wc", "-l"]);
        assert_eq!(argv.len(), 5);
    }

    #[test]
    fn test_empty_list() {
        let argv = Argv::from_tokens(&[Token::End]);
        assert!(argv.is_empty());
        assert_eq!(argv.as_exec_vector(), [std::ptr::null()]);
    }

    #[test]
    fn test_stops_at_end_marker() {
        let tokens = [
            Token::Word(String::from("a")),
            Token::End,
            Token::Word(String::from("b")),
        ];
        assert_eq!(entries(&Argv::from_tokens(&tokens)), ["a"]);
    }

    #[test]
    fn test_exec_vector_shape() {
        let tokens = tokenize("ls -a && pwd").unwrap();
        let argv = Argv::from_tokens(&tokens);
        let vector = argv.as_exec_vector();
        assert_eq!(vector.len(), argv.len() + 1);
        assert_eq!(vector.last(), Some(&std::ptr::null()));
        assert!(vector[..argv.len()].iter().all(|ptr| !ptr.is_null()));
    }

    #[test]
    fn test_copies_are_independent() {
        let tokens = vec![Token::Operator(Operator::Pipe), Token::End];
        let argv = Argv::from_tokens(&tokens);
        drop(tokens);
        assert_eq!(entries(&argv), ["|"]);
    }

    #[test]
    fn test_push() {
        let mut argv = Argv::new();
        argv.push(CString::new("cat").unwrap());
        argv.push(CString::new("-").unwrap());
        assert_eq!(entries(&argv), ["cat", "-"]);
    }
}
