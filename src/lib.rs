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

//! The input front end for minish, a minimal POSIX-style shell.
//!
//! [lex] divides a raw command line into words and control operators.
//! [argv] flattens a token list into the null-terminated argument vector
//! that an `execvp`-style call expects.  Parsing tokens into pipelines and
//! subshells, expansion, and execution itself are the caller's business.

pub mod argv;
pub mod lex;
