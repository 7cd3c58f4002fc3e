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

//! Command-line lexical analysis.
//!
//! [token] defines the token types and [scan] the scanner that produces
//! them.  Scanning classifies each position in the line as blank, control
//! operator, or word, and consumes exactly one token per step.  Quotes group
//! characters into a single word but are otherwise untouched: quote removal
//! belongs to the expansion phase, downstream of this module.

pub mod scan;
pub mod token;
