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

use std::io::BufRead;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use minish::{argv::Argv, lex::scan::tokenize, lex::token::Token};

/// Inspect how minish lexes command lines.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Tokens(Tokens),
    Argv(ArgvCommand),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Tokens(tokens) => tokens.run(),
            Command::Argv(argv) => argv.run(),
        }
    }
}

/// Print the tokens of a command line, one per line.
#[derive(Args, Clone, Debug)]
struct Tokens {
    /// Command line to lex.  Without it, lexes each line of standard input.
    line: Option<String>,
}

impl Tokens {
    fn run(self) -> Result<()> {
        for_each_line(self.line, |line| match tokenize(line) {
            Ok(tokens) => {
                for token in &tokens {
                    match token {
                        Token::Word(word) => println!("word\t{word}"),
                        Token::Operator(operator) => println!("operator\t{operator}"),
                        Token::End => println!("end"),
                    }
                }
            }
            Err(error) => eprintln!("minish: {error}"),
        })
    }
}

/// Print the argument vector built from a command line.
#[derive(Args, Clone, Debug)]
struct ArgvCommand {
    /// Command line to convert.  Without it, converts each line of standard
    /// input.
    line: Option<String>,
}

impl ArgvCommand {
    fn run(self) -> Result<()> {
        for_each_line(self.line, |line| match tokenize(line) {
            Ok(tokens) => {
                let argv = Argv::from_tokens(&tokens);
                for (index, arg) in argv.iter().enumerate() {
                    println!("argv[{index}] = {}", arg.to_string_lossy());
                }
            }
            Err(error) => eprintln!("minish: {error}"),
        })
    }
}

/// Applies `f` to `line` if given, otherwise to every line of standard
/// input.  A lexing failure on one line must not stop the next, so `f`
/// reports its own errors.
fn for_each_line<F>(line: Option<String>, mut f: F) -> Result<()>
where
    F: FnMut(&str),
{
    match line {
        Some(line) => f(&line),
        None => {
            for line in std::io::stdin().lock().lines() {
                f(&line?);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    Cli::parse().command.run()
}
