//! CMake listfile parsing.
//!
//! A tolerant scanner that extracts command invocations (name, arguments,
//! line number) from a `CMakeLists.txt`. It understands line comments,
//! quoted arguments, and multi-line invocations, which is enough structure
//! for the checks; it is not a full CMake language implementation.

use std::iter::Peekable;
use std::str::Chars;

/// One command invocation, e.g. `project(demo VERSION 1.2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmakeCommand {
    /// Command name, normalized to lowercase (CMake is case-insensitive).
    pub name: String,
    /// Arguments in source order, quotes stripped.
    pub args: Vec<String>,
    /// Line of the command name (1-indexed).
    pub line: usize,
}

/// Parse a listfile source into its command invocations.
pub fn parse(source: &str) -> Vec<CmakeCommand> {
    Parser::new(source).run()
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    fn run(mut self) -> Vec<CmakeCommand> {
        let mut commands = Vec::new();
        loop {
            self.skip_trivia();
            match self.chars.peek() {
                None => break,
                Some(c) if c.is_ascii_alphabetic() || *c == '_' => {
                    let line = self.line;
                    let name = self.read_identifier();
                    self.skip_trivia();
                    if self.chars.peek() == Some(&'(') {
                        self.bump();
                        let args = self.read_args();
                        commands.push(CmakeCommand {
                            name: name.to_lowercase(),
                            args,
                            line,
                        });
                    }
                    // An identifier without parentheses is stray text;
                    // skip it and keep scanning.
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        commands
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.chars.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if *c == '#' {
                while let Some(c) = self.chars.peek() {
                    if *c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || *c == '_' {
                ident.push(*c);
                self.bump();
            } else {
                break;
            }
        }
        ident
    }

    fn read_args(&mut self) -> Vec<String> {
        let mut args = Vec::new();
        let mut current = String::new();
        let mut depth = 1usize;

        while let Some(c) = self.chars.peek().copied() {
            match c {
                ')' => {
                    self.bump();
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    flush(&mut args, &mut current);
                }
                '(' => {
                    // Nested parentheses group condition clauses; the
                    // grouping itself is irrelevant to the checks.
                    self.bump();
                    depth += 1;
                    flush(&mut args, &mut current);
                }
                '"' => {
                    self.bump();
                    args.push(self.read_quoted());
                }
                '#' => {
                    flush(&mut args, &mut current);
                    while let Some(c) = self.chars.peek() {
                        if *c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                c if c.is_whitespace() => {
                    self.bump();
                    flush(&mut args, &mut current);
                }
                c => {
                    current.push(c);
                    self.bump();
                }
            }
        }
        flush(&mut args, &mut current);
        args
    }

    fn read_quoted(&mut self) -> String {
        let mut value = String::new();
        while let Some(c) = self.bump() {
            match c {
                '"' => break,
                '\\' => {
                    if let Some(escaped) = self.bump() {
                        value.push(escaped);
                    }
                }
                c => value.push(c),
            }
        }
        value
    }
}

fn flush(args: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        args.push(std::mem::take(current));
    }
}
