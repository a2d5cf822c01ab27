//! Splits the tokens after the command path into options and positionals.
//!
//! Accepted option syntax:
//! - `--name` for bool options, `--name=value` for everything else
//! - `-c` or a bundle `-abc`; a value-taking alias must be the last character
//!   of its bundle and takes the next token as its value
//! - `--help`/`-h` anywhere stops classification and skips validation

use std::collections::BTreeMap;

use crate::command::{Command, HELP_CHAR, HELP_NAME, OptDef};
use crate::error::ParseError;

/// Result of walking the token stream.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Every token was classified.
    Finished(Tokens),
    /// A help token was reached; nothing after it was looked at.
    Help,
    /// Classification stopped at a malformed token.
    Failed(ParseError, Tokens),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Tokens {
    pub args: Vec<String>,
    pub options: BTreeMap<String, String>,
}

enum Step {
    Continue,
    Help,
}

struct Classifier<'c, 'a, S> {
    command: &'c Command,
    tokens: &'a [S],
    cursor: usize,
    out: Tokens,
}

pub(crate) fn classify<S: AsRef<str>>(command: &Command, tokens: &[S]) -> Outcome {
    Classifier {
        command,
        tokens,
        cursor: 0,
        out: Tokens::default(),
    }
    .run()
}

impl<'c, 'a, S: AsRef<str>> Classifier<'c, 'a, S> {
    fn run(mut self) -> Outcome {
        let tokens = self.tokens;
        while let Some(token) = tokens.get(self.cursor) {
            let token = token.as_ref();
            self.cursor += 1;
            tracing::trace!(token, "classifying");

            let step = if let Some(body) = token.strip_prefix("--") {
                self.long(body)
            } else if let Some(bundle) = token.strip_prefix('-').filter(|b| !b.is_empty()) {
                self.short(bundle)
            } else {
                self.out.args.push(token.to_string());
                Ok(Step::Continue)
            };

            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Help) => return Outcome::Help,
                Err(err) => return Outcome::Failed(err, self.out),
            }
        }
        Outcome::Finished(self.out)
    }

    /// `--name` or `--name=value`.
    fn long(&mut self, body: &str) -> Result<Step, ParseError> {
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        if name == HELP_NAME || name.strip_prefix(HELP_CHAR) == Some("") {
            return Ok(Step::Help);
        }

        let Some(def) = self.command.option(name) else {
            return Err(ParseError::UnknownOption(name.to_string()));
        };
        let value = match (def.is_bool(), value) {
            (true, Some(_)) => return Err(ParseError::ExplicitBoolValue(def.name().to_string())),
            (true, None) => "true",
            (false, Some(value)) => value,
            (false, None) => return Err(ParseError::MissingValue(def.name().to_string())),
        };
        self.set(def, value.to_string());
        Ok(Step::Continue)
    }

    /// One alias `-c` or a bundle `-abc`.
    fn short(&mut self, bundle: &str) -> Result<Step, ParseError> {
        let mut chars = bundle.chars().peekable();
        while let Some(c) = chars.next() {
            if c == HELP_CHAR {
                return Ok(Step::Help);
            }
            let Some(def) = self.command.option_by_char(c) else {
                return Err(ParseError::UnknownFlag(c));
            };
            if def.is_bool() {
                self.set(def, "true".to_string());
                continue;
            }
            if chars.peek().is_some() {
                return Err(ParseError::NonTerminalFlag(c));
            }
            let tokens = self.tokens;
            let Some(value) = tokens.get(self.cursor) else {
                return Err(ParseError::DanglingOption(def.name().to_string()));
            };
            self.cursor += 1;
            self.set(def, value.as_ref().to_string());
        }
        Ok(Step::Continue)
    }

    fn set(&mut self, def: &OptDef, value: String) {
        self.out.options.insert(def.name().to_string(), value);
    }
}
