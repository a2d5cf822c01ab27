use thiserror::Error;

use crate::parsed::Parsed;
use crate::value::ValueType;

/// Why an argument vector was rejected.
///
/// The variant is the error kind; `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown flag -{0}")]
    UnknownFlag(char),

    #[error("unknown option --{0}")]
    UnknownOption(String),

    /// Positional tokens left over after every declared slot was filled.
    #[error("unknown arguments [{}]", .0.join(" "))]
    UnknownArguments(Vec<String>),

    #[error("missing required argument {0}")]
    MissingArgument(String),

    /// A value-taking alias appeared before the last character of a bundle.
    #[error("non-boolean flag -{0} in non-terminal position")]
    NonTerminalFlag(char),

    /// `--name` for a value-taking option without `=value`.
    #[error("missing value for option --{0}")]
    MissingValue(String),

    /// A value-taking short alias was the last token of the invocation.
    #[error("dangling option --{0}")]
    DanglingOption(String),

    #[error("boolean options have true assigned implicitly, found value for --{0}")]
    ExplicitBoolValue(String),

    #[error("argument {} must be {}, found {}", .key, .expected.noun(), .value)]
    ArgumentType {
        key: String,
        expected: ValueType,
        value: String,
    },

    #[error("option --{} must be given {}, found {}", .name, .expected.noun(), .value)]
    OptionType {
        name: String,
        expected: ValueType,
        value: String,
    },
}

/// A rejected parse: the error plus everything understood before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ParseFailure {
    error: ParseError,
    partial: Parsed,
}

impl ParseFailure {
    pub(crate) fn new(error: ParseError, partial: Parsed) -> Self {
        Self { error, partial }
    }

    pub fn error(&self) -> &ParseError {
        &self.error
    }

    /// Invocation, positionals and options accumulated up to the failing step.
    pub fn partial(&self) -> &Parsed {
        &self.partial
    }

    pub fn into_parts(self) -> (ParseError, Parsed) {
        (self.error, self.partial)
    }
}

/// A malformed command tree, reported by [`crate::Command::check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("command {command}: subcommand name must not be empty")]
    EmptyName { command: String },

    #[error("command {command}: `{token}` selects both {first} and {second}")]
    DuplicateCommand {
        command: String,
        token: String,
        first: String,
        second: String,
    },

    #[error("command {command}: option --{name} is declared more than once")]
    DuplicateOption { command: String, name: String },

    #[error("command {command}: option alias -{alias} maps to both --{first} and --{second}")]
    DuplicateAlias {
        command: String,
        alias: char,
        first: String,
        second: String,
    },

    #[error("command {command}: option --{name} shadows the built-in help")]
    ReservedOption { command: String, name: String },

    #[error("command {command}: only the last argument may be optional, found optional {key}")]
    MisplacedOptional { command: String, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_documented_shapes() {
        let cases = [
            (ParseError::UnknownFlag('f'), "unknown flag -f"),
            (
                ParseError::UnknownOption("foo".into()),
                "unknown option --foo",
            ),
            (
                ParseError::UnknownArguments(vec!["a".into(), "b".into()]),
                "unknown arguments [a b]",
            ),
            (
                ParseError::MissingArgument("arg1".into()),
                "missing required argument arg1",
            ),
            (
                ParseError::NonTerminalFlag('p'),
                "non-boolean flag -p in non-terminal position",
            ),
            (
                ParseError::MissingValue("pi".into()),
                "missing value for option --pi",
            ),
            (
                ParseError::DanglingOption("pi".into()),
                "dangling option --pi",
            ),
            (
                ParseError::ExplicitBoolValue("force".into()),
                "boolean options have true assigned implicitly, found value for --force",
            ),
            (
                ParseError::ArgumentType {
                    key: "count".into(),
                    expected: ValueType::Int,
                    value: "3.14".into(),
                },
                "argument count must be an integer value, found 3.14",
            ),
            (
                ParseError::OptionType {
                    name: "pi".into(),
                    expected: ValueType::Number,
                    value: "aaa".into(),
                },
                "option --pi must be given a number, found aaa",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn failure_displays_inner_error() {
        let failure = ParseFailure::new(ParseError::UnknownFlag('x'), Parsed::default());
        assert_eq!(failure.to_string(), "unknown flag -x");
        let (err, partial) = failure.into_parts();
        assert_eq!(err, ParseError::UnknownFlag('x'));
        assert!(partial.args().is_empty());
    }
}
