use std::collections::BTreeMap;

use serde::Serialize;

use crate::command::HELP_NAME;

/// Outcome of a successful parse (or the partial state carried by a failure).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parsed {
    invocation: Vec<String>,
    args: Vec<String>,
    options: BTreeMap<String, String>,
}

impl Parsed {
    pub(crate) fn new(
        invocation: Vec<String>,
        args: Vec<String>,
        options: BTreeMap<String, String>,
    ) -> Self {
        Self {
            invocation,
            args,
            options,
        }
    }

    /// Program base name followed by every matched command name.
    pub fn invocation(&self) -> &[String] {
        &self.invocation
    }

    /// Matched command names without the program name.
    pub fn command_path(&self) -> &[String] {
        self.invocation.get(1..).unwrap_or_default()
    }

    /// Raw positional values in encounter order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Raw option values keyed by long name. Bool options hold `"true"`.
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Whether a bool option was given.
    pub fn flag(&self, name: &str) -> bool {
        self.option(name) == Some("true")
    }

    /// Whether `--help`/`-h` short-circuited the parse.
    pub fn is_help(&self) -> bool {
        self.flag(HELP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let parsed = Parsed::new(
            vec!["git".into(), "remote".into(), "add".into()],
            vec!["origin".into()],
            BTreeMap::from([("force".to_string(), "true".to_string())]),
        );
        assert_eq!(parsed.command_path(), ["remote", "add"]);
        assert!(parsed.flag("force"));
        assert!(!parsed.flag("quiet"));
        assert_eq!(parsed.option("force"), Some("true"));
        assert!(!parsed.is_help());
    }

    #[test]
    fn command_path_of_empty_invocation() {
        assert!(Parsed::default().command_path().is_empty());
    }
}
