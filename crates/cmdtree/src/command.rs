//! Declarative command tree.
//!
//! A tree is assembled once with the `with_*` builders and is read-only
//! afterwards. Parsing only ever borrows it, so one tree can serve any number
//! of concurrent parses.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::DeclarationError;
use crate::parsed::Parsed;
use crate::value::ValueType;

/// Long name and alias of the built-in help option.
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_CHAR: char = 'h';

/// Handler invoked by [`crate::run`] for the matched command. Returns the exit code.
pub type Action = Arc<dyn Fn(&Parsed) -> i32 + Send + Sync>;

/// A positional argument slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgDef {
    key: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    optional: bool,
}

impl ArgDef {
    /// A required string argument.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value_type: ValueType::default(),
            optional: false,
        }
    }

    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Mark this argument as the optional trailing slot.
    ///
    /// Once it is satisfied (present or absent) any further positional
    /// tokens are accepted without checks.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// A named option, reachable as `--name` and, with an alias, as `-c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptDef {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    char: Option<char>,
    #[serde(rename = "type")]
    value_type: ValueType,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
}

impl OptDef {
    /// A string option without alias.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            char: None,
            value_type: ValueType::default(),
            description: description.into(),
        }
    }

    pub fn with_char(mut self, c: char) -> Self {
        self.char = Some(c);
        self
    }

    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn char(&self) -> Option<char> {
        self.char
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Bool options never take a value token; presence means `true`.
    pub fn is_bool(&self) -> bool {
        self.value_type == ValueType::Bool
    }
}

/// A command node. The root of a tree is the application itself.
#[derive(Clone, Default, Serialize)]
pub struct Command {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    shortcut: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    args: Vec<ArgDef>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    options: IndexMap<String, OptDef>,
    #[serde(rename = "commands", skip_serializing_if = "Vec::is_empty")]
    children: Vec<Command>,
    #[serde(skip)]
    action: Option<Action>,
    /// Option names declared more than once, reported by `check`.
    #[serde(skip)]
    redeclared: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Alternative token that selects this command (`co` for `checkout`).
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Append a positional argument slot.
    pub fn with_arg(mut self, arg: ArgDef) -> Self {
        self.args.push(arg);
        self
    }

    /// Declare an option.
    ///
    /// Declaring the same name again replaces the earlier one for parsing,
    /// and [`Command::check`] reports it as a duplicate.
    pub fn with_option(mut self, option: OptDef) -> Self {
        if let Some(prev) = self.options.insert(option.name.clone(), option) {
            self.redeclared.push(prev.name);
        }
        self
    }

    /// Append a subcommand.
    pub fn with_command(mut self, command: Command) -> Self {
        self.children.push(command);
        self
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&Parsed) -> i32 + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &[ArgDef] {
        &self.args
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &OptDef> {
        self.options.values()
    }

    pub fn option(&self, name: &str) -> Option<&OptDef> {
        self.options.get(name)
    }

    pub fn option_by_char(&self, c: char) -> Option<&OptDef> {
        self.options.values().find(|o| o.char == Some(c))
    }

    pub fn commands(&self) -> &[Command] {
        &self.children
    }

    /// The child selected by `token`, matching either its name or its shortcut.
    pub fn command(&self, token: &str) -> Option<&Command> {
        if let Some(c) = self.children.iter().find(|c| c.name == token) {
            return Some(c);
        }
        self.children
            .iter()
            .find(|c| c.shortcut.as_deref() == Some(token))
    }

    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Check the declaration invariants of this command and all its descendants.
    ///
    /// Parsing does not require a checked tree, but an unchecked one may
    /// shadow subcommands or options silently.
    pub fn check(&self) -> Result<(), DeclarationError> {
        let path = if self.name.is_empty() {
            "app".to_string()
        } else {
            self.name.clone()
        };
        self.check_at(&path)
    }

    fn check_at(&self, path: &str) -> Result<(), DeclarationError> {
        for (idx, arg) in self.args.iter().enumerate() {
            if arg.optional && idx + 1 != self.args.len() {
                return Err(DeclarationError::MisplacedOptional {
                    command: path.to_string(),
                    key: arg.key.clone(),
                });
            }
        }

        if let Some(name) = self.redeclared.first() {
            return Err(DeclarationError::DuplicateOption {
                command: path.to_string(),
                name: name.clone(),
            });
        }

        let mut aliases: HashMap<char, &str> = HashMap::new();
        for option in self.options.values() {
            if option.name == HELP_NAME || option.char == Some(HELP_CHAR) {
                return Err(DeclarationError::ReservedOption {
                    command: path.to_string(),
                    name: option.name.clone(),
                });
            }
            let Some(c) = option.char else {
                continue;
            };
            if let Some(prev) = aliases.insert(c, &option.name) {
                return Err(DeclarationError::DuplicateAlias {
                    command: path.to_string(),
                    alias: c,
                    first: prev.to_string(),
                    second: option.name.clone(),
                });
            }
        }

        let mut tokens: HashMap<&str, &str> = HashMap::new();
        for child in &self.children {
            if child.name.is_empty() {
                return Err(DeclarationError::EmptyName {
                    command: path.to_string(),
                });
            }
            for token in std::iter::once(child.name.as_str()).chain(child.shortcut.as_deref()) {
                if let Some(prev) = tokens.insert(token, &child.name) {
                    return Err(DeclarationError::DuplicateCommand {
                        command: path.to_string(),
                        token: token.to_string(),
                        first: prev.to_string(),
                        second: child.name.clone(),
                    });
                }
            }
        }

        for child in &self.children {
            child.check_at(&format!("{path} {}", child.name))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("shortcut", &self.shortcut)
            .field("description", &self.description)
            .field("args", &self.args)
            .field("options", &self.options)
            .field("children", &self.children)
            .field("action", &self.action.as_ref().map(|_| ".."))
            .finish()
    }
}
