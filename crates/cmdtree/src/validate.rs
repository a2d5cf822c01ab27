use std::collections::BTreeMap;

use crate::command::{ArgDef, Command};
use crate::error::ParseError;

/// Check classified tokens against the command's declarations.
///
/// Positionals are checked before options and the first failure is returned.
pub(crate) fn validate(
    command: &Command,
    args: &[String],
    options: &BTreeMap<String, String>,
) -> Result<(), ParseError> {
    check_args(command.args(), args)?;
    check_options(command, options)
}

fn check_args(defs: &[ArgDef], values: &[String]) -> Result<(), ParseError> {
    let mut values = values.iter();
    for def in defs {
        match values.next() {
            Some(value) if !def.value_type().accepts(value) => {
                return Err(ParseError::ArgumentType {
                    key: def.key().to_string(),
                    expected: def.value_type(),
                    value: value.clone(),
                });
            }
            Some(_) => {}
            None if def.is_optional() => {}
            None => return Err(ParseError::MissingArgument(def.key().to_string())),
        }
        // The optional slot ends checking; whatever follows is free-form.
        if def.is_optional() {
            return Ok(());
        }
    }

    let leftover: Vec<String> = values.cloned().collect();
    if leftover.is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnknownArguments(leftover))
    }
}

fn check_options(command: &Command, options: &BTreeMap<String, String>) -> Result<(), ParseError> {
    for (name, value) in options {
        let Some(def) = command.option(name) else {
            continue;
        };
        if !def.value_type().accepts(value) {
            return Err(ParseError::OptionType {
                name: name.clone(),
                expected: def.value_type(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::OptDef;
    use crate::value::ValueType;

    fn add() -> Command {
        Command::new("add", "")
            .with_arg(ArgDef::new("remote"))
            .with_arg(ArgDef::new("count").with_type(ValueType::Int))
            .with_arg(ArgDef::new("pi").with_type(ValueType::Number))
            .with_arg(ArgDef::new("force").with_type(ValueType::Bool))
            .with_arg(ArgDef::new("optional").with_type(ValueType::Bool).optional())
            .with_option(OptDef::new("count", "").with_char('c').with_type(ValueType::Int))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trailing_optional_may_be_absent() {
        let args = strings(&["origin", "1", "3.14", "true"]);
        assert_eq!(check_args(add().args(), &args), Ok(()));
    }

    #[test]
    fn tail_after_optional_is_unchecked() {
        let args = strings(&["origin", "1", "3.14", "true", "false", "x", "3.5"]);
        assert_eq!(check_args(add().args(), &args), Ok(()));
    }

    #[test]
    fn optional_slot_is_type_checked() {
        let args = strings(&["origin", "1", "3.14", "true", "25"]);
        assert_eq!(
            check_args(add().args(), &args),
            Err(ParseError::ArgumentType {
                key: "optional".into(),
                expected: ValueType::Bool,
                value: "25".into(),
            })
        );
    }

    #[test]
    fn first_missing_required_is_reported() {
        let args = strings(&["origin", "1"]);
        assert_eq!(
            check_args(add().args(), &args),
            Err(ParseError::MissingArgument("pi".into()))
        );
    }

    #[test]
    fn type_error_comes_before_missing_argument() {
        let args = strings(&["origin", "3.14"]);
        assert!(matches!(
            check_args(add().args(), &args),
            Err(ParseError::ArgumentType { key, .. }) if key == "count"
        ));
    }

    #[test]
    fn leftovers_without_slots() {
        let defs = [ArgDef::new("arg1")];
        let args = strings(&["foo", "origin", "master"]);
        assert_eq!(
            check_args(&defs, &args),
            Err(ParseError::UnknownArguments(strings(&["origin", "master"])))
        );
        assert_eq!(
            check_args(&[], &strings(&["x"])),
            Err(ParseError::UnknownArguments(strings(&["x"])))
        );
    }

    #[test]
    fn option_values_are_type_checked() {
        let options = BTreeMap::from([("count".to_string(), "2.25".to_string())]);
        let args = strings(&["origin", "1", "3.14", "true"]);
        assert_eq!(
            validate(&add(), &args, &options),
            Err(ParseError::OptionType {
                name: "count".into(),
                expected: ValueType::Int,
                value: "2.25".into(),
            })
        );
    }

    #[test]
    fn positional_errors_win_over_option_errors() {
        let options = BTreeMap::from([("count".to_string(), "x".to_string())]);
        assert_eq!(
            validate(&add(), &[], &options),
            Err(ParseError::MissingArgument("remote".into()))
        );
    }
}
