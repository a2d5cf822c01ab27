use std::fmt;

use serde::Serialize;

/// Value type shared by positional arguments and options.
///
/// The type drives both coercion and the wording of type mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    #[default]
    String,
    Bool,
    Int,
    Number,
}

impl ValueType {
    /// Whether `raw` coerces to this type.
    ///
    /// - `bool`: the literals `true` and `false` only
    /// - `int`: a base-10 integer literal; `3.0` is rejected
    /// - `number`: any floating-point literal, integers included
    /// - `string`: always
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            Self::String => true,
            Self::Bool => matches!(raw, "true" | "false"),
            Self::Int => raw.parse::<i64>().is_ok(),
            Self::Number => raw.parse::<f64>().is_ok(),
        }
    }

    /// Noun phrase used in type mismatch messages ("an integer value").
    pub fn noun(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Bool => "a boolean value",
            Self::Int => "an integer value",
            Self::Number => "a number",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_accepts_only_lowercase_literals() {
        assert!(ValueType::Bool.accepts("true"));
        assert!(ValueType::Bool.accepts("false"));
        assert!(!ValueType::Bool.accepts("True"));
        assert!(!ValueType::Bool.accepts("1"));
        assert!(!ValueType::Bool.accepts("25"));
        assert!(!ValueType::Bool.accepts(""));
    }

    #[test]
    fn int_rejects_decimal_point() {
        assert!(ValueType::Int.accepts("1"));
        assert!(ValueType::Int.accepts("-42"));
        assert!(!ValueType::Int.accepts("3.14"));
        assert!(!ValueType::Int.accepts("2.0"));
        assert!(!ValueType::Int.accepts("aaa"));
    }

    #[test]
    fn number_accepts_floats_and_integers() {
        assert!(ValueType::Number.accepts("3.14"));
        assert!(ValueType::Number.accepts("1"));
        assert!(ValueType::Number.accepts("-0.5e3"));
        assert!(!ValueType::Number.accepts("aaa"));
        assert!(!ValueType::Number.accepts(""));
    }

    #[test]
    fn string_accepts_anything() {
        assert!(ValueType::String.accepts(""));
        assert!(ValueType::String.accepts("--weird=value"));
    }

    #[test]
    fn nouns_match_message_wording() {
        assert_eq!(ValueType::Bool.noun(), "a boolean value");
        assert_eq!(ValueType::Int.noun(), "an integer value");
        assert_eq!(ValueType::Number.noun(), "a number");
        assert_eq!(ValueType::Int.to_string(), "int");
    }
}
