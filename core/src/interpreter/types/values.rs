//! Runtime value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum Val {
    #[default]
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<Val>),
}

impl Val {
    /// Check if value is truthy (for conditionals)
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Bool(b) => *b,
            Val::Null => false,
            _ => true,
        }
    }

    /// Interpret a word of script text as a literal.
    ///
    /// `true`/`false` become booleans, anything `f64` accepts becomes a number,
    /// everything else stays a string.
    pub fn from_literal(text: &str) -> Self {
        match text {
            "true" => Val::Bool(true),
            "false" => Val::Bool(false),
            _ => match text.parse::<f64>() {
                Ok(n) if n.is_finite() => Val::Num(n),
                _ => Val::Str(text.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Val::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::Str(s.to_string())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Self {
        Val::Str(s)
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Null => write!(f, "null"),
            Val::Bool(b) => write!(f, "{}", b),
            Val::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Val::Num(n) => write!(f, "{}", n),
            Val::Str(s) => write!(f, "{}", s),
            Val::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(Val::from_literal("true"), Val::Bool(true));
        assert_eq!(Val::from_literal("false"), Val::Bool(false));
        assert_eq!(Val::from_literal("42"), Val::Num(42.0));
        assert_eq!(Val::from_literal("-1.5"), Val::Num(-1.5));
        assert_eq!(Val::from_literal("Bob"), Val::Str("Bob".to_string()));
        assert_eq!(Val::from_literal("inf"), Val::Str("inf".to_string()));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Val::Null.is_truthy());
        assert!(!Val::Bool(false).is_truthy());
        assert!(Val::Num(0.0).is_truthy());
        assert!(Val::from("").is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Num(3.0).to_string(), "3");
        assert_eq!(Val::Num(2.5).to_string(), "2.5");
        assert_eq!(
            Val::List(vec![Val::from("a"), Val::Bool(true)]).to_string(),
            "[a, true]"
        );
    }
}
