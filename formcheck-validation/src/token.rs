// Rule expression tokens

use std::fmt;

/// A rule expression split into its name and optional argument.
///
/// Expressions are either `name` or `name=argument`. Only the first `=` is a
/// delimiter; the argument is kept verbatim, further `=` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToken<'a> {
    /// Rule name (everything before the first `=`)
    pub name: &'a str,

    /// Raw argument (everything after the first `=`)
    pub arg: Option<&'a str>,
}

impl<'a> RuleToken<'a> {
    /// Split a raw rule expression.
    ///
    /// No catalog lookup happens here, so unknown names parse fine.
    pub fn parse(expression: &'a str) -> Self {
        match expression.split_once('=') {
            Some((name, arg)) => Self {
                name,
                arg: Some(arg),
            },
            None => Self {
                name: expression,
                arg: None,
            },
        }
    }
}

impl fmt::Display for RuleToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arg {
            Some(arg) => write!(f, "{}={}", self.name, arg),
            None => f.write_str(self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_argument() {
        let token = RuleToken::parse("required");
        assert_eq!(token.name, "required");
        assert_eq!(token.arg, None);
    }

    #[test]
    fn test_parse_with_argument() {
        let token = RuleToken::parse("min_length=3");
        assert_eq!(token.name, "min_length");
        assert_eq!(token.arg, Some("3"));
    }

    #[test]
    fn test_only_first_equals_splits() {
        let token = RuleToken::parse("equal_to=a=b=c");
        assert_eq!(token.name, "equal_to");
        assert_eq!(token.arg, Some("a=b=c"));
    }

    #[test]
    fn test_empty_argument_is_present() {
        let token = RuleToken::parse("equal_to=");
        assert_eq!(token.arg, Some(""));
    }

    #[test]
    fn test_leading_equals_gives_empty_name() {
        let token = RuleToken::parse("=5");
        assert_eq!(token.name, "");
        assert_eq!(token.arg, Some("5"));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(RuleToken::parse("max_length=10").to_string(), "max_length=10");
        assert_eq!(RuleToken::parse("email").to_string(), "email");
    }
}
