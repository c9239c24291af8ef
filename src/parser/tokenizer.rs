use std::collections::HashMap;

/// Prefix marking a token as a flag.
pub const FLAG_PREFIX: &str = "--";

/// Value bound to a flag.
///
/// A flag followed by a non-flag token takes that token as its value;
/// otherwise it is only `Present`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Present,
    Value(String),
}

impl FlagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// Joins the parts with single spaces and collapses whitespace runs.
pub fn flatten<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    split_tokens(parts).join(" ")
}

/// Flattens the parts and splits them into non-empty tokens.
pub fn split_tokens<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .flat_map(|part| {
            part.as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Positional arguments and flags extracted from an argument tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    positional: Vec<String>,
    /// Flag names without prefix, in first-seen order
    flags: Vec<String>,
    flag_values: HashMap<String, FlagValue>,
}

impl Arguments {
    /// Tokenizes one or more raw strings. Never fails.
    pub fn parse<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = split_tokens(parts);
        let mut args = Self::default();
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];
            if !is_flag(token) {
                args.positional.push(token.clone());
                index += 1;
                continue;
            }

            let name = token[FLAG_PREFIX.len()..].to_string();
            let value = match tokens.get(index + 1) {
                Some(next) if !is_flag(next) => {
                    index += 1;
                    FlagValue::Value(next.clone())
                }
                _ => FlagValue::Present,
            };

            if !args.flag_values.contains_key(&name) {
                args.flags.push(name.clone());
            }
            args.flag_values.insert(name, value);
            index += 1;
        }

        args
    }

    pub fn from_tail(tail: &str) -> Self {
        Self::parse([tail])
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flag_values.contains_key(name)
    }

    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flag_values.get(name)
    }

    /// String value of a flag; `None` when absent or only present.
    pub fn flag_value(&self, name: &str) -> Option<&str> {
        self.flag(name).and_then(FlagValue::as_str)
    }

    /// Flag value parsed as a number; unparsable values read as absent.
    pub fn flag_usize(&self, name: &str) -> Option<usize> {
        self.flag_value(name).and_then(|value| value.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_collapses_whitespace() {
        assert_eq!(flatten(["  a \t b", "", "c  "]), "a b c");
        assert_eq!(flatten(Vec::<String>::new()), "");
    }

    #[test]
    fn test_flags_values_and_positional() {
        let args = Arguments::from_tail("--depth 3 all --json");

        assert_eq!(args.positional(), ["all"]);
        assert_eq!(args.flags(), ["depth", "json"]);
        assert_eq!(args.flag("depth"), Some(&FlagValue::Value("3".into())));
        assert_eq!(args.flag("json"), Some(&FlagValue::Present));
        assert_eq!(args.flag_usize("depth"), Some(3));
    }

    #[test]
    fn test_consecutive_flags_are_present_only() {
        let args = Arguments::from_tail("--a --b");

        assert!(args.positional().is_empty());
        assert_eq!(args.flag("a"), Some(&FlagValue::Present));
        assert_eq!(args.flag("b"), Some(&FlagValue::Present));
    }

    #[test]
    fn test_trailing_flag_is_present() {
        let args = Arguments::parse(["name", "--json"]);
        assert_eq!(args.positional(), ["name"]);
        assert!(args.has_flag("json"));
        assert_eq!(args.flag_value("json"), None);
    }

    #[test]
    fn test_empty_input() {
        let args = Arguments::from_tail("   ");
        assert!(args.is_empty());
        assert!(args.flags().is_empty());
    }

    #[test]
    fn test_repeated_flag_keeps_last_value() {
        let args = Arguments::from_tail("--depth 1 key --depth 4");
        assert_eq!(args.flags(), ["depth"]);
        assert_eq!(args.flag_value("depth"), Some("4"));
        assert_eq!(args.positional(), ["key"]);
    }

    #[test]
    fn test_unparsable_number_reads_as_absent() {
        let args = Arguments::from_tail("--depth deep");
        assert_eq!(args.flag_value("depth"), Some("deep"));
        assert_eq!(args.flag_usize("depth"), None);
    }
}
