use crate::core::{Result, ScriptError};

/// Separates the command name portion from the target portion.
pub const TARGET_SEPARATOR: &str = "::";

/// One parsed `[modifier ]command::target argTail` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub modifier: Option<String>,
    pub command: String,
    /// Target token as written
    pub raw_target: String,
    /// Target after self-resolution
    pub target: String,
    /// Untokenized remainder after the target
    pub arg_tail: String,
}

/// Modifier and command words of a line, read before anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandName {
    pub modifier: Option<String>,
    pub command: String,
}

/// Reads the name portion of a line.
///
/// The name portion ends at the first separator, or is the whole line when
/// there is none, so an unregistered name can be reported before the rest
/// of the line is validated.
pub fn parse_name(input: &str) -> Result<CommandName> {
    let name_portion = input
        .split_once(TARGET_SEPARATOR)
        .map_or(input, |(name, _)| name);

    let words: Vec<&str> = name_portion.split_whitespace().collect();
    match words.as_slice() {
        [] => Err(ScriptError::Parse("missing command name".into())),
        [command] => Ok(CommandName {
            modifier: None,
            command: command.to_string(),
        }),
        [modifier, command, ..] => Ok(CommandName {
            modifier: Some(modifier.to_string()),
            command: command.to_string(),
        }),
    }
}

/// Splits a command line into its grammar parts.
///
/// `self_keyword` is compared case-insensitively and replaced by `author`.
pub fn parse(input: &str, author: &str, self_keyword: &str) -> Result<Invocation> {
    let CommandName { modifier, command } = parse_name(input)?;
    let (_, target_portion) = input.split_once(TARGET_SEPARATOR).ok_or_else(|| {
        ScriptError::Parse(format!(
            "expected '<command>{}<target>' in '{}'",
            TARGET_SEPARATOR,
            input.trim()
        ))
    })?;

    let target_portion = target_portion.trim_start();
    let (raw_target, arg_tail) = match target_portion.split_once(char::is_whitespace) {
        Some((target, rest)) => (target, rest.trim()),
        None => (target_portion.trim_end(), ""),
    };

    if raw_target.is_empty() {
        return Err(ScriptError::Parse(format!(
            "missing target for command '{}'",
            command
        )));
    }

    let target = if raw_target.eq_ignore_ascii_case(self_keyword) {
        author.to_string()
    } else {
        raw_target.to_string()
    };

    Ok(Invocation {
        modifier,
        command,
        raw_target: raw_target.to_string(),
        target,
        arg_tail: arg_tail.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_command() {
        let inv = parse("uget::self name --json", "u-1", "self").unwrap();

        assert_eq!(inv.modifier, None);
        assert_eq!(inv.command, "uget");
        assert_eq!(inv.raw_target, "self");
        assert_eq!(inv.target, "u-1");
        assert_eq!(inv.arg_tail, "name --json");
    }

    #[test]
    fn test_modifier_and_explicit_target() {
        let inv = parse("rise tget::t-42   title  ", "u-1", "self").unwrap();

        assert_eq!(inv.modifier.as_deref(), Some("rise"));
        assert_eq!(inv.command, "tget");
        assert_eq!(inv.target, "t-42");
        assert_eq!(inv.arg_tail, "title");
    }

    #[test]
    fn test_self_is_case_insensitive() {
        for literal in ["self", "SELF", "Self"] {
            let inv = parse(&format!("uget::{} all", literal), "author", "self").unwrap();
            assert_eq!(inv.target, "author");
        }
    }

    #[test]
    fn test_extra_name_words_are_ignored() {
        let inv = parse("rise uget extra::self a", "u", "self").unwrap();
        assert_eq!(inv.modifier.as_deref(), Some("rise"));
        assert_eq!(inv.command, "uget");
    }

    #[test]
    fn test_later_separators_stay_in_tail() {
        let inv = parse("uget::u-2 a::b", "u", "self").unwrap();
        assert_eq!(inv.target, "u-2");
        assert_eq!(inv.arg_tail, "a::b");
    }

    #[test]
    fn test_target_without_tail() {
        let inv = parse("whoami::self", "u", "self").unwrap();
        assert_eq!(inv.target, "u");
        assert_eq!(inv.arg_tail, "");
    }

    #[test]
    fn test_name_without_separator() {
        let name = parse_name("nope").unwrap();
        assert_eq!(name.modifier, None);
        assert_eq!(name.command, "nope");

        let name = parse_name("rise uget").unwrap();
        assert_eq!(name.modifier.as_deref(), Some("rise"));
        assert_eq!(name.command, "uget");

        let name = parse_name("uget::a::b").unwrap();
        assert_eq!(name.command, "uget");

        assert!(matches!(parse_name("   "), Err(ScriptError::Parse(_))));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(parse("uget self", "u", "self"), Err(ScriptError::Parse(_))));
        assert!(matches!(parse("  ::self", "u", "self"), Err(ScriptError::Parse(_))));
        assert!(matches!(parse("uget::   ", "u", "self"), Err(ScriptError::Parse(_))));
    }
}
