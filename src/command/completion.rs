use super::parser::COMPLETION_NAMES;

/// Complete `partial` to a command name when exactly one name starts with it.
pub fn complete(partial: &str) -> Option<&'static str> {
    let partial = partial.trim().to_lowercase();
    if partial.is_empty() {
        return None;
    }

    let mut matches = COMPLETION_NAMES.iter().filter(|c| c.starts_with(&partial));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(*only),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_prefix_completes() {
        assert_eq!(complete("ab"), Some("about"));
        assert_eq!(complete("exp"), Some("experience"));
        assert_eq!(complete("  SK"), Some("skills"));
        assert_eq!(complete("cl"), Some("clear"));
    }

    #[test]
    fn test_ambiguous_prefix_does_not_complete() {
        // help, hello, hi
        assert_eq!(complete("h"), None);
        // help, hello
        assert_eq!(complete("hel"), None);
        // contact, clear
        assert_eq!(complete("c"), None);
    }

    #[test]
    fn test_exit_is_not_completed() {
        assert_eq!(complete("e"), Some("experience"));
        assert_eq!(complete("ex"), Some("experience"));
        assert_eq!(complete("exi"), None);
    }

    #[test]
    fn test_full_name_completes_to_itself() {
        assert_eq!(complete("help"), Some("help"));
        assert_eq!(complete("hi"), Some("hi"));
    }

    #[test]
    fn test_no_match_or_blank() {
        assert_eq!(complete("zzz"), None);
        assert_eq!(complete(""), None);
        assert_eq!(complete("   "), None);
    }
}
