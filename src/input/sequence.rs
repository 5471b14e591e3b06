//! Key sequence syntax for scripted and line-based input.
//!
//! Each character is one key, `<Name>` spells out a named key such as
//! `<Backspace>`, and whitespace separates nothing.

/// Split a key sequence into key names.
///
/// An unterminated `<` is taken as a literal key, as are the characters
/// after it.
pub fn parse_keys(sequence: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut chars = sequence.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if c == '<' {
            let rest: String = chars.clone().collect();
            if let Some(end) = rest.find('>')
                && end > 0
            {
                let name = &rest[..end];
                if !name.chars().any(char::is_whitespace) {
                    keys.push(name.to_string());
                    for _ in 0..name.chars().count() + 1 {
                        chars.next();
                    }
                    continue;
                }
            }
        }

        keys.push(c.to_string());
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        assert_eq!(parse_keys("5+3="), vec!["5", "+", "3", "="]);
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(parse_keys(" 1 ×\t2 "), vec!["1", "×", "2"]);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            parse_keys("12<Backspace>+4<Enter>"),
            vec!["1", "2", "Backspace", "+", "4", "Enter"]
        );
    }

    #[test]
    fn test_unterminated_bracket_is_literal() {
        assert_eq!(parse_keys("1<2"), vec!["1", "<", "2"]);
        assert_eq!(parse_keys("<>"), vec!["<", ">"]);
    }
}
