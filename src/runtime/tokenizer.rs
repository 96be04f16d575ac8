/// Characters that separate words. Anything else is part of a token.
pub const DELIMITERS: &[char] = &[
    ',', '.', '\'', ';', '?', '-', '[', ']', ':', '!', '(', ')', ' ', '\n', '\t', '\r', '<', '>',
];

pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Iterator over the tokens of a single line.
///
/// Tokens are maximal runs of non-delimiter characters, borrowed from the
/// line. Consecutive delimiters never produce empty tokens.
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(|c: char| !is_delimiter(c))?;
        let tail = &self.rest[start..];
        let end = tail.find(is_delimiter).unwrap_or(tail.len());
        let (token, rest) = tail.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens::new(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<&str> {
        tokenize(line).collect()
    }

    #[test]
    fn splits_on_spaces_and_punctuation() {
        assert_eq!(collect("The the THE cat sat."), vec!["The", "the", "THE", "cat", "sat"]);
        assert_eq!(
            collect("don't (stop) [me]: now! ok? yes; no, well-known"),
            vec!["don", "t", "stop", "me", "now", "ok", "yes", "no", "well", "known"]
        );
    }

    #[test]
    fn drops_empty_runs() {
        assert_eq!(collect("...,,  ;;a--b"), vec!["a", "b"]);
        assert!(collect("").is_empty());
        assert!(collect(" .,;:!?()[]-'").is_empty());
    }

    #[test]
    fn handles_whitespace_and_angle_brackets() {
        assert_eq!(collect("\tone\r\n<two>three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn keeps_non_delimiter_symbols_inside_tokens() {
        assert_eq!(collect("a/b \"quoted\" 42"), vec!["a/b", "\"quoted\"", "42"]);
        assert_eq!(collect("café naïve"), vec!["café", "naïve"]);
    }
}
