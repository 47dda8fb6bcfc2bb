/// A single input line split into its command token and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub token: String,
    pub args: Vec<String>,
}

impl ParsedInput {
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let token = parts.next()?.to_string();
        Some(Self {
            token,
            args: parts.map(String::from).collect(),
        })
    }
}

/// True when `line` starts with one of `tokens` and the token is followed by
/// whitespace or ends the trimmed line.
///
/// `matches_command("cdfoo", &["cd"])` is false, `matches_command("cd foo", &["cd"])` is true.
pub fn matches_command<S: AsRef<str>>(line: &str, tokens: &[S]) -> bool {
    let trimmed = line.trim_end();
    tokens.iter().any(|token| {
        let token = token.as_ref();
        if token.is_empty() {
            return false;
        }
        match line.strip_prefix(token) {
            Some(rest) => {
                trimmed == token || rest.chars().next().is_some_and(char::is_whitespace)
            }
            None => false,
        }
    })
}

/// Exact match for argument-less commands, ignoring surrounding whitespace.
pub fn matches_exact<S: AsRef<str>>(line: &str, tokens: &[S]) -> bool {
    let trimmed = line.trim();
    tokens.iter().any(|token| token.as_ref() == trimmed)
}

/// Arguments after the command token, in their original order.
pub fn split_arguments(line: &str) -> Vec<String> {
    line.split_whitespace().skip(1).map(String::from).collect()
}
