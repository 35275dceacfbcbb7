//! Path templates such as `/user/:id`, `/files/*` or `/:year(\d+)/:slug?`.
//!
//! A template is tokenized into literals and parameters and turned into one
//! anchored, case-insensitive regex. A single trailing `/` is tolerated.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid url pattern '{pattern}': {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(String),
    Param(Param),
}

#[derive(Debug, Clone, PartialEq)]
struct Param {
    prefix: Option<char>,
    pattern: String,
    optional: bool,
    repeat: bool,
    /// The parameter is followed by text that is not its own prefix, e.g. the
    /// `-` in `/:from-:to`. An optional partial keeps its prefix mandatory.
    partial: bool,
}

/// What follows a `:`, `(` or `*` once scanned.
struct Body {
    group: Option<String>,
    asterisk: bool,
    modifier: Option<char>,
    end: usize,
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans `(...)` starting at `start`. Nested parentheses are not allowed,
/// backslash escapes are kept as-is.
fn scan_group(chars: &[char], start: usize) -> Option<(String, usize)> {
    if chars.get(start) != Some(&'(') {
        return None;
    }
    let mut content = String::new();
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                content.push('\\');
                content.push(chars[i + 1]);
                i += 2;
            }
            '(' => return None,
            ')' if content.is_empty() => return None,
            ')' => return Some((content, i + 1)),
            c => {
                content.push(c);
                i += 1;
            }
        }
    }
    None
}

fn scan_modifier(chars: &[char], at: usize) -> (Option<char>, usize) {
    match chars.get(at).copied() {
        Some(c @ ('+' | '*' | '?')) => (Some(c), at + 1),
        _ => (None, at),
    }
}

fn scan_body(chars: &[char], start: usize) -> Option<Body> {
    match *chars.get(start)? {
        ':' => {
            let mut i = start + 1;
            while i < chars.len() && is_word(chars[i]) {
                i += 1;
            }
            if i == start + 1 {
                return None;
            }
            let (group, i) = match scan_group(chars, i) {
                Some((group, end)) => (Some(group), end),
                None => (None, i),
            };
            let (modifier, end) = scan_modifier(chars, i);
            Some(Body { group, asterisk: false, modifier, end })
        }
        '(' => {
            let (group, i) = scan_group(chars, start)?;
            let (modifier, end) = scan_modifier(chars, i);
            Some(Body { group: Some(group), asterisk: false, modifier, end })
        }
        '*' => Some(Body { group: None, asterisk: true, modifier: None, end: start + 1 }),
        _ => None,
    }
}

/// Tries to read a parameter at `start`, with an optional `/` or `.` prefix.
fn scan_param(chars: &[char], start: usize) -> Option<(Param, usize)> {
    let (prefix, body) = match chars[start] {
        c @ ('/' | '.') => (Some(c), scan_body(chars, start + 1)?),
        _ => (None, scan_body(chars, start)?),
    };

    let next = chars.get(body.end).copied();
    let delimiter = prefix.unwrap_or('/');
    let pattern = match (body.group, body.asterisk) {
        (Some(group), _) => group,
        (None, true) => ".*".to_string(),
        (None, false) => format!("[^{}]+?", regex::escape(&delimiter.to_string())),
    };

    let param = Param {
        prefix,
        pattern,
        optional: matches!(body.modifier, Some('?' | '*')),
        repeat: matches!(body.modifier, Some('+' | '*')),
        partial: prefix.is_some() && next.is_some() && next != prefix,
    };
    Some((param, body.end))
}

fn tokenize(template: &str) -> Vec<Token> {
    let chars: Vec<char> = template.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() {
            literal.push(chars[i + 1]);
            i += 2;
            continue;
        }
        if let Some((param, end)) = scan_param(&chars, i) {
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Param(param));
            i = end;
            continue;
        }
        literal.push(chars[i]);
        i += 1;
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

fn tokens_to_regex(tokens: &[Token]) -> String {
    let mut route = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => route.push_str(&regex::escape(text)),
            Token::Param(param) => {
                let prefix = param
                    .prefix
                    .map(|c| regex::escape(&c.to_string()))
                    .unwrap_or_default();
                let mut capture = format!("(?:{})", param.pattern);
                if param.repeat {
                    capture = format!("{capture}(?:{prefix}{capture})*");
                }
                let piece = match (param.optional, param.partial) {
                    (true, false) => format!("(?:{prefix}({capture}))?"),
                    (true, true) => format!("{prefix}({capture})?"),
                    (false, _) => format!("{prefix}({capture})"),
                };
                route.push_str(&piece);
            }
        }
    }

    let body = route.strip_suffix('/').unwrap_or(&route);
    format!("(?i)^{body}(?:/)?$")
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
}

impl PathPattern {
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let source = tokens_to_regex(&tokenize(template));
        let regex = Regex::new(&source).map_err(|source| PatternError {
            pattern: template.to_string(),
            source,
        })?;
        Ok(PathPattern { regex })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}
