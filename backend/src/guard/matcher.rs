//! Protected-route matching.
//!
//! Patterns use the path-to-regexp flavour the identity provider's matcher
//! accepts: literal text, `:name` for a single segment, and parenthesised
//! regex groups such as `(.*)`. Every pattern is anchored on the whole path
//! and tolerates a trailing slash.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct RouteMatcher {
    patterns: Vec<(String, Regex)>,
}

impl RouteMatcher {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&pattern_to_regex(pattern)).map(|re| (pattern.to_string(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// First pattern matching `path`, in declaration order.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(path))
            .map(|(pattern, _)| pattern.as_str())
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matching_pattern(path).is_some()
    }
}

/// Whether the guard looks at `path` at all.
///
/// Static assets (a `.` in the last segment) are skipped, except under `/api`.
/// Dots in earlier segments do not count.
pub fn in_middleware_scope(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") {
        return true;
    }
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    !last_segment.contains('.')
}

fn pattern_to_regex(pattern: &str) -> String {
    let mut out = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '(' => {
                // Copy the group verbatim up to its balancing paren.
                out.push('(');
                let mut depth = 1;
                for inner in chars.by_ref() {
                    match inner {
                        '(' => depth += 1,
                        ')' => depth -= 1,
                        _ => {}
                    }
                    out.push(inner);
                    if depth == 0 {
                        break;
                    }
                }
            }
            ':' if chars.peek().is_some_and(|n| n.is_ascii_alphanumeric() || *n == '_') => {
                while chars
                    .peek()
                    .is_some_and(|n| n.is_ascii_alphanumeric() || *n == '_')
                {
                    chars.next();
                }
                out.push_str("([^/]+)");
            }
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    if !out.ends_with('/') {
        out.push_str("/?");
    }
    out.push('$');
    out
}
