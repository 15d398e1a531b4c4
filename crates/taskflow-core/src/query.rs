//! Query String Encoding
//!
//! Serializes name/value pairs as `application/x-www-form-urlencoded`, the
//! same bytes the browser's `URLSearchParams` would produce.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left verbatim: alphanumerics plus `*-._`; space becomes `+`
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_VALUE).to_string().replace(' ', "+")
}

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(name, _)| name.as_str())
    }

    /// `path` alone when empty, `path?query` otherwise
    pub fn attach_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self)
        }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode_component(name), encode_component(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_reserved_characters() {
        assert_eq!(encode_component("fix login bug"), "fix+login+bug");
        assert_eq!(encode_component("a&b=c+d"), "a%26b%3Dc%2Bd");
        assert_eq!(encode_component("100%"), "100%25");
        assert_eq!(encode_component("-created_at"), "-created_at");
        assert_eq!(encode_component("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_attach_to_path() {
        let mut query = QueryString::new();
        assert_eq!(query.attach_to("/tasks/"), "/tasks/");
        query.append("status", "completed");
        query.append("search", "a b");
        assert_eq!(query.attach_to("/tasks/"), "/tasks/?status=completed&search=a+b");
    }
}
