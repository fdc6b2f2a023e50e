//! Cookie storage shared between a session and the transport

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single authentication cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Cookie {
    /// Create a host-only cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
        }
    }

    /// Set the cookie domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the cookie path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Render as a `Set-Cookie` header value
    pub fn to_set_cookie(&self) -> String {
        let mut out = format!("{}={}", self.name, self.value);
        if let Some(domain) = &self.domain {
            out.push_str("; Domain=");
            out.push_str(domain);
        }
        out.push_str("; Path=");
        out.push_str(self.path.as_deref().unwrap_or("/"));
        out
    }
}

/// Cookies keyed by name; inserting an existing name replaces it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieSet {
    cookies: BTreeMap<String, Cookie>,
}

impl CookieSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(name, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| Cookie::new(name, value))
            .collect()
    }

    pub fn insert(&mut self, cookie: Cookie) -> Option<Cookie> {
        self.cookies.insert(cookie.name.clone(), cookie)
    }

    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }

    /// Value of the named cookie
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cookie> {
        self.cookies.values()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Render as a `Cookie` request header value
    pub fn header_value(&self) -> String {
        self.iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl FromIterator<Cookie> for CookieSet {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        let mut set = CookieSet::new();
        for cookie in iter {
            set.insert(cookie);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_by_name() {
        let mut set = CookieSet::new();
        assert!(set.insert(Cookie::new("sessionid", "old")).is_none());
        let previous = set.insert(Cookie::new("sessionid", "new")).unwrap();

        assert_eq!(previous.value, "old");
        assert_eq!(set.len(), 1);
        assert_eq!(set.value("sessionid"), Some("new"));
    }

    #[test]
    fn test_header_value_sorted() {
        let set = CookieSet::from_pairs([("sessionid", "abc"), ("csrftoken", "tok")]);
        assert_eq!(set.header_value(), "csrftoken=tok; sessionid=abc");
    }

    #[test]
    fn test_set_cookie_rendering() {
        let cookie = Cookie::new("a", "1").with_domain(".instagram.com");
        assert_eq!(cookie.to_set_cookie(), "a=1; Domain=.instagram.com; Path=/");
        assert_eq!(Cookie::new("b", "2").to_set_cookie(), "b=2; Path=/");
    }

    #[test]
    fn test_cookie_set_serialization() {
        let set = CookieSet::from_pairs([("a", "1")]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["a"]["value"], "1");

        let restored: CookieSet = serde_json::from_value(json).unwrap();
        assert_eq!(restored, set);
    }
}
