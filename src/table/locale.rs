use std::fmt;

use serde::{Deserialize, Serialize};

/// Language tag a table carries for its users, attached verbatim to
/// user-facing validation errors so the reporting layer can localize
/// messages. Never consulted for control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale() {
        assert_eq!(Locale::default().tag(), "en-US");
    }

    #[test]
    fn test_custom_tag() {
        let locale = Locale::new("pt-BR");
        assert_eq!(locale.tag(), "pt-BR");
        assert_eq!(locale.to_string(), "pt-BR");
    }
}
