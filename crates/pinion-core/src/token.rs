//! Device tokens
//!
//! A token is the opaque per-device credential carried in the request
//! path. Lookup is exact and case-sensitive; no structure is assumed.

use std::borrow::Borrow;
use std::fmt;

/// Opaque device credential
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Token(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Token(token.to_string())
    }
}

// Tokens are credentials; Debug keeps them out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "Token({prefix}\u{2026})")
    }
}
