//! Selection reader: turns switch states into the ordered list of active tokens.

use crate::{EncodingConventions, Switch};

/// Tokens of all checked switches, in document order.
///
/// Recomputed from the switches on every click; never cached between clicks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    tokens: Vec<String>,
}

impl FilterSelection {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens the matcher works with: the selection itself, or the blank
    /// token when nothing is selected.
    pub fn match_tokens<'a>(&'a self, conventions: &'a EncodingConventions) -> Vec<&'a str> {
        if self.tokens.is_empty() {
            vec![conventions.blank_token.as_str()]
        } else {
            self.tokens.iter().map(String::as_str).collect()
        }
    }

    /// Match tokens joined with the delimiter, i.e. the stem of the image the
    /// asset pipeline would have named for this exact order.
    pub fn joined(&self, conventions: &EncodingConventions) -> String {
        self.match_tokens(conventions).join(&conventions.delimiter)
    }
}

/// Read the active tokens from `switches`, preserving their order.
pub fn read_selection(switches: &[Switch], conventions: &EncodingConventions) -> FilterSelection {
    FilterSelection::from_tokens(
        switches
            .iter()
            .filter(|s| s.checked)
            .map(|s| s.token(&conventions.switch_prefix)),
    )
}
