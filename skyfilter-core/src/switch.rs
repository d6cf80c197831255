use serde::{Deserialize, Serialize};

/// A filter switch as seen on the page: its name and checked state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    pub name: String,
    pub checked: bool,
}

impl Switch {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            checked,
        }
    }

    /// Filter token derived from this switch's name.
    pub fn token(&self, prefix: &str) -> &str {
        filter_token(&self.name, prefix)
    }
}

/// Strip `prefix` from a switch name. Names without the prefix pass through unchanged.
pub fn filter_token<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}
