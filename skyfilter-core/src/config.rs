//! Encoding conventions and the colour catalogue.
//!
//! The conventions are the one contract shared by the selection reader and
//! the image matcher: how a switch name becomes a filter token, and how a set
//! of tokens becomes an image filename. The colour catalogue declares which
//! tokens exist and which observation statuses each colour plots.

use crate::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Prefix stripped from a switch name to get its filter token.
pub const SWITCH_PREFIX: &str = "status_";
/// Delimiter joining tokens in an image filename.
pub const TOKEN_DELIMITER: &str = "_";
/// Filename stem of the image shown when no filter is active.
pub const BLANK_TOKEN: &str = "blank";
/// Extension of the pre-rendered sky plot images.
pub const IMAGE_EXTENSION: &str = ".png";
/// Largest catalogue accepted; validation enumerates all 2^n colour subsets.
pub const MAX_COLOURS: usize = 12;

/// How a filename is judged to encode exactly the active tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Filename tokens (split on the delimiter) equal the active tokens as a multiset.
    #[default]
    TokenSet,
    /// Filename length equals the length of the delimiter-joined active tokens.
    /// Can reveal an image whose name only happens to have the same length.
    JoinedLength,
}

/// Naming scheme shared by switches and pre-rendered images.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConventions {
    /// Prefix stripped from switch names (`status_red` -> `red`)
    pub switch_prefix: String,
    /// Delimiter joining tokens in a filename (`red_blue.png`)
    pub delimiter: String,
    /// Stem of the image for the empty selection
    pub blank_token: String,
    /// Image extension, including the dot
    pub extension: String,
    /// Exact-coverage test used by the matcher
    pub policy: MatchPolicy,
}

impl Default for EncodingConventions {
    fn default() -> Self {
        Self {
            switch_prefix: SWITCH_PREFIX.to_string(),
            delimiter: TOKEN_DELIMITER.to_string(),
            blank_token: BLANK_TOKEN.to_string(),
            extension: IMAGE_EXTENSION.to_string(),
            policy: MatchPolicy::default(),
        }
    }
}

impl EncodingConventions {
    /// Reject conventions the matcher cannot work with.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.delimiter.is_empty() {
            return Err(FilterError::EmptyDelimiter);
        }
        if self.blank_token.is_empty() {
            return Err(FilterError::EmptyBlankToken);
        }
        Ok(())
    }
}

/// A filter colour: its token, display colour, and the statuses it plots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    /// Filter token, also the switch suffix (`status_<name>`)
    pub name: String,
    /// Hex code without the leading `#`
    pub code: String,
    /// Observation statuses drawn in this colour
    #[serde(default)]
    pub statuses: Vec<String>,
}

impl Colour {
    pub fn new(name: &str, code: &str, statuses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            statuses: statuses.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// CSS form of the colour code.
    pub fn hex(&self) -> String {
        format!("#{}", self.code)
    }
}

/// The colours the sky plots are rendered with.
pub fn default_colours() -> Vec<Colour> {
    vec![
        Colour::new("yellow", "FFD700", &["downloaded", "calibrated", "imaged"]),
        Colour::new("light-grey", "808080", &["unprocessed"]),
        Colour::new("blue", "4169E1", &["archived"]),
    ]
}

/// Look up a colour by its token.
pub fn find_colour<'a>(colours: &'a [Colour], name: &str) -> Option<&'a Colour> {
    colours.iter().find(|c| c.name == name)
}

/// Check that every colour can be encoded unambiguously in a filename.
pub fn validate_colours(
    colours: &[Colour],
    conventions: &EncodingConventions,
) -> Result<(), FilterError> {
    if colours.len() > MAX_COLOURS {
        return Err(FilterError::TooManyColours {
            count: colours.len(),
            max: MAX_COLOURS,
        });
    }

    let mut seen = HashSet::new();
    for colour in colours {
        if colour.name.is_empty() {
            return Err(FilterError::EmptyColourName);
        }
        if colour.name.contains(conventions.delimiter.as_str()) {
            return Err(FilterError::DelimiterInColourName {
                name: colour.name.clone(),
                delimiter: conventions.delimiter.clone(),
            });
        }
        if colour.name == conventions.blank_token {
            return Err(FilterError::BlankColourName(colour.name.clone()));
        }
        if colour.code.len() != 6 || !colour.code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FilterError::InvalidColourCode {
                name: colour.name.clone(),
                code: colour.code.clone(),
            });
        }
        if !seen.insert(colour.name.as_str()) {
            return Err(FilterError::DuplicateColour(colour.name.clone()));
        }
    }
    Ok(())
}

/// Everything the filter needs besides the page itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(flatten)]
    pub conventions: EncodingConventions,
    pub colours: Vec<Colour>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            conventions: EncodingConventions::default(),
            colours: default_colours(),
        }
    }
}

impl FilterConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        self.conventions.validate()?;
        validate_colours(&self.colours, &self.conventions)
    }
}
