use crate::{decode_tokens, filename_stem, EncodingConventions};
use serde::{Deserialize, Serialize};

/// A pre-rendered image on the page and whether it is currently shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Image source as written in the page
    pub src: String,
    pub visible: bool,
}

impl ImageEntry {
    /// New image, hidden until the first recomputation.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            visible: false,
        }
    }

    /// Filename without directory or extension.
    pub fn stem<'a>(&'a self, conventions: &EncodingConventions) -> &'a str {
        filename_stem(&self.src, &conventions.extension)
    }

    /// Tokens encoded in the filename.
    pub fn tokens<'a>(&'a self, conventions: &EncodingConventions) -> Vec<&'a str> {
        decode_tokens(self.stem(conventions), &conventions.delimiter)
    }
}
