//! Start-up check that images and colour subsets correspond one to one.
//!
//! Images are never load-bearing, so problems are reported and logged but
//! never abort the page.

use crate::{decode_tokens, expected_encodings, Colour, EncodingConventions, ImageEntry};
use std::collections::BTreeSet;

/// Differences between the expected subset encodings and the page's images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodingReport {
    /// Expected stems with no image on the page
    pub missing: Vec<String>,
    /// Image sources whose filename decodes to no declared subset
    pub unknown: Vec<String>,
    /// Image sources that share an encoding with an earlier image
    pub duplicates: Vec<String>,
    /// Whether an image for the empty selection exists
    pub blank_present: bool,
}

impl EncodingReport {
    /// Every declared subset has exactly one image and every image a subset.
    pub fn is_bijection(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty() && self.duplicates.is_empty()
    }

    /// Log each problem as a warning.
    pub fn log(&self) {
        if self.is_bijection() {
            log::info!("Sky plot images match the declared colours one to one");
            return;
        }
        if !self.blank_present {
            log::warn!("No blank image: clearing every filter will show nothing");
        }
        for stem in &self.missing {
            log::warn!("No image for colour subset {:?}", stem);
        }
        for src in &self.unknown {
            log::warn!("Image {} does not encode a declared colour subset", src);
        }
        for src in &self.duplicates {
            log::warn!("Image {} duplicates another image's colour subset", src);
        }
    }
}

/// Order-free key for a token bag.
fn canonical_key(mut tokens: Vec<&str>, delimiter: &str) -> String {
    tokens.sort_unstable();
    tokens.join(delimiter)
}

/// Compare `images` with every subset of `colours`.
pub fn validate_encodings(
    colours: &[Colour],
    images: &[ImageEntry],
    conventions: &EncodingConventions,
) -> EncodingReport {
    let delimiter = conventions.delimiter.as_str();

    let expected_stems = expected_encodings(colours, conventions);
    let expected: BTreeSet<String> = expected_stems
        .iter()
        .map(|stem| canonical_key(decode_tokens(stem, delimiter), delimiter))
        .collect();

    let mut report = EncodingReport::default();
    let mut found: BTreeSet<String> = BTreeSet::new();

    for image in images {
        let key = canonical_key(image.tokens(conventions), delimiter);
        if !expected.contains(&key) {
            report.unknown.push(image.src.clone());
        } else if found.contains(&key) {
            report.duplicates.push(image.src.clone());
        } else {
            found.insert(key);
        }
    }

    // Preserve the pipeline's enumeration order in the report
    for stem in expected_stems {
        let key = canonical_key(decode_tokens(&stem, delimiter), delimiter);
        if !found.contains(&key) {
            report.missing.push(stem);
        }
    }

    report.blank_present = found.contains(&conventions.blank_token);
    report
}
