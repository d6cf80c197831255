//! Image matcher: decides which images encode exactly the active tokens.
//!
//! An image is revealed when two tests pass:
//! - containment: every active token occurs somewhere in the filename stem
//! - exact coverage: the stem encodes those tokens and nothing else, judged
//!   by the configured [`MatchPolicy`]
//!
//! An empty selection is matched as the single blank token. Images that match
//! nothing stay hidden; if several match, all are revealed.

use crate::{decode_tokens, EncodingConventions, FilterSelection, ImageEntry, MatchPolicy};

/// Every token occurs as a substring of `stem`. Stops at the first miss.
pub fn contains_all(stem: &str, tokens: &[&str]) -> bool {
    tokens.iter().all(|token| stem.contains(token))
}

/// `stem` encodes `tokens` and nothing more.
pub fn covers_exactly(stem: &str, tokens: &[&str], conventions: &EncodingConventions) -> bool {
    match conventions.policy {
        MatchPolicy::TokenSet => {
            let mut encoded = decode_tokens(stem, &conventions.delimiter);
            let mut active = tokens.to_vec();
            encoded.sort_unstable();
            active.sort_unstable();
            encoded == active
        }
        MatchPolicy::JoinedLength => {
            let joined = tokens.join(&conventions.delimiter);
            stem.chars().count() == joined.chars().count()
        }
    }
}

/// Whether the image at `src` should be shown for `tokens`.
pub fn image_matches(src: &str, tokens: &[&str], conventions: &EncodingConventions) -> bool {
    let stem = crate::filename_stem(src, &conventions.extension);
    contains_all(stem, tokens) && covers_exactly(stem, tokens, conventions)
}

/// Hide every image, then reveal those matching `selection`.
///
/// Returns the indices of the revealed images.
pub fn apply_matches(
    selection: &FilterSelection,
    images: &mut [ImageEntry],
    conventions: &EncodingConventions,
) -> Vec<usize> {
    let tokens = selection.match_tokens(conventions);
    let mut revealed = Vec::new();

    for (index, image) in images.iter_mut().enumerate() {
        image.visible = false;
        if image_matches(&image.src, &tokens, conventions) {
            image.visible = true;
            revealed.push(index);
        }
    }

    revealed
}
