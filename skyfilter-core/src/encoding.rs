//! Filename encoding of token subsets.
//!
//! A sky plot image is named after the subset of colours it shows: the colour
//! names joined with the delimiter (`blue_yellow.png`), or the blank token
//! for the empty subset.

use crate::{Colour, EncodingConventions};

/// Final path segment of an image source, without query string or fragment.
pub fn file_name(src: &str) -> &str {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    path.rsplit('/').next().unwrap_or(path)
}

/// File name of `src` with `extension` removed (if present).
pub fn filename_stem<'a>(src: &'a str, extension: &str) -> &'a str {
    let name = file_name(src);
    name.strip_suffix(extension).unwrap_or(name)
}

/// Split a filename stem back into its tokens.
pub fn decode_tokens<'a>(stem: &'a str, delimiter: &str) -> Vec<&'a str> {
    stem.split(delimiter).collect()
}

/// Stem the asset pipeline gives the image for `tokens`, in the given order.
pub fn encode_subset<S: AsRef<str>>(tokens: &[S], conventions: &EncodingConventions) -> String {
    if tokens.is_empty() {
        return conventions.blank_token.clone();
    }
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&conventions.delimiter)
}

/// Every stem the asset pipeline produces for `colours`.
///
/// Colours are ordered by name and subsets enumerated by size, then in
/// lexicographic combination order: `blank`, `a`, `b`, `a_b`, ...
pub fn expected_encodings(colours: &[Colour], conventions: &EncodingConventions) -> Vec<String> {
    let mut names: Vec<&str> = colours.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();

    let mut encodings = Vec::with_capacity(1 << names.len().min(16));
    for size in 0..=names.len() {
        for combination in combinations(names.len(), size) {
            let subset: Vec<&str> = combination.iter().map(|&i| names[i]).collect();
            encodings.push(encode_subset(&subset, conventions));
        }
    }
    encodings
}

/// All `k`-element index combinations of `0..n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        result.push(indices.clone());

        // Rightmost index that can still be advanced
        let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
            return result;
        };
        indices[pos] += 1;
        for i in pos + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(
            file_name("/static/images/skyplots/red_blue.png"),
            "red_blue.png"
        );
        assert_eq!(file_name("red.png"), "red.png");
        assert_eq!(
            file_name("https://example.org/a/b/blank.png?v=3#top"),
            "blank.png"
        );
    }

    #[test]
    fn stem_strips_known_extension_only() {
        assert_eq!(filename_stem("/img/red_blue.png", ".png"), "red_blue");
        assert_eq!(filename_stem("/img/red_blue.jpg", ".png"), "red_blue.jpg");
    }

    #[test]
    fn decode_splits_on_delimiter() {
        assert_eq!(
            decode_tokens("light-grey_yellow", "_"),
            vec!["light-grey", "yellow"]
        );
        assert_eq!(decode_tokens("blank", "_"), vec!["blank"]);
    }

    #[test]
    fn encode_empty_subset_is_blank() {
        let conventions = EncodingConventions::default();
        let empty: [&str; 0] = [];
        assert_eq!(encode_subset(&empty, &conventions), "blank");
        assert_eq!(encode_subset(&["red", "blue"], &conventions), "red_blue");
    }

    #[test]
    fn combinations_are_lexicographic() {
        assert_eq!(
            combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
        assert!(combinations(2, 3).is_empty());
    }

    #[test]
    fn expected_encodings_cover_every_subset() {
        let conventions = EncodingConventions::default();
        let encodings = expected_encodings(&crate::default_colours(), &conventions);
        assert_eq!(
            encodings,
            vec![
                "blank",
                "blue",
                "light-grey",
                "yellow",
                "blue_light-grey",
                "blue_yellow",
                "light-grey_yellow",
                "blue_light-grey_yellow",
            ]
        );
    }
}
