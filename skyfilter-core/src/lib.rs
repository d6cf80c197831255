pub mod config;
pub mod encoding;
pub mod error;
pub mod image;
pub mod matcher;
pub mod selection;
pub mod switch;
pub mod validation;
pub mod view;

pub use config::{
    default_colours, find_colour, validate_colours, Colour, EncodingConventions, FilterConfig,
    MatchPolicy, BLANK_TOKEN, IMAGE_EXTENSION, MAX_COLOURS, SWITCH_PREFIX, TOKEN_DELIMITER,
};
pub use encoding::{decode_tokens, encode_subset, expected_encodings, file_name, filename_stem};
pub use error::FilterError;
pub use image::ImageEntry;
pub use matcher::{apply_matches, contains_all, covers_exactly, image_matches};
pub use selection::{read_selection, FilterSelection};
pub use switch::{filter_token, Switch};
pub use validation::{validate_encodings, EncodingReport};
pub use view::FilterView;
