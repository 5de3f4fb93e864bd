//! Final name selection for imported lines

use crate::config::ImportSettings;
use crate::constants::import::{ELLIPSIS, EMPTY_QUOTED_NAME};

/// Name chosen for an accepted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalName {
    pub name: String,
    /// A placeholder replaced an empty extracted name
    pub placeholder: bool,
    /// The extracted name was cut to the maximum length
    pub truncated: bool,
}

/// Pick the stored name for an accepted line
///
/// `ordinal` is the 1-based position of this line among the lines accepted so
/// far in the batch; it is embedded in the placeholder name.
pub fn finalize_name(extracted: &str, ordinal: usize, settings: &ImportSettings) -> FinalName {
    let extracted = extracted.trim();

    if extracted.is_empty() || extracted == EMPTY_QUOTED_NAME {
        return FinalName {
            name: placeholder_name(&settings.placeholder_prefix, ordinal),
            placeholder: true,
            truncated: false,
        };
    }

    let (name, truncated) = truncate_name(extracted, settings.max_name_length);
    FinalName {
        name,
        placeholder: false,
        truncated,
    }
}

/// `<prefix> <ordinal>`
pub fn placeholder_name(prefix: &str, ordinal: usize) -> String {
    format!("{} {}", prefix.trim(), ordinal)
}

/// Cut a name to `max_chars` characters plus an ellipsis when it is longer
pub fn truncate_name(name: &str, max_chars: usize) -> (String, bool) {
    if name.chars().count() <= max_chars {
        return (name.to_string(), false);
    }

    let mut truncated: String = name.chars().take(max_chars).collect();
    truncated.push_str(ELLIPSIS);
    (truncated, true)
}
