//! History normalization.
//!
//! Converts client-supplied history items into `contents` entries: any
//! object with a `parts` array passes through unchanged, legacy
//! `{role, text}` items are rewritten to a single-part entry, and anything
//! else is either dropped (lenient) or rejected (strict).

use mentor_types::chat::{HistoryItem, HistoryMode};
use mentor_types::error::ChatError;
use mentor_types::turn::Content;

/// Normalize raw history items, preserving order.
pub fn normalize_history(
    items: Vec<HistoryItem>,
    mode: HistoryMode,
) -> Result<Vec<Content>, ChatError> {
    let mut contents = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        match item.into_content() {
            Some(content) => contents.push(content),
            None => match mode {
                HistoryMode::Lenient => {
                    tracing::debug!(index, "dropping unrecognized history item");
                }
                HistoryMode::Strict => return Err(ChatError::InvalidHistory { index }),
            },
        }
    }

    Ok(contents)
}
