//! JSON form of a layout: an array of placed items in layout order, each
//! carrying its definition fields plus `x`, `y` and `rotation`.
//!
//! Handles are not written. Decoding assigns fresh handles in array order.

use planner::{Layout, PlacedItem};

use crate::save_error::SaveError;

pub fn encode_layout(layout: &Layout) -> Result<String, SaveError> {
    let items: Vec<&PlacedItem> = layout.items().collect();
    serde_json::to_string(&items).map_err(|e| SaveError::Encode(e.to_string()))
}

/// Fails with `SaveError::Decode` on malformed JSON or records missing
/// required fields. Missing `rotation` reads as 0.
pub fn decode_layout(json: &str) -> Result<Layout, SaveError> {
    let items: Vec<PlacedItem> = serde_json::from_str(json)?;
    Ok(Layout::from_items(items))
}
