//! Flash Payload
//!
//! Decodes the `[tag, message]` pairs the page template embeds in a script tag.

use crate::models::FlashEntry;

/// Parse the flash payload into entries plus the number of entries skipped.
/// Blank text means no flashes.
///
/// The payload must be a JSON array; entries that are not a `[tag, message]`
/// pair are skipped so the rest still show.
pub fn parse_flash_data(raw: &str) -> Result<(Vec<FlashEntry>, usize), String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok((Vec::new(), 0));
    }
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| format!("Invalid flash data: {}", e))?;

    let entries: Vec<FlashEntry> = values.iter().filter_map(FlashEntry::from_value).collect();
    let skipped = values.len() - entries.len();
    Ok((entries, skipped))
}

/// Read and parse the flash payload from `<script id={element_id}>`
pub fn read_flash_entries(element_id: &str) -> Result<Vec<FlashEntry>, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let (entries, skipped) = parse_flash_data(&el.text_content().unwrap_or_default())?;
            if skipped > 0 {
                web_sys::console::error_1(&format!("[FLASH] Skipped {} malformed entries", skipped).into());
            }
            Ok(entries)
        }
        None => Ok(Vec::new()),
    }
}
