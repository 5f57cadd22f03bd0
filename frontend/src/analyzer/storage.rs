use web_sys::window;

const API_KEY_STORAGE_KEY: &str = "youtube_api_key";

// Session storage keeps the key for this tab only.
pub fn get_stored_api_key() -> Option<String> {
    window()
        .and_then(|w| w.session_storage().ok())
        .and_then(|s| s.and_then(|storage| storage.get_item(API_KEY_STORAGE_KEY).ok()))
        .flatten()
}

pub fn store_api_key(api_key: &str) -> Result<(), String> {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if api_key.trim().is_empty() {
                storage
                    .remove_item(API_KEY_STORAGE_KEY)
                    .map_err(|_| "Failed to remove API key".to_string())?;
            } else {
                storage
                    .set_item(API_KEY_STORAGE_KEY, api_key)
                    .map_err(|_| "Failed to store API key".to_string())?;
            }
        }
    }
    Ok(())
}
