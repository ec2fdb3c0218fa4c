//! Local-storage mirror of the current session's credentials.
//!
//! The mirror holds exactly two keys, `token` and `username`. It is written
//! in full after a successful login or signup and removed in full on logout;
//! it is never partially cleared. Absence of either key means "logged out".

use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// The credential pair persisted across page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub token: String,
    pub username: String,
}

/// Mirror the current user's credentials into local storage.
pub fn save(credentials: &StoredCredentials) {
    // Storage writes only fail on quota; nothing actionable for two short strings.
    let _ = LocalStorage::set(TOKEN_KEY, credentials.token.clone());
    let _ = LocalStorage::set(USERNAME_KEY, credentials.username.clone());
}

/// Read the mirrored credentials. Returns `None` unless both keys exist.
pub fn load() -> Option<StoredCredentials> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    let username: String = LocalStorage::get(USERNAME_KEY).ok()?;
    Some(StoredCredentials { token, username })
}

/// Remove both mirrored keys.
pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USERNAME_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn credentials() -> StoredCredentials {
        StoredCredentials {
            token: "opaque-token".to_string(),
            username: "alice".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn save_then_load_roundtrips() {
        clear();
        save(&credentials());
        assert_eq!(load(), Some(credentials()));
        clear();
    }

    #[wasm_bindgen_test]
    fn clear_removes_both_keys() {
        save(&credentials());
        clear();
        assert_eq!(load(), None);
        let token: Result<String, _> = LocalStorage::get("token");
        let username: Result<String, _> = LocalStorage::get("username");
        assert!(token.is_err());
        assert!(username.is_err());
    }

    #[wasm_bindgen_test]
    fn load_requires_both_keys() {
        clear();
        let _ = LocalStorage::set("token", "only-token".to_string());
        assert_eq!(load(), None);
        clear();
    }
}
