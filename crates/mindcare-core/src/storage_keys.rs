//! Storage key conventions.
//!
//! Pure string constants — the storage collaborator is addressed by fixed
//! keys, and every write under a key replaces the previous value.

/// Key under which the user's progress record is stored.
pub const USER_PROGRESS: &str = "mindcare_user_progress";

/// File name used by file-backed stores for a given key.
pub fn file_name(key: &str) -> String {
    format!("{key}.json")
}
