// Dataset loading.
// Reads a PageData JSON document from disk and validates it before the UI
// ever sees it.

use std::fs;
use std::path::Path;

use super::types::PageData;
use crate::error::Result;

impl PageData {
    /// Parse a dataset from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: PageData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::FeedDeckError;

    #[test]
    fn test_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.json");

        let json = serde_json::to_string_pretty(&PageData::sample()).unwrap();
        fs::write(&path, json).unwrap();

        let loaded = PageData::from_json_file(&path).unwrap();
        assert_eq!(loaded.current_user.name, "Olenna Mason");
        assert_eq!(loaded.posts.len(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        let result = PageData::from_json_file(&path);
        assert!(matches!(result, Err(FeedDeckError::Io(_))));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut data = PageData::sample();
        data.groups[1].id = data.groups[0].id.clone();

        let json = serde_json::to_string(&data).unwrap();
        let result = PageData::from_json_str(&json);
        assert!(matches!(result, Err(FeedDeckError::Data(_))));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let result = PageData::from_json_str("{ not json");
        assert!(matches!(result, Err(FeedDeckError::Json(_))));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "current_user": {"name": "Solo User", "avatar_url": ""},
            "contacts": [
                {"id": "1", "name": "Only Contact", "avatar_url": "", "is_online": false}
            ],
            "stories": [],
            "groups": [],
            "posts": []
        }"#;

        let data = PageData::from_json_str(json).unwrap();
        assert_eq!(data.current_user.short_name(), "Solo");
        assert!(data.contacts[0].last_message.is_none());
        assert!(data.contacts[0].unread_count.is_none());
    }
}
