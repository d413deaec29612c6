//! Database dump loader.

use std::path::Path;

use db_core::Database;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`Database`] snapshots stored as a single JSON document.
pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Load a database snapshot from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Database> {
        let content = read_file(path)?;
        Self::from_json_str(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a database snapshot from JSON text.
    pub fn from_json_str(content: &str) -> LoadResult<Database> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse database JSON: {}", e))
    }

    /// Encode a database back into JSON text, including unmodelled fields.
    pub fn to_json_string(database: &Database) -> LoadResult<String> {
        serde_json::to_string_pretty(database)
            .map_err(|e| anyhow::anyhow!("Failed to encode database JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "templates": {
            "items": {
                "mag": { "_id": "mag", "_parent": "5448bc234bdc2d3c308b4569", "_props": { "StackSlots": 30 } }
            },
            "handbook": { "Categories": [], "Items": [] }
        },
        "traders": {
            "ragfair": { "base": { "_id": "ragfair", "nickname": "Flea" } }
        },
        "globals": { "config": { "Ragfair": {} } }
    }"#;

    #[test]
    fn loads_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let db = DatabaseLoader::load(file.path()).unwrap();
        assert_eq!(db.item("mag").unwrap().parent, "5448bc234bdc2d3c308b4569");
        assert_eq!(db.trader("ragfair").unwrap().base.id, "ragfair");
    }

    #[test]
    fn keeps_unmodelled_fields() {
        let db = DatabaseLoader::from_json_str(SNAPSHOT).unwrap();
        let encoded = DatabaseLoader::to_json_string(&db).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["globals"]["config"]["Ragfair"], serde_json::json!({}));
        assert_eq!(value["templates"]["items"]["mag"]["_props"]["StackSlots"], 30);
        assert_eq!(value["traders"]["ragfair"]["base"]["nickname"], "Flea");
    }

    #[test]
    fn reports_parse_errors() {
        let err = DatabaseLoader::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse database JSON"));
    }
}
