//! JSON fixture loading
//!
//! Fixture files are JSON objects keyed by stringified id:
//! `{"1": {"id": 1, ...}, "2": {...}}`.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::models::{Property, User};

pub const PROPERTIES_FILE: &str = "properties.json";
pub const USERS_FILE: &str = "users.json";

/// Seed data read from the fixtures directory
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub properties: BTreeMap<i32, Property>,
    pub users: BTreeMap<i32, User>,
}

impl Fixtures {
    /// Read both fixture files from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let properties = load_properties(&dir.join(PROPERTIES_FILE))?;
        let users = load_users(&dir.join(USERS_FILE))?;

        tracing::debug!(
            dir = %dir.display(),
            properties = properties.len(),
            users = users.len(),
            "loaded fixtures"
        );

        Ok(Self { properties, users })
    }
}

pub fn load_properties(path: &Path) -> Result<BTreeMap<i32, Property>> {
    let map: BTreeMap<i32, Property> = load_map(path)?;
    for (key, property) in &map {
        if *key != property.id {
            tracing::warn!(key, id = property.id, "property fixture key does not match its id");
        }
    }
    Ok(map)
}

pub fn load_users(path: &Path) -> Result<BTreeMap<i32, User>> {
    load_map(path)
}

fn load_map<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<i32, T>> {
    let content = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| CoreError::json(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PROPERTIES: &str = r#"{
        "1": {"id": 1, "owner_id": 1, "title": "Speed lamp", "cost_per_night": 93061,
              "parking_spaces": 6, "number_of_bathrooms": 4, "number_of_bedrooms": 8,
              "country": "Canada", "street": "536 Namsub Highway", "city": "Sotboske",
              "province": "Quebec", "post_code": "28142", "active": true},
        "2": {"id": 2, "owner_id": 2, "title": "Blank corner", "cost_per_night": 85234,
              "city": "Vancouver"}
    }"#;

    const USERS: &str = r#"{
        "1": {"id": 1, "name": "Devin Sanders", "email": "tristanjacobs@gmail.com", "password": "$2a$10$FB"}
    }"#;

    fn write(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn loads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PROPERTIES_FILE, PROPERTIES);
        write(dir.path(), USERS_FILE, USERS);

        let fixtures = Fixtures::load(dir.path()).unwrap();
        assert_eq!(fixtures.properties.len(), 2);
        assert_eq!(fixtures.users.len(), 1);
        assert_eq!(fixtures.properties[&2].city, "Vancouver");
        assert_eq!(fixtures.users[&1].name, "Devin Sanders");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PROPERTIES_FILE, PROPERTIES);

        let err = Fixtures::load(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PROPERTIES_FILE, "{\"1\": {\"id\": ");

        let err = load_properties(&dir.path().join(PROPERTIES_FILE)).unwrap_err();
        assert!(matches!(err, CoreError::Json { .. }));
        assert!(err.to_string().contains(PROPERTIES_FILE));
    }

    #[test]
    fn non_numeric_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), USERS_FILE, r#"{"abc": {"id": 1, "name": "x", "email": "x@y", "password": "p"}}"#);

        assert!(load_users(&dir.path().join(USERS_FILE)).is_err());
    }
}
