//! JSON seed fixtures, embedded or read from a data directory.

use std::fs;
use std::path::Path;

use paperdesk_core::ServiceError;
use tracing::{debug, info};

use crate::record::{Fields, Record};

/// FixtureLoader turns JSON fixture documents into seed sequences.
///
/// A fixture is a JSON array of flat records:
///
/// ```text
/// [
///   {"Id": 1, "name": "...", ..., "createdAt": "2024-01-15T10:30:00.000Z"},
///   ...
/// ]
/// ```
///
/// A fixture file found on disk replaces the embedded default for its
/// entity. A missing file is not an error; a malformed one is.
pub struct FixtureLoader;

impl FixtureLoader {
    /// Decode a fixture document.
    pub fn parse<F: Fields>(json: &str) -> Result<Vec<Record<F>>, ServiceError> {
        serde_json::from_str(json).map_err(|e| {
            ServiceError::Internal(format!("{} fixture: {}", F::ENTITY, e))
        })
    }

    /// Load records from `path` if the file exists, otherwise decode
    /// `embedded`.
    pub fn load_or_embedded<F: Fields>(
        path: Option<&Path>,
        embedded: &str,
    ) -> Result<Vec<Record<F>>, ServiceError> {
        if let Some(path) = path {
            if path.is_file() {
                let content = fs::read_to_string(path).map_err(|e| {
                    ServiceError::Storage(format!("read {}: {}", path.display(), e))
                })?;
                let records = Self::parse::<F>(&content)?;
                info!(
                    "FixtureLoader: loaded {} {} records from {:?}",
                    records.len(),
                    F::ENTITY,
                    path
                );
                return Ok(records);
            }
            debug!("FixtureLoader: {:?} does not exist, using embedded {} fixture", path, F::ENTITY);
        }
        Self::parse::<F>(embedded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::{thing, Thing};

    const EMBEDDED: &str = r#"[
        {"Id": 1, "name": "Alpha", "count": 1, "createdAt": "2024-01-01T00:00:00.000Z"}
    ]"#;

    #[test]
    fn parse_keeps_order() {
        let records = FixtureLoader::parse::<Thing>(
            r#"[
                {"Id": 2, "name": "B", "count": 2, "createdAt": "t2"},
                {"Id": 1, "name": "A", "count": 1, "createdAt": "t1"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 2);
        assert_eq!(records[1].fields, thing("A", 1));
    }

    #[test]
    fn parse_rejects_malformed() {
        let err = FixtureLoader::parse::<Thing>(r#"[{"Id": "x"}]"#).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL");
        assert!(err.to_string().starts_with("thing fixture"));
    }

    #[test]
    fn no_path_uses_embedded() {
        let records = FixtureLoader::load_or_embedded::<Thing>(None, EMBEDDED).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.name, "Alpha");
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("things.json");
        let records = FixtureLoader::load_or_embedded::<Thing>(Some(&path), EMBEDDED).unwrap();
        assert_eq!(records[0].fields.name, "Alpha");
    }

    #[test]
    fn file_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("things.json");
        fs::write(
            &path,
            r#"[{"Id": 5, "name": "FromDisk", "count": 3, "createdAt": "t"}]"#,
        )
        .unwrap();

        let records = FixtureLoader::load_or_embedded::<Thing>(Some(&path), EMBEDDED).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 5);
        assert_eq!(records[0].fields.name, "FromDisk");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("things.json");
        fs::write(&path, "not json").unwrap();

        let err = FixtureLoader::load_or_embedded::<Thing>(Some(&path), EMBEDDED).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL");
    }
}
