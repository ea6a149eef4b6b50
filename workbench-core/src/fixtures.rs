//! Fixture data access.
//!
//! Fixtures are static JSON files standing in for backend responses. They are
//! re-read on every request so edits show up on the next page load without a
//! restart. Handlers receive a [`FixtureSource`] explicitly instead of reaching
//! for process-wide state.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::records::{FormSpec, NavItem};
use crate::{Result, WorkbenchError};

/// Source of fixture data for a single request.
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Loads a fresh snapshot of every fixture.
    ///
    /// # Errors
    /// - `WorkbenchError::Io` - Fixture directory exists but could not be read
    async fn load(&self) -> Result<FixtureSet>;
}

/// Immutable snapshot of all fixtures keyed by file stem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    entries: BTreeMap<String, Value>,
}

impl FixtureSet {
    /// Creates an empty fixture set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a fixture.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Builder-style variant of [`FixtureSet::insert`].
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Fixture keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the records of an array fixture.
    ///
    /// A missing fixture is an empty collection.
    ///
    /// # Errors
    /// - `WorkbenchError::Fixture` - Fixture exists but is not a JSON array
    pub fn list(&self, key: &str) -> Result<&[Value]> {
        match self.entries.get(key) {
            None => Ok(&[]),
            Some(Value::Array(records)) => Ok(records),
            Some(other) => Err(WorkbenchError::Fixture {
                key: key.to_string(),
                reason: format!("expected an array, found {}", json_kind(other)),
            }),
        }
    }

    /// Records from `users.json`.
    ///
    /// # Errors
    /// - `WorkbenchError::Fixture` - Fixture is not a JSON array
    pub fn users(&self) -> Result<&[Value]> {
        self.list("users")
    }

    /// Records from `announcements.json`.
    ///
    /// # Errors
    /// - `WorkbenchError::Fixture` - Fixture is not a JSON array
    pub fn announcements(&self) -> Result<&[Value]> {
        self.list("announcements")
    }

    /// Records from `events.json`.
    ///
    /// # Errors
    /// - `WorkbenchError::Fixture` - Fixture is not a JSON array
    pub fn events(&self) -> Result<&[Value]> {
        self.list("events")
    }

    /// Navigation items from the `navigation` key of `family.json`.
    ///
    /// # Errors
    /// - `WorkbenchError::Fixture` - Navigation entries lack a slug or label
    pub fn navigation(&self) -> Result<Vec<NavItem>> {
        match self.nested("family", "navigation") {
            None => Ok(Vec::new()),
            Some(value) => decode("family", value),
        }
    }

    /// Form description from the `request_form` key of `forms.json`.
    ///
    /// # Errors
    /// - `WorkbenchError::Fixture` - Form description has the wrong shape
    pub fn request_form(&self) -> Result<FormSpec> {
        match self.nested("forms", "request_form") {
            None => Ok(FormSpec::default()),
            Some(value) => decode("forms", value),
        }
    }

    fn nested(&self, key: &str, field: &str) -> Option<&Value> {
        self.entries.get(key).and_then(|value| value.get(field))
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| WorkbenchError::Fixture {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads every `*.json` file in a directory on each load.
///
/// A file that fails to parse becomes an empty object so one broken fixture
/// does not take down unrelated pages. A missing directory yields no fixtures.
#[derive(Debug, Clone)]
pub struct DirectoryFixtures {
    dir: PathBuf,
}

impl DirectoryFixtures {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FixtureSource for DirectoryFixtures {
    async fn load(&self) -> Result<FixtureSet> {
        let mut set = FixtureSet::new();

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Fixture directory {} does not exist", self.dir.display());
                return Ok(set);
            }
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let contents = tokio::fs::read_to_string(&path).await?;
            let value = match serde_json::from_str::<Value>(&contents) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Fixture {} is not valid JSON: {e}", path.display());
                    Value::Object(serde_json::Map::new())
                }
            };
            set.insert(key, value);
        }

        debug!("Loaded {} fixtures from {}", set.len(), self.dir.display());
        Ok(set)
    }
}

/// Fixed in-memory fixtures, handy for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticFixtures {
    set: FixtureSet,
}

impl StaticFixtures {
    pub fn new(set: FixtureSet) -> Self {
        Self { set }
    }
}

#[async_trait]
impl FixtureSource for StaticFixtures {
    async fn load(&self) -> Result<FixtureSet> {
        Ok(self.set.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_directory_loads_json_files_by_stem() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.json"), r#"[{"id": 1}]"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let set = DirectoryFixtures::new(dir.path()).load().await.unwrap();

        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["users"]);
        assert_eq!(set.users().unwrap(), &[json!({"id": 1})]);
    }

    #[tokio::test]
    async fn test_invalid_json_becomes_empty_object() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("events.json"), "[]").unwrap();

        let set = DirectoryFixtures::new(dir.path()).load().await.unwrap();

        assert_eq!(set.get("broken"), Some(&json!({})));
        assert!(set.events().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let fixtures = DirectoryFixtures::new(dir.path().join("nope"));

        let set = fixtures.load().await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_fixtures_are_reread_on_each_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "[]").unwrap();
        let fixtures = DirectoryFixtures::new(dir.path());

        assert!(fixtures.load().await.unwrap().users().unwrap().is_empty());

        std::fs::write(&path, r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(fixtures.load().await.unwrap().users().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_list_is_empty() {
        let set = FixtureSet::new();
        assert!(set.users().unwrap().is_empty());
        assert!(set.navigation().unwrap().is_empty());
        assert_eq!(set.request_form().unwrap(), FormSpec::default());
    }

    #[test]
    fn test_non_array_list_is_an_error() {
        let set = FixtureSet::new().with("users", json!({"id": 1}));

        let err = set.users().unwrap_err();
        assert!(matches!(err, WorkbenchError::Fixture { ref key, .. } if key == "users"));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_navigation_from_family_fixture() {
        let set = FixtureSet::new().with(
            "family",
            json!({
                "navigation": [
                    {"slug": "overview", "label": "Overview", "body": "Hello"},
                    {"slug": "members", "label": "Members"}
                ]
            }),
        );

        let items = set.navigation().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slug, "overview");
        assert_eq!(items[0].extra.get("body"), Some(&json!("Hello")));
    }

    #[test]
    fn test_navigation_without_slug_is_an_error() {
        let set = FixtureSet::new().with("family", json!({"navigation": [{"label": "Oops"}]}));
        assert!(set.navigation().is_err());
    }

    #[tokio::test]
    async fn test_static_fixtures_return_snapshot() {
        let set = FixtureSet::new().with("events", json!([]));
        let fixtures = StaticFixtures::new(set.clone());

        assert_eq!(fixtures.load().await.unwrap(), set);
    }
}
