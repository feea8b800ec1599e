use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::constants::{EXPECTED_SUFFIX, INPUT_SUFFIX};

pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

/// An input document and the normalized output it must produce
#[derive(Debug)]
pub struct NormalizeCase {
    pub name: String,
    pub input: Value,
    pub expected: Value,
}

impl FixtureLoader {
    /// Create a new fixture loader
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.fixtures_dir.join(path.as_ref())
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path);

        let content = std::fs::read_to_string(&full_path)
            .context(format!("Failed to read fixture file: {:?}", full_path))?;

        let json: Value = serde_json::from_str(&content)
            .context(format!("Failed to parse JSON fixture: {:?}", full_path))?;

        tracing::debug!(path = ?full_path, "Loaded fixture");
        Ok(json)
    }

    /// Load a JSON fixture file into a typed value
    pub fn load_as<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let full_path = self.resolve(&path);
        let json = self.load(path)?;
        serde_json::from_value(json)
            .context(format!("Fixture has unexpected shape: {:?}", full_path))
    }

    /// Check if a fixture file exists
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).exists()
    }

    /// Get the fixtures directory path
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }

    /// Load every `<name>.input.json` / `<name>.expected.json` pair in `subdir`, sorted by name.
    ///
    /// An input without its expected counterpart is an error.
    pub fn normalize_cases(&self, subdir: impl AsRef<Path>) -> Result<Vec<NormalizeCase>> {
        let dir = self.resolve(subdir);
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&dir)
            .context(format!("Failed to list fixture directory: {:?}", dir))?
        {
            let file_name = entry?.file_name();
            if let Some(name) = file_name.to_str().and_then(|n| n.strip_suffix(INPUT_SUFFIX)) {
                names.push(name.to_string());
            }
        }
        names.sort();
        tracing::debug!(dir = ?dir, cases = names.len(), "Found normalize fixtures");

        names
            .into_iter()
            .map(|name| {
                let input = self.load(dir.join(format!("{}{}", name, INPUT_SUFFIX)))?;
                let expected_path = dir.join(format!("{}{}", name, EXPECTED_SUFFIX));
                if !expected_path.exists() {
                    anyhow::bail!("Missing expected output for fixture '{}'", name);
                }
                let expected = self.load(expected_path)?;
                Ok(NormalizeCase {
                    name,
                    input,
                    expected,
                })
            })
            .collect()
    }
}
