//! TOML-backed corpus for the name grammar tests.

use std::path::Path;

use serde::Deserialize;

/// Valid/invalid name lists loaded from a fixture file.
#[derive(Debug, Deserialize)]
pub struct NameCorpus {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl NameCorpus {
    pub fn load(path: &Path) -> Self {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("read name corpus {}: {err}", path.display()));
        toml::from_str(&text)
            .unwrap_or_else(|err| panic!("parse name corpus {}: {err}", path.display()))
    }
}
