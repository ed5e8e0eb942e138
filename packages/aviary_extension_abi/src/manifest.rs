// SPDX-License-Identifier: MIT
//! Extension manifest format — `aviary-extension.json`.
//!
//! Every extension pack must include an `aviary-extension.json` manifest at
//! the pack root. The shell reads this before opening the extension binary.

use serde::{Deserialize, Serialize};

/// Contents of an `aviary-extension.json` manifest file.
///
/// # Example
///
/// ```json
/// {
///   "name": "hello-aviary",
///   "version": "1.0.0",
///   "entry": "libhello_aviary.so"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Extension display name (e.g. `"hello-aviary"`).
    pub name: String,

    /// Semver version string (e.g. `"1.0.0"`).
    pub version: String,

    /// Extension description shown in the shell UI.
    #[serde(default)]
    pub description: String,

    /// Author or publisher identifier.
    #[serde(default)]
    pub author: String,

    /// Relative path to the extension binary inside the pack.
    pub entry: String,
}

impl ExtensionManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the manifest to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "name": "hello-aviary",
            "version": "1.0.0",
            "entry": "libhello_aviary.so"
        }"#;
        let m = ExtensionManifest::from_json(json).unwrap();
        assert_eq!(m.name, "hello-aviary");
        assert_eq!(m.entry, "libhello_aviary.so");
        assert!(m.description.is_empty());
        assert!(m.author.is_empty());
    }

    #[test]
    fn rejects_manifest_without_entry() {
        let json = r#"{ "name": "broken", "version": "0.1.0" }"#;
        assert!(ExtensionManifest::from_json(json).is_err());
    }

    #[test]
    fn manifest_roundtrips_through_json() {
        let m = ExtensionManifest {
            name: "theme-night".into(),
            version: "2.3.1".into(),
            description: "Dark theme pack".into(),
            author: "aviary".into(),
            entry: "libtheme_night.dylib".into(),
        };
        let parsed = ExtensionManifest::from_json(&m.to_json().unwrap()).unwrap();
        assert_eq!(parsed.name, m.name);
        assert_eq!(parsed.version, m.version);
        assert_eq!(parsed.entry, m.entry);
    }
}
