//! Builder configuration and merge-style patching.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

fn default_separator() -> String {
    " ".to_string()
}

/// Output configuration for a [`crate::TokenBuilder`].
///
/// Wire names match the recognized option keys: `ignoreDuplicate`,
/// `separator`, `prefix`, `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderConfig {
    /// Silently drop tokens already present in the sequence.
    pub ignore_duplicate: bool,
    /// Joins tokens on final build.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Prepended to the final joined string.
    pub prefix: String,
    /// Appended to the final joined string.
    pub suffix: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            ignore_duplicate: false,
            separator: default_separator(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl BuilderConfig {
    /// Overwrite only the fields the patch supplies; everything else is
    /// retained. Returns the names of the updated fields.
    pub fn merge(&mut self, patch: ConfigPatch) -> Vec<&'static str> {
        let mut updated = Vec::new();

        if let Some(ignore_duplicate) = patch.ignore_duplicate {
            self.ignore_duplicate = ignore_duplicate;
            updated.push("ignoreDuplicate");
        }
        if let Some(separator) = patch.separator {
            self.separator = separator;
            updated.push("separator");
        }
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
            updated.push("prefix");
        }
        if let Some(suffix) = patch.suffix {
            self.suffix = suffix;
            updated.push("suffix");
        }

        updated
    }
}

/// Partial update for [`BuilderConfig`]. Absent fields leave the existing
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ConfigPatch {
    pub ignore_duplicate: Option<bool>,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl ConfigPatch {
    /// Parse a patch from an inline JSON object or a `@path` file spec.
    pub fn from_spec(spec: &str) -> Result<ConfigPatch> {
        let raw = read_spec_to_string(spec)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Resolve a config spec to its JSON text: either inline, or the contents of
/// the file named by an `@path` prefix.
fn read_spec_to_string(spec: &str) -> Result<String> {
    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(Error::Config(
                "Invalid config spec '@' (missing file path)".to_string(),
            ));
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    Ok(spec.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BuilderConfig::default();
        assert!(!config.ignore_duplicate);
        assert_eq!(config.separator, " ");
        assert_eq!(config.prefix, "");
        assert_eq!(config.suffix, "");
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut config = BuilderConfig::default();
        let updated = config.merge(ConfigPatch {
            prefix: Some("[".to_string()),
            suffix: Some("]".to_string()),
            ..Default::default()
        });

        assert_eq!(updated, vec!["prefix", "suffix"]);
        assert_eq!(config.prefix, "[");
        assert_eq!(config.suffix, "]");
        assert_eq!(config.separator, " ");
        assert!(!config.ignore_duplicate);
    }

    #[test]
    fn merge_empty_patch_is_noop() {
        let mut config = BuilderConfig::default();
        let updated = config.merge(ConfigPatch::default());
        assert!(updated.is_empty());
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn from_spec_inline_json() {
        let patch = ConfigPatch::from_spec(r#"{"ignoreDuplicate": true, "separator": "-"}"#)
            .unwrap();
        assert_eq!(patch.ignore_duplicate, Some(true));
        assert_eq!(patch.separator, Some("-".to_string()));
        assert_eq!(patch.prefix, None);
    }

    #[test]
    fn from_spec_rejects_unknown_keys() {
        assert!(ConfigPatch::from_spec(r#"{"separater": "-"}"#).is_err());
    }

    #[test]
    fn from_spec_rejects_empty_at_path() {
        assert!(matches!(
            ConfigPatch::from_spec("@"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn from_spec_missing_file_is_io_error() {
        assert!(matches!(
            ConfigPatch::from_spec("@/nonexistent/tokenline-config.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = BuilderConfig {
            ignore_duplicate: true,
            separator: "-".to_string(),
            prefix: "<".to_string(),
            suffix: ">".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("ignoreDuplicate"));
        let back: BuilderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
