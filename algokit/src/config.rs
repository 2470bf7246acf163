//! Policy configuration shared by the string and array algorithms.
//!
//! Defaults can be overridden through environment variables or a TOML file:
//!
//! ```toml
//! case_sensitivity = "insensitive"
//! pair_policy = "unordered"
//! ```
//!
//! | Variable | Values |
//! |---|---|
//! | `ALGOKIT_CASE_SENSITIVITY` | `sensitive`, `insensitive` |
//! | `ALGOKIT_PAIR_POLICY` | `occurrence`, `unordered` |

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Character comparison policy for counting, palindrome, anagram and
/// first-unique lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Characters compare exactly as given.
    #[default]
    Sensitive,
    /// Characters are folded with `char::to_lowercase` before comparison.
    Insensitive,
}

impl CaseSensitivity {
    /// Fold a character into the sequence of chars it compares as.
    pub fn fold(self, ch: char) -> impl Iterator<Item = char> {
        let (exact, lowered) = match self {
            Self::Sensitive => (Some(ch), None),
            Self::Insensitive => (None, Some(ch.to_lowercase())),
        };
        exact.into_iter().chain(lowered.into_iter().flatten())
    }

    /// Fold a whole string into its comparable chars.
    pub fn fold_str(self, input: &str) -> Vec<char> {
        input.chars().flat_map(|c| self.fold(c)).collect()
    }
}

impl FromStr for CaseSensitivity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            other => Err(ConfigError::UnknownValue {
                key: "case_sensitivity",
                value: other.to_string(),
            }),
        }
    }
}

/// How the pair-sum finder reports qualifying pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    /// One pair per qualifying input occurrence, `(a, b)` and `(b, a)` both kept.
    #[default]
    Occurrence,
    /// Each unordered pair once, normalized to `(min, max)`.
    Unordered,
}

impl FromStr for PairPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "occurrence" => Ok(Self::Occurrence),
            "unordered" => Ok(Self::Unordered),
            other => Err(ConfigError::UnknownValue {
                key: "pair_policy",
                value: other.to_string(),
            }),
        }
    }
}

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown value {value:?} for {key}")]
    UnknownValue { key: &'static str, value: String },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level algorithm policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgoConfig {
    pub case_sensitivity: CaseSensitivity,
    pub pair_policy: PairPolicy,
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            case_sensitivity: env_override("ALGOKIT_CASE_SENSITIVITY").unwrap_or_default(),
            pair_policy: env_override("ALGOKIT_PAIR_POLICY").unwrap_or_default(),
        }
    }
}

impl AlgoConfig {
    /// Built-in defaults, ignoring the environment.
    pub fn baseline() -> Self {
        Self {
            case_sensitivity: CaseSensitivity::default(),
            pair_policy: PairPolicy::default(),
        }
    }

    /// Parse a TOML document. Missing keys take their [`Default`] values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

fn env_override<T: FromStr<Err = ConfigError>>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(var, error = %e, "Ignoring invalid environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policies() {
        assert_eq!(
            "Insensitive".parse::<CaseSensitivity>().unwrap(),
            CaseSensitivity::Insensitive
        );
        assert_eq!(
            " sensitive ".parse::<CaseSensitivity>().unwrap(),
            CaseSensitivity::Sensitive
        );
        assert_eq!("unordered".parse::<PairPolicy>().unwrap(), PairPolicy::Unordered);
        assert!("sideways".parse::<PairPolicy>().is_err());
    }

    #[test]
    fn test_fold() {
        assert_eq!(CaseSensitivity::Sensitive.fold_str("AbC"), vec!['A', 'b', 'C']);
        assert_eq!(CaseSensitivity::Insensitive.fold_str("AbC"), vec!['a', 'b', 'c']);
        // 'İ' lowercases to two chars
        assert_eq!(CaseSensitivity::Insensitive.fold('İ').count(), 2);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AlgoConfig::from_toml_str("pair_policy = \"unordered\"\n").unwrap();
        assert_eq!(config.pair_policy, PairPolicy::Unordered);

        let config = AlgoConfig::from_toml_str("case_sensitivity = \"insensitive\"").unwrap();
        assert_eq!(config.case_sensitivity, CaseSensitivity::Insensitive);
    }

    #[test]
    fn test_from_toml_rejects_unknown_variant() {
        let err = AlgoConfig::from_toml_str("pair_policy = \"both\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algokit.toml");
        std::fs::write(
            &path,
            "case_sensitivity = \"insensitive\"\npair_policy = \"unordered\"\n",
        )
        .unwrap();

        let config = AlgoConfig::load(&path).unwrap();
        assert_eq!(config.case_sensitivity, CaseSensitivity::Insensitive);
        assert_eq!(config.pair_policy, PairPolicy::Unordered);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AlgoConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_baseline() {
        let config = AlgoConfig::baseline();
        assert_eq!(config.case_sensitivity, CaseSensitivity::Sensitive);
        assert_eq!(config.pair_policy, PairPolicy::Occurrence);
    }
}
