//! Error type shared by every pattern module.
//!
//! Creation failures (an unknown tag, a prototype of the wrong type) and
//! configuration failures both surface as a `PatternError`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    /// A creation tag or name did not match any known variant.
    #[error("unknown {kind} '{tag}' (expected one of: {})", .expected.join(", "))]
    UnknownVariant {
        kind: &'static str,
        tag: String,
        expected: Vec<String>,
    },

    /// A registered prototype is not of the type the caller asked for.
    #[error("prototype '{name}' is not a {expected}")]
    PrototypeType { name: String, expected: &'static str },

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn unknown_variant<I, S>(kind: &'static str, tag: impl Into<String>, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownVariant {
            kind,
            tag: tag.into(),
            expected: expected.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message_lists_expected() {
        let err = PatternError::unknown_variant("chart", "radar", ["histogram", "pie"]);
        assert!(err.is_unknown_variant());
        assert_eq!(
            err.to_string(),
            "unknown chart 'radar' (expected one of: histogram, pie)"
        );
    }

    #[test]
    fn test_config_read_keeps_source() {
        let err = PatternError::ConfigRead {
            path: PathBuf::from("missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.toml"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_unknown_variant());
    }

    #[test]
    fn test_prototype_type_message() {
        let err = PatternError::PrototypeType {
            name: "origin".to_string(),
            expected: "Label",
        };
        assert_eq!(err.to_string(), "prototype 'origin' is not a Label");
    }
}
