//! Catalogue configuration.
//!
//! Selects which concrete creator each pattern uses, so switching variants
//! means editing a TOML file rather than the source. Every section and field
//! has a default; an empty file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::abstract_factory::{DiagramStyle, Skin};
use crate::builder::{BuilderVariant, FormStyle};
use crate::error::{PatternError, Result};
use crate::factory_method::{BoardKind, LoggerKind};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    pub logging: LoggingConfig,
    pub simple_factory: SimpleFactoryConfig,
    pub factory_method: FactoryMethodConfig,
    pub abstract_factory: AbstractFactoryConfig,
    pub builder: BuilderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimpleFactoryConfig {
    /// Kept as a raw tag; the chart factory resolves it.
    pub chart: String,
}

impl Default for SimpleFactoryConfig {
    fn default() -> Self {
        SimpleFactoryConfig {
            chart: "pie".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryMethodConfig {
    pub logger: LoggerKind,
    pub log_path: PathBuf,
    pub board: BoardKind,
}

impl Default for FactoryMethodConfig {
    fn default() -> Self {
        FactoryMethodConfig {
            logger: LoggerKind::default(),
            log_path: PathBuf::from("catalogue.log"),
            board: BoardKind::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbstractFactoryConfig {
    pub skin: Skin,
    pub diagram: DiagramStyle,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    pub variant: BuilderVariant,
    pub form: FormStyle,
}

impl CatalogueConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading catalogue config");
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CatalogueConfig::from_toml("").unwrap();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.simple_factory.chart, "pie");
        assert_eq!(config.factory_method.logger, LoggerKind::File);
        assert_eq!(config.factory_method.log_path, PathBuf::from("catalogue.log"));
        assert_eq!(config.factory_method.board, BoardKind::Checkers);
        assert_eq!(config.abstract_factory.skin, Skin::Spring);
        assert_eq!(config.abstract_factory.diagram, DiagramStyle::Text);
        assert_eq!(config.builder.variant, BuilderVariant::A);
        assert_eq!(config.builder.form, FormStyle::Html);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            [logging]
            filter = "debug"

            [simple_factory]
            chart = "line"

            [factory_method]
            logger = "database"
            log_path = "/tmp/other.log"
            board = "chess"

            [abstract_factory]
            skin = "summer"
            diagram = "svg"

            [builder]
            variant = "b"
            form = "tk"
        "#;
        let config = CatalogueConfig::from_toml(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.simple_factory.chart, "line");
        assert_eq!(config.factory_method.logger, LoggerKind::Database);
        assert_eq!(config.factory_method.board, BoardKind::Chess);
        assert_eq!(config.abstract_factory.skin, Skin::Summer);
        assert_eq!(config.abstract_factory.diagram, DiagramStyle::Svg);
        assert_eq!(config.builder.variant, BuilderVariant::B);
        assert_eq!(config.builder.form, FormStyle::Tk);
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = CatalogueConfig::from_toml(include_str!("../config/catalogue.toml")).unwrap();
        assert_eq!(config.simple_factory.chart, "pie");
        assert_eq!(config.builder.form, FormStyle::Html);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = CatalogueConfig::from_toml("[factory_method]\nboard = \"chess\"\n").unwrap();
        assert_eq!(config.factory_method.board, BoardKind::Chess);
        assert_eq!(config.factory_method.logger, LoggerKind::File);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = CatalogueConfig::from_toml("[abstract_factory]\nskin = \"autumn\"\n").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
        assert!(err.to_string().contains("autumn"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = CatalogueConfig::from_toml("[builder]\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[simple_factory]\nchart = \"histogram\"").unwrap();
        let config = CatalogueConfig::load(file.path()).unwrap();
        assert_eq!(config.simple_factory.chart, "histogram");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CatalogueConfig::load(Path::new("/nonexistent/catalogue.toml")).unwrap_err();
        assert!(matches!(err, PatternError::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/catalogue.toml"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = CatalogueConfig::load_or_default(None).unwrap();
        assert_eq!(config.simple_factory.chart, "pie");
    }
}
