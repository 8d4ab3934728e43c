// Field parameters from a TOML file.
use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::element;
use crate::tables::{Tables, DEFAULT_GENERATOR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Generator the tables are built from. Checked against [0, 255] when used.
    #[serde(default = "default_generator")]
    pub generator: u32,
    /// Refuse a generator whose order is not 255.
    #[serde(default = "default_validate")]
    pub validate: bool,
}

fn default_generator() -> u32 {
    DEFAULT_GENERATOR as u32
}

fn default_validate() -> bool {
    true
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            validate: default_validate(),
        }
    }
}

impl FieldConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: FieldConfig = toml::from_str(s).context("malformed field config")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&s).with_context(|| format!("in {}", path.display()))?;
        debug!("loaded {:?} from {}", config, path.display());
        Ok(config)
    }

    pub fn tables(&self) -> Result<Tables> {
        let g = element(self.generator)?;
        if self.validate {
            Ok(Tables::new(g)?)
        } else {
            Ok(Tables::build(g))
        }
    }
}

#[test]
fn test_config_defaults() {
    let config = FieldConfig::from_toml("").unwrap();
    assert_eq!(config, FieldConfig::default());
    assert_eq!(config.generator, 3);
    assert!(config.validate);
    assert_eq!(config.tables().unwrap().generator(), 3);
}

#[test]
fn test_config_generator() {
    let config = FieldConfig::from_toml("generator = 5").unwrap();
    let t = config.tables().unwrap();
    assert!(t.is_complete());
    assert_eq!(t.exp()[1], 5);

    assert!(FieldConfig::from_toml("generator = \"three\"").is_err());
}

#[test]
fn test_config_rejects() {
    use crate::common::GaloisError;

    let err = FieldConfig::from_toml("generator = 300")
        .unwrap()
        .tables()
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<GaloisError>(),
        Some(&GaloisError::OutOfRange(300))
    );

    let err = FieldConfig::from_toml("generator = 2").unwrap().tables().unwrap_err();
    assert_eq!(
        err.downcast_ref::<GaloisError>(),
        Some(&GaloisError::NotPrimitive {
            generator: 2,
            order: 51
        })
    );

    // Unvalidated, the holes only show up on lookup.
    let t = FieldConfig::from_toml("generator = 2\nvalidate = false")
        .unwrap()
        .tables()
        .unwrap();
    assert_eq!(t.missing(), 204);
}

#[test]
fn test_config_load() {
    let path = std::env::temp_dir().join(format!("galois-config-{}.toml", std::process::id()));
    fs::write(&path, "generator = 3\nvalidate = true\n").unwrap();
    let config = FieldConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config, FieldConfig::default());

    let err = FieldConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}
