//! Configuration handling for new-component.
//! The effective configuration is built from three layers: built-in defaults,
//! the user's `~/.new-component-config.json` and the project's
//! `./.new-component-config.json`. Later layers win key by key.

use crate::constants::{CONFIG_FILE, DEFAULT_DIR};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One configuration layer: the top-level keys of an override file.
pub type ConfigMap = IndexMap<String, serde_json::Value>;

/// Prettier options, kept as an ordered JSON object.
pub type FormatterOptions = IndexMap<String, serde_json::Value>;

/// Language of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Lang {
    Js,
    #[default]
    Ts,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Js => "js",
            Lang::Ts => "ts",
        }
    }

    /// Human readable name shown in the intro banner.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::Js => "JavaScript",
            Lang::Ts => "TypeScript",
        }
    }

    /// File name of the bundled template for this language.
    pub fn template_file(&self) -> String {
        format!("{}.js", self.as_str())
    }

    /// Prettier parser used when the resolved options do not name one.
    pub fn default_parser(&self) -> &'static str {
        match self {
            Lang::Js => "babel",
            Lang::Ts => "typescript",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" => Ok(Lang::Js),
            "ts" => Ok(Lang::Ts),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fully populated configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub lang: Lang,
    pub dir: PathBuf,
    /// Prettier options given under `prettierConfig` in an override file
    pub prettier_config: Option<FormatterOptions>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self { lang: Lang::default(), dir: PathBuf::from(DEFAULT_DIR), prettier_config: None }
    }
}

impl Configuration {
    /// Builds the typed configuration from a merged layer.
    ///
    /// Values of the wrong shape fall back to the built-in default so the
    /// result is always complete.
    pub fn from_map(map: &ConfigMap) -> Self {
        let defaults = Self::default();

        let lang = match map.get("lang") {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|_| {
                warn!("Ignoring invalid 'lang' value {} in configuration.", value);
                defaults.lang
            }),
            None => defaults.lang,
        };

        let dir = match map.get("dir") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => PathBuf::from(s),
            Some(value) => {
                warn!("Ignoring invalid 'dir' value {} in configuration.", value);
                defaults.dir
            }
            None => defaults.dir,
        };

        let prettier_config = match map.get("prettierConfig") {
            Some(serde_json::Value::Object(options)) => {
                Some(options.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            Some(serde_json::Value::Null) | None => None,
            Some(value) => {
                warn!("Ignoring invalid 'prettierConfig' value {} in configuration.", value);
                None
            }
        };

        Self { lang, dir, prettier_config }
    }
}

/// Built-in defaults as a configuration layer.
pub fn default_layer() -> ConfigMap {
    let mut map = ConfigMap::new();
    map.insert("lang".to_string(), serde_json::json!(Lang::default().as_str()));
    map.insert("dir".to_string(), serde_json::json!(DEFAULT_DIR));
    map
}

/// Parses the content of an override file.
///
/// JSON is tried first, YAML second. The top-level value must be a mapping.
pub fn parse_override(content: &str) -> Result<ConfigMap> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigParseError(format!("invalid configuration format: {e}")))?,
    };

    match value {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(Error::ConfigParseError("top-level value is not a mapping".to_string())),
    }
}

/// Reads an optional override file.
///
/// A missing, unreadable or malformed file yields an empty layer.
pub fn read_override<P: AsRef<Path>>(path: P) -> ConfigMap {
    let path = path.as_ref();
    if !path.is_file() {
        debug!("No override file at {}", path.display());
        return ConfigMap::new();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(Error::IoError)
        .and_then(|content| parse_override(&content));

    match parsed {
        Ok(map) => {
            debug!("Loaded overrides from {}", path.display());
            map
        }
        Err(e) => {
            debug!("Ignoring override file {}: {}", path.display(), e);
            ConfigMap::new()
        }
    }
}

/// Shallow merge: every key of a later layer replaces the same key of an earlier one.
pub fn merge_layers<I>(layers: I) -> ConfigMap
where
    I: IntoIterator<Item = ConfigMap>,
{
    let mut merged = ConfigMap::new();
    for layer in layers {
        merged.extend(layer);
    }
    merged
}

/// Resolves the effective configuration from the well-known override locations.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    home: Option<PathBuf>,
    cwd: PathBuf,
}

impl ConfigResolver {
    pub fn new(home: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self { home, cwd }
    }

    /// Layers in increasing order of precedence.
    pub fn layers(&self) -> Vec<ConfigMap> {
        let user = match &self.home {
            Some(home) => read_override(home.join(CONFIG_FILE)),
            None => ConfigMap::new(),
        };
        let project = read_override(self.cwd.join(CONFIG_FILE));

        vec![default_layer(), user, project]
    }

    pub fn resolve(&self) -> Configuration {
        let config = Configuration::from_map(&merge_layers(self.layers()));
        debug!("Resolved configuration: {:?}", config);
        config
    }
}
