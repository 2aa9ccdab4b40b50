//! Formatting of generated source.
//! Options are resolved once per run, stripped of the Tailwind Prettier plugin,
//! and handed to either the project's own Prettier or the built-in dprint engine.

use crate::config::{parse_override, FormatterOptions, Lang};
use crate::constants::{EXCLUDED_PLUGIN, PRETTIER_CONFIG_FILES};
use crate::error::{Error, Result};
use log::{debug, warn};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Trait for code formatting engines.
pub trait Formatter {
    /// Formats source text.
    ///
    /// # Errors
    /// * `Error::FormatError` if the engine rejects the source
    fn format(&self, text: &str) -> Result<String>;
}

/// Style used when neither the configuration nor the project provides one.
pub fn default_options() -> FormatterOptions {
    let mut options = FormatterOptions::new();
    options.insert("semi".to_string(), Value::Bool(true));
    options.insert("singleQuote".to_string(), Value::Bool(true));
    options.insert("trailingComma".to_string(), Value::String("es5".to_string()));
    options
}

fn plugin_id(plugin: &Value) -> String {
    match plugin {
        Value::String(s) => s.clone(),
        Value::Object(obj) => match obj.get("name") {
            Some(Value::String(name)) => name.clone(),
            _ => plugin.to_string(),
        },
        other => other.to_string(),
    }
}

/// Removes the Tailwind plugin from `plugins` and disables plugin auto-discovery.
///
/// Every other plugin entry is kept in its original order.
pub fn sanitize_options(mut options: FormatterOptions) -> FormatterOptions {
    let drop_plugins = match options.get_mut("plugins") {
        Some(Value::Array(plugins)) => {
            plugins.retain(|plugin| {
                let keep = !plugin_id(plugin).contains(EXCLUDED_PLUGIN);
                if !keep {
                    debug!("Dropping formatter plugin {}", plugin);
                }
                keep
            });
            false
        }
        Some(Value::String(plugin)) => plugin.contains(EXCLUDED_PLUGIN),
        _ => false,
    };
    if drop_plugins {
        options.shift_remove("plugins");
    }

    options.insert("pluginSearchDirs".to_string(), Value::Bool(false));
    options
}

fn read_options_file(path: &Path) -> Option<FormatterOptions> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    let is_package_json = path.file_name().is_some_and(|name| name == "package.json");
    if is_package_json {
        let package: Value = serde_json::from_str(&content).ok()?;
        return match package.get("prettier") {
            Some(Value::Object(options)) => {
                Some(options.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            Some(other) => {
                warn!("Ignoring unsupported 'prettier' entry {} in {}", other, path.display());
                None
            }
            None => None,
        };
    }

    match parse_override(&content) {
        Ok(options) => Some(options),
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            None
        }
    }
}

/// Looks for Prettier configuration in `cwd` and its ancestors.
pub fn find_ambient_options<P: AsRef<Path>>(cwd: P) -> Option<FormatterOptions> {
    for dir in cwd.as_ref().ancestors() {
        let candidates = PRETTIER_CONFIG_FILES
            .iter()
            .map(|file| dir.join(file))
            .chain(std::iter::once(dir.join("package.json")));

        for path in candidates.filter(|path| path.is_file()) {
            if let Some(options) = read_options_file(&path) {
                debug!("Using formatter options from {}", path.display());
                return Some(options);
            }
        }
    }
    None
}

/// Resolves the options passed to the formatting engine.
///
/// Precedence: `prettierConfig` from the configuration, then ambient Prettier
/// config, then [`default_options`]. The result is always sanitized.
pub fn resolve_options<P: AsRef<Path>>(
    cwd: P,
    lang: Lang,
    configured: Option<&FormatterOptions>,
) -> FormatterOptions {
    let mut options = configured
        .cloned()
        .or_else(|| find_ambient_options(cwd))
        .unwrap_or_else(default_options);

    if matches!(options.get("parser"), None | Some(Value::Null)) {
        options.insert("parser".to_string(), Value::String(lang.default_parser().to_string()));
    }

    sanitize_options(options)
}

/// In-process formatter backed by dprint, used when the project has no Prettier installed.
///
/// The Prettier options that have a dprint counterpart are honored: `semi`,
/// `singleQuote`, `trailingComma`, `printWidth`, `tabWidth`, `useTabs` and `parser`.
pub struct DprintFormatter {
    config: dprint_plugin_typescript::configuration::Configuration,
    file_name: &'static str,
}

impl DprintFormatter {
    pub fn from_options(options: &FormatterOptions) -> Self {
        use dprint_plugin_typescript::configuration::{
            ConfigurationBuilder, QuoteStyle, SemiColons, TrailingCommas,
        };

        let flag = |key: &str, default: bool| {
            options.get(key).and_then(Value::as_bool).unwrap_or(default)
        };

        let mut builder = ConfigurationBuilder::new();
        builder
            .line_width(options.get("printWidth").and_then(Value::as_u64).unwrap_or(80) as u32)
            .indent_width(options.get("tabWidth").and_then(Value::as_u64).unwrap_or(2) as u8)
            .use_tabs(flag("useTabs", false))
            .semi_colons(if flag("semi", true) { SemiColons::Prefer } else { SemiColons::Asi })
            .quote_style(if flag("singleQuote", false) {
                QuoteStyle::PreferSingle
            } else {
                QuoteStyle::PreferDouble
            })
            .trailing_commas(match options.get("trailingComma").and_then(Value::as_str) {
                Some("none") => TrailingCommas::Never,
                _ => TrailingCommas::OnlyMultiLine,
            });

        let file_name = match options.get("parser").and_then(Value::as_str) {
            Some("babel" | "babel-flow" | "flow" | "espree" | "meriyah" | "acorn") => {
                "component.jsx"
            }
            Some("typescript" | "babel-ts") | None => "component.tsx",
            Some(other) => {
                warn!("Parser '{}' is not supported by the built-in formatter, using typescript", other);
                "component.tsx"
            }
        };

        Self { config: builder.build(), file_name }
    }
}

impl Formatter for DprintFormatter {
    fn format(&self, text: &str) -> Result<String> {
        let formatted = dprint_plugin_typescript::format_text(
            Path::new(self.file_name),
            None,
            text.to_string(),
            &self.config,
        )
        .map_err(|e| Error::FormatError(e.to_string()))?;

        // `None` means the text is already formatted.
        Ok(formatted.unwrap_or_else(|| text.to_string()))
    }
}

/// Runs the project's Prettier executable.
#[derive(Debug)]
pub struct PrettierFormatter {
    program: PathBuf,
    options: FormatterOptions,
    cwd: PathBuf,
}

impl PrettierFormatter {
    pub fn new(program: PathBuf, options: FormatterOptions, cwd: PathBuf) -> Self {
        Self { program, options, cwd }
    }
}

impl Formatter for PrettierFormatter {
    fn format(&self, text: &str) -> Result<String> {
        // Relative plugin paths in the config resolve against its directory.
        let mut config = tempfile::Builder::new()
            .prefix(".new-component-prettier")
            .suffix(".json")
            .tempfile_in(&self.cwd)?;
        serde_json::to_writer(&mut config, &self.options)
            .map_err(|e| Error::FormatError(e.to_string()))?;
        config.flush()?;

        debug!("Running {} with {}", self.program.display(), config.path().display());

        let mut child = Command::new(&self.program)
            .arg("--config")
            .arg(config.path())
            .arg("--no-editorconfig")
            .current_dir(&self.cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::FormatError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout).map_err(|e| Error::FormatError(e.to_string()))
    }
}

/// Location of a project-local Prettier install.
pub fn local_prettier<P: AsRef<Path>>(cwd: P) -> PathBuf {
    let program = if cfg!(windows) { "prettier.cmd" } else { "prettier" };
    cwd.as_ref().join("node_modules").join(".bin").join(program)
}

/// Builds the formatter for this run.
pub fn build_formatter<P: AsRef<Path>>(
    cwd: P,
    lang: Lang,
    configured: Option<&FormatterOptions>,
) -> Box<dyn Formatter> {
    let cwd = cwd.as_ref();
    let options = resolve_options(cwd, lang, configured);
    let prettier = local_prettier(cwd);

    if prettier.is_file() {
        debug!("Formatting with {}", prettier.display());
        Box::new(PrettierFormatter::new(prettier, options, cwd.to_path_buf()))
    } else {
        debug!("Prettier not found, using built-in formatter with {:?}", options);
        Box::new(DprintFormatter::from_options(&options))
    }
}
