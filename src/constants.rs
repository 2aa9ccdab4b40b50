//! Common constants used throughout new-component.

/// Name of the optional override file looked up in `$HOME` and the working directory
pub const CONFIG_FILE: &str = ".new-component-config.json";

/// Literal token replaced by the component name in every template
pub const PLACEHOLDER: &str = "COMPONENT_NAME";

/// Base directory used when no override file provides `dir`
pub const DEFAULT_DIR: &str = "src/components";

/// Extension of the generated component file, shared by both languages
pub const FILE_EXTENSION: &str = "tsx";

/// Extension of the generated barrel file
pub const INDEX_EXTENSION: &str = "ts";

/// Name of the directory holding the bundled templates
pub const TEMPLATES_DIR: &str = "templates";

/// Prettier plugin that must never be loaded for generated files
pub const EXCLUDED_PLUGIN: &str = "prettier-plugin-tailwindcss";

/// Ambient Prettier config files, in lookup order
pub const PRETTIER_CONFIG_FILES: [&str; 4] =
    [".prettierrc", ".prettierrc.json", ".prettierrc.yaml", ".prettierrc.yml"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}
