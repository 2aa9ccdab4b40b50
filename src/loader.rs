//! Template loading for new-component.
//! Templates live next to the tool itself, never in the caller's project.
use crate::config::Lang;
use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for loading the raw template of a language.
pub trait TemplateLoader {
    /// Loads the template text for `lang`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if no template exists for `lang`
    fn load(&self, lang: Lang) -> Result<String>;
}

/// Loader reading `<root>/<lang>.js` from the filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(root: P) -> Self {
        Self { root }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self, lang: Lang) -> Result<String> {
        let path = self.root.as_ref().join(lang.template_file());
        if !path.is_file() {
            return Err(Error::TemplateNotFound { path: path.display().to_string() });
        }

        debug!("Loading template from {}", path.display());
        fs::read_to_string(&path).map_err(Error::IoError)
    }
}

/// Returns the directory holding the bundled templates.
///
/// Prefers a `templates` directory next to the executable and falls back to
/// the one shipped with the crate sources.
pub fn template_root() -> PathBuf {
    let installed = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR)));

    match installed {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR),
    }
}
