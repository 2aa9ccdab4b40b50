//! Component materialization.
//! Turns a [`ComponentRequest`] into files on disk: plan the paths, refuse to
//! overwrite anything, then write the formatted component and optional barrel.

use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    config::Lang,
    constants::{FILE_EXTENSION, INDEX_EXTENSION, PLACEHOLDER},
    error::{Error, Result},
    formatter::Formatter,
    ioutils::{create_dir, ensure_dir, entry_exists, write_file},
    loader::TemplateLoader,
    reporter::{pick_affirmation, Intro, Reporter},
};

/// Inputs for one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRequest {
    pub name: String,
    pub lang: Lang,
    /// Base output directory
    pub dir: PathBuf,
    /// Create `<dir>/<name>/` with an `index` barrel instead of a flat file
    pub use_barrel: bool,
}

/// Paths derived from a request.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPlan {
    pub base_dir: PathBuf,
    pub target_dir: PathBuf,
    pub component_path: PathBuf,
    pub index_path: Option<PathBuf>,
}

impl OutputPlan {
    pub fn new(request: &ComponentRequest) -> Self {
        let base_dir = request.dir.clone();
        let target_dir =
            if request.use_barrel { base_dir.join(&request.name) } else { base_dir.clone() };
        let component_path = target_dir.join(format!("{}.{}", request.name, FILE_EXTENSION));
        let index_path = request
            .use_barrel
            .then(|| target_dir.join(format!("index.{}", INDEX_EXTENSION)));

        Self { base_dir, target_dir, component_path, index_path }
    }

    pub fn is_barrel(&self) -> bool {
        self.index_path.is_some()
    }

    /// Path that must not exist before generation starts.
    pub fn collision_path(&self) -> &Path {
        if self.is_barrel() {
            &self.target_dir
        } else {
            &self.component_path
        }
    }
}

/// Replaces every occurrence of the placeholder token with `name`.
pub fn substitute_placeholder(template: &str, name: &str) -> String {
    template.replace(PLACEHOLDER, name)
}

/// Barrel content re-exporting the component module.
pub fn index_content(name: &str) -> String {
    format!("export * from './{name}';\nexport {{ default }} from './{name}';\n")
}

/// Fails when the plan would overwrite an existing entry.
pub fn check_collision(plan: &OutputPlan) -> Result<()> {
    let path = plan.collision_path();
    if entry_exists(path) {
        let kind = if plan.is_barrel() { "directory" } else { "file" };
        return Err(Error::ComponentExists {
            kind: kind.to_string(),
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Runs the generation steps against a loader, a formatter and a reporter.
pub struct Processor<'a> {
    loader: &'a dyn TemplateLoader,
    formatter: &'a dyn Formatter,
    reporter: &'a dyn Reporter,
}

impl<'a> Processor<'a> {
    pub fn new(
        loader: &'a dyn TemplateLoader,
        formatter: &'a dyn Formatter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self { loader, formatter, reporter }
    }

    /// Generates the component described by `request`.
    ///
    /// # Errors
    /// * `Error::MissingComponentName` before touching the filesystem
    /// * `Error::ComponentExists` if the target is already taken
    /// * `Error::TemplateNotFound`, `Error::FormatError` or `Error::IoError`
    ///   from the later steps; steps already completed are not rolled back
    pub fn materialize(&self, request: &ComponentRequest) -> Result<()> {
        if request.name.trim().is_empty() {
            return Err(Error::MissingComponentName);
        }

        let plan = OutputPlan::new(request);
        debug!("Output plan: {:?}", plan);

        self.reporter.intro(&Intro {
            name: &request.name,
            dir: &plan.target_dir,
            lang: request.lang,
        });

        if ensure_dir(&plan.base_dir)? {
            debug!("Created base directory {}", plan.base_dir.display());
        }

        check_collision(&plan)?;

        if plan.is_barrel() {
            create_dir(&plan.target_dir)?;
            self.reporter.item_completion("Directory created.");
        }

        let template = self.loader.load(request.lang)?;
        let component = self.formatter.format(&substitute_placeholder(&template, &request.name))?;
        write_file(&component, &plan.component_path)?;
        self.reporter.item_completion(&format!(
            "Component built and saved to {}.",
            plan.component_path.display()
        ));

        if let Some(index_path) = &plan.index_path {
            let index = self.formatter.format(&index_content(&request.name))?;
            write_file(&index, index_path)?;
            self.reporter
                .item_completion(&format!("Index file built and saved to {}.", index_path.display()));
        }

        self.reporter.conclusion(pick_affirmation());
        Ok(())
    }
}
