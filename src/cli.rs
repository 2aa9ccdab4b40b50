//! Command-line interface implementation for new-component.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Configuration, Lang};
use crate::processor::ComponentRequest;

/// Command-line arguments structure for new-component.
#[derive(Parser, Debug)]
#[command(name = "new-component", author, version, about = "Generate a new React component from a template", long_about = None)]
pub struct Args {
    /// Name of the component to create
    #[arg(value_name = "COMPONENT_NAME")]
    pub component_name: Option<String>,

    /// Which language to use [default: from configuration, else "ts"]
    #[arg(short, long, value_enum, ignore_case = true, value_name = "LANGUAGE")]
    pub lang: Option<Lang>,

    /// Path to the "components" directory [default: from configuration, else "src/components"]
    #[arg(short, long, value_name = "PATH_TO_DIRECTORY")]
    pub dir: Option<PathBuf>,

    /// Create a folder with an index file (barrel export)
    #[arg(long)]
    pub barrel: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Fills the options not given on the command line from `config`.
    pub fn into_request(self, config: &Configuration) -> ComponentRequest {
        ComponentRequest {
            name: self.component_name.unwrap_or_default(),
            lang: self.lang.unwrap_or(config.lang),
            dir: self.dir.unwrap_or_else(|| config.dir.clone()),
            use_barrel: self.barrel,
        }
    }
}
