//! new-component's entry point.
//! Parses arguments, resolves configuration and runs the generation once.

use clap::Parser;
use new_component::{
    cli::Args,
    config::ConfigResolver,
    error::{default_error_handler, Result},
    formatter::build_formatter,
    loader::{template_root, LocalLoader},
    processor::Processor,
    reporter::{ConsoleReporter, Reporter},
};

/// Main application entry point.
fn main() {
    let args = Args::parse();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let reporter = ConsoleReporter::new();
    if let Err(err) = run(args, &reporter) {
        default_error_handler(err, &reporter);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves configuration from defaults and override files
/// 2. Merges command line options over the configuration
/// 3. Builds the formatter and the template loader
/// 4. Materializes the component
fn run(args: Args, reporter: &dyn Reporter) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = ConfigResolver::new(dirs::home_dir(), cwd.clone()).resolve();
    let request = args.into_request(&config);

    let formatter = build_formatter(&cwd, request.lang, config.prettier_config.as_ref());
    let loader = LocalLoader::new(template_root());

    Processor::new(&loader, &*formatter, reporter).materialize(&request)
}
