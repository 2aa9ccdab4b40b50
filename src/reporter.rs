//! User-facing progress output.
//! The pipeline emits lifecycle events to a [`Reporter`]; the console
//! implementation renders them with colors.

use crate::config::Lang;
use colored::Colorize;
use rand::seq::SliceRandom;
use std::path::Path;

/// Encouragements printed after a successful run.
pub const AFFIRMATIONS: [&str; 12] = [
    "You're doing great!",
    "Keep up the excellent work!",
    "Your code is looking sharp today.",
    "Another component, another step forward.",
    "Ship it!",
    "That's a fine-looking component.",
    "Nice work, you're on a roll!",
    "Every great UI starts with a single component.",
    "You make this look easy.",
    "Clean code, happy life.",
    "Go build something wonderful.",
    "Your future self thanks you.",
];

/// Picks a random entry of [`AFFIRMATIONS`].
pub fn pick_affirmation() -> &'static str {
    AFFIRMATIONS.choose(&mut rand::thread_rng()).copied().unwrap_or(AFFIRMATIONS[0])
}

/// Summary shown before any file is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Intro<'a> {
    pub name: &'a str,
    pub dir: &'a Path,
    pub lang: Lang,
}

/// Receiver of pipeline lifecycle events.
pub trait Reporter {
    fn intro(&self, intro: &Intro<'_>);

    /// A single step finished.
    fn item_completion(&self, message: &str);

    /// The whole component was created.
    fn conclusion(&self, affirmation: &str);

    fn error(&self, message: &str);
}

/// Reporter printing to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn lang_choices(selected: Lang) -> String {
        [Lang::Js, Lang::Ts]
            .iter()
            .map(|lang| {
                if *lang == selected {
                    lang.display_name().truecolor(0, 186, 255).bold().to_string()
                } else {
                    lang.display_name().truecolor(90, 90, 90).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Reporter for ConsoleReporter {
    fn intro(&self, intro: &Intro<'_>) {
        println!();
        println!(
            "✨  Creating the {} component ✨",
            intro.name.truecolor(255, 204, 0).bold()
        );
        println!();
        println!(
            "Directory:  {}",
            intro.dir.display().to_string().truecolor(0, 186, 255).bold()
        );
        println!("Language:   {}", Self::lang_choices(intro.lang));
        println!("{}", "=========================================".truecolor(90, 90, 90));
        println!();
    }

    fn item_completion(&self, message: &str) {
        println!("{} {}", "✓".truecolor(142, 215, 0), message);
    }

    fn conclusion(&self, affirmation: &str) {
        println!();
        println!("{}", "Component created!".truecolor(142, 215, 0).bold());
        println!("{}", affirmation.truecolor(128, 128, 128));
        println!();
    }

    fn error(&self, message: &str) {
        eprintln!();
        eprintln!("{}", "Error creating component.".truecolor(216, 16, 16).bold());
        eprintln!("{}", message.truecolor(216, 16, 16));
        eprintln!();
    }
}
