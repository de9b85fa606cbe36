//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterOutcome};
use colored::{ColoredString, Colorize};

/// Color a single letter the way the game shows it
#[must_use]
pub fn colored_letter(letter: u8, outcome: LetterOutcome) -> ColoredString {
    let text = format!(" {} ", (letter as char).to_ascii_uppercase());
    match outcome {
        LetterOutcome::Correct => text.black().on_green().bold(),
        LetterOutcome::Misplaced => text.black().on_yellow().bold(),
        LetterOutcome::Wrong => text.white().on_bright_black(),
    }
}

/// Guess letters as colored tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(letter, outcome)| colored_letter(letter, outcome).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for guess counts
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "es" }
}
