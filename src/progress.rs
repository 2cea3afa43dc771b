//! Spinner status lines for pipeline steps.
//!
//! Each step shows a spinner while its commands run and ends with a success
//! or failure mark. Without a terminal the label is printed once per outcome.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stderr};
use std::io::IsTerminal;
use std::time::Duration;

/// Check if stderr is a terminal (for deciding whether to show spinners)
pub fn is_interactive() -> bool {
    std::io::stderr().is_terminal()
}

/// A running step. Clears itself when dropped unfinished.
pub struct Status {
    bar: Option<ProgressBar>,
    message: String,
}

impl Status {
    pub fn new(message: &str) -> Self {
        if !is_interactive() {
            return Self {
                bar: None,
                message: message.to_string(),
            };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("valid template")
                .tick_strings(&["✶", "✸", "✹", "✺", "✹", "✷", "✶"]),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar: Some(bar),
            message: message.to_string(),
        }
    }

    /// Finish with the start label and a success mark.
    pub fn succeed(&self) {
        let line = format!(
            "{} {}",
            "✔".if_supports_color(Stderr, |t| t.green()),
            self.message
        );
        self.finish(line);
    }

    /// Finish with `message` in red and a failure mark.
    pub fn fail(&self, message: &str) {
        let line = format!(
            "{} {}",
            "✖".if_supports_color(Stderr, |t| t.red()),
            message.if_supports_color(Stderr, |t| t.red())
        );
        self.finish(line);
    }

    fn finish(&self, line: String) {
        match self.bar {
            Some(ref bar) => {
                bar.set_style(
                    ProgressStyle::default_spinner()
                        .template("{msg}")
                        .expect("valid template"),
                );
                bar.finish_with_message(line);
            }
            None => eprintln!("{}", line),
        }
    }
}

impl Drop for Status {
    fn drop(&mut self) {
        if let Some(ref bar) = self.bar {
            if !bar.is_finished() {
                bar.finish_and_clear();
            }
        }
    }
}
