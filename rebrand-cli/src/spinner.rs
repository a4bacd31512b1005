use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Progress indicator for the setup run.
///
/// Animates on a terminal; otherwise only the final status line is
/// written to stderr. A silent spinner prints nothing at all.
pub struct Spinner {
    bar: Option<ProgressBar>,
    silent: bool,
}

impl Spinner {
    pub fn start(message: &str, silent: bool) -> Self {
        let bar = if !silent && io::stderr().is_terminal() {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
                bar.set_style(style);
            }
            bar.set_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(100));
            Some(bar)
        } else {
            None
        };
        Self { bar, silent }
    }

    pub fn succeed(self, message: &str) {
        self.finish(&format!("✓ {message}"));
    }

    pub fn fail(self, message: &str) {
        self.finish(&format!("✗ {message}"));
    }

    fn finish(self, line: &str) {
        match self.bar {
            Some(bar) => bar.finish_with_message(line.to_string()),
            None if !self.silent => eprintln!("{line}"),
            None => {},
        }
    }
}
