//! Navigator implementations for terminal front ends.

use annotator_application::Navigator;
use colored::Colorize;
use tracing::info;

/// Navigator for the terminal: there is no page to replace, so the
/// redirect target is printed for the user to open.
pub struct ConsoleNavigator;

impl ConsoleNavigator {
    pub fn message(url: &str) -> String {
        format!("{} {}", "Open to continue login:".cyan().bold(), url)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, url: &str) {
        info!("Navigating to {}", url);
        println!("{}", Self::message(url));
    }
}
