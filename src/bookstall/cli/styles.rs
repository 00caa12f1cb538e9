use bookstall::model::Theme;
use colored::{ColoredString, Colorize};

/// Theme-aware styling for the list renderer. Dark terminals get the bright
/// variants; light terminals the plain ones.
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn position(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_yellow(),
            Theme::Light => s.yellow(),
        }
    }

    pub fn title(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_white().bold(),
            Theme::Light => s.bold(),
        }
    }

    pub fn amount(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_cyan(),
            Theme::Light => s.cyan(),
        }
    }

    pub fn muted(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_black(),
            Theme::Light => s.dimmed(),
        }
    }
}
