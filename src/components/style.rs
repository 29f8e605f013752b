//! ANSI styling, switched off for pipes and `--no-color`.

use crate::state::status::StatusTone;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn tone(self, text: &str, tone: StatusTone) -> String {
        let code = match tone {
            StatusTone::Neutral => "37",
            StatusTone::Active => "34",
            StatusTone::Success => "32",
            StatusTone::Failure => "31",
            StatusTone::Warning => "33",
        };
        self.wrap(text, code)
    }

    pub fn bold(self, text: &str) -> String {
        self.wrap(text, "1")
    }

    pub fn dim(self, text: &str) -> String {
        self.wrap(text, "2")
    }

    fn wrap(self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }
}
