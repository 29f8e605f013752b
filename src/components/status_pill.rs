use super::style::Style;
use crate::state::status::{status_label, status_tone};

/// `[LABEL]`, colored by the status category.
pub fn render(status: &str, style: Style) -> String {
    style.tone(&format!("[{}]", status_label(status)), status_tone(status))
}

/// Visible width of [`render`] output, ignoring color codes.
pub fn width(status: &str) -> usize {
    status_label(status).chars().count() + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pill_is_bracketed_uppercase() {
        assert_eq!(render("running", Style::plain()), "[RUNNING]");
        assert_eq!(width("running"), 9);
    }

    #[test]
    fn colored_pill_uses_tone_code() {
        assert_eq!(render("failed", Style::colored()), "\x1b[31m[FAILED]\x1b[0m");
        assert_eq!(render("Succeeded", Style::colored()), "\x1b[32m[SUCCEEDED]\x1b[0m");
        assert_eq!(render("cancelled", Style::colored()), "\x1b[33m[CANCELLED]\x1b[0m");
    }
}
