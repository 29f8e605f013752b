use super::style::Style;
use crate::state::status::StatusTone;
use crate::state::toast::{Toast, ToastKind};

pub fn render(toast: &Toast, style: Style) -> String {
    match toast.kind {
        ToastKind::Success => style.tone(&format!("[ok] {}", toast.message), StatusTone::Success),
        ToastKind::Error => style.tone(&format!("[error] {}", toast.message), StatusTone::Failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn toast_prefix_by_kind() {
        let ok = Toast::success("Run created successfully!", Duration::from_secs(5));
        let err = Toast::error("Failed to create run", Duration::from_secs(5));
        assert_eq!(render(&ok, Style::plain()), "[ok] Run created successfully!");
        assert_eq!(render(&err, Style::plain()), "[error] Failed to create run");
    }
}
