use super::*;

#[tokio::test(start_paused = true)]
async fn toast_expires_after_ttl() {
    let mut slot = ToastSlot::default();
    slot.show(Toast::success("Run created successfully!", Duration::from_secs(5)));

    tokio::time::advance(Duration::from_millis(4_999)).await;
    assert_eq!(slot.current().map(|t| t.kind), Some(ToastKind::Success));

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(slot.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn new_toast_replaces_old() {
    let mut slot = ToastSlot::default();
    slot.show(Toast::success("first", Duration::from_secs(5)));
    slot.show(Toast::error("Failed to create run", Duration::from_secs(5)));

    let toast = slot.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Failed to create run");
}

#[test]
fn dismiss_clears_slot() {
    let mut slot = ToastSlot::default();
    slot.show(Toast::error("nope", Duration::from_secs(60)));
    slot.dismiss();
    assert!(slot.current().is_none());
}
