use super::*;
use crate::net::types::RunInputs;

fn detail(status: &str, finished_at: Option<&str>) -> RunDetail {
    RunDetail {
        run_id: "run-1".into(),
        status: status.into(),
        created_at: "2025-03-01T10:00:00Z".into(),
        finished_at: finished_at.map(Into::into),
        prompt: None,
        duration: None,
        inputs: RunInputs { prompt: "p".into(), ..RunInputs::default() },
        artifacts: None,
        logs_url: None,
    }
}

// =============================================================
// Phase
// =============================================================

#[test]
fn phase_moves_from_loading_to_not_found() {
    let mut s = RunDetailState::default();
    assert_eq!(s.phase(), DetailPhase::Loading);
    s.fetch_failed();
    assert_eq!(s.phase(), DetailPhase::NotFound);
}

#[test]
fn failed_refresh_keeps_last_detail() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));
    s.fetch_failed();
    assert!(matches!(s.phase(), DetailPhase::Ready(run) if run.status == "RUNNING"));
}

// =============================================================
// Finalize guard
// =============================================================

#[test]
fn running_without_finish_needs_finalize() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));
    assert!(s.needs_finalize());

    s.set_run(detail("RUNNING", Some("2025-03-01T10:01:00Z")));
    assert!(!s.needs_finalize());

    s.set_run(detail("PENDING", None));
    assert!(!s.needs_finalize());
}

#[test]
fn finalize_and_cancel_need_exact_labels() {
    let mut s = RunDetailState::default();
    for status in ["GENERATING", "running", "Pending"] {
        s.set_run(detail(status, None));
        assert!(!s.needs_finalize(), "{status}");
        assert!(!s.begin_finalize(), "{status}");
        assert!(!s.can_cancel(), "{status}");
    }
}

#[test]
fn begin_finalize_claims_slot_once() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));

    assert!(s.begin_finalize());
    assert!(!s.begin_finalize());
    assert!(!s.begin_finalize());
    assert!(s.finalizing);
}

#[test]
fn finish_finalize_releases_and_applies() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));
    assert!(s.begin_finalize());

    s.finish_finalize(Some(detail("COMPLETED", Some("2025-03-01T10:00:30Z"))));
    assert!(!s.finalizing);
    assert!(!s.needs_finalize());
    assert_eq!(s.run.as_ref().unwrap().status, "COMPLETED");
}

#[test]
fn failed_finalize_releases_slot() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));
    assert!(s.begin_finalize());

    s.finish_finalize(None);
    assert!(!s.finalizing);
    assert!(s.begin_finalize());
}

// =============================================================
// Cancel, duration, placeholders
// =============================================================

#[test]
fn cancel_offered_for_active_runs_only() {
    let mut s = RunDetailState::default();
    assert!(!s.can_cancel());

    s.set_run(detail("PENDING", None));
    assert!(s.can_cancel());

    s.set_run(detail("COMPLETED", Some("2025-03-01T10:01:00Z")));
    assert!(!s.can_cancel());
}

#[test]
fn cancel_hidden_while_finalizing() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));
    assert!(s.begin_finalize());
    assert!(!s.can_cancel());
}

#[test]
fn duration_label_uses_timestamps() {
    let mut s = RunDetailState::default();
    s.set_run(detail("RUNNING", None));
    assert_eq!(s.duration_label(), "In progress...");

    s.set_run(detail("COMPLETED", Some("2025-03-01T10:01:05Z")));
    assert_eq!(s.duration_label(), "65s");
}

#[test]
fn empty_assets_message_depends_on_status() {
    let mut s = RunDetailState::default();
    s.set_run(detail("COMPLETED", Some("2025-03-01T10:01:05Z")));
    assert_eq!(s.empty_assets_message(), "No assets generated");

    s.set_run(detail("SUCCEEDED", Some("2025-03-01T10:01:05Z")));
    assert_eq!(s.empty_assets_message(), "Assets will appear here when generation completes");

    s.set_run(detail("RUNNING", None));
    assert_eq!(s.empty_assets_message(), "Assets will appear here when generation completes");
}
