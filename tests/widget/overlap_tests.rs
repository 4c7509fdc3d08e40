//! Overlapping submission tests

#[path = "../common/mod.rs"]
mod common;

use common::{GatedService, wait_for_requests};
use royal_butler_core::{
    AnswerResponse, ChatWidget, OverlapPolicy, SubmitOutcome, Submission, WidgetSettings,
};
use std::sync::Arc;

fn settings(overlap: OverlapPolicy) -> WidgetSettings {
    WidgetSettings {
        welcome_message: None,
        overlap,
        ..WidgetSettings::default()
    }
}

fn texts(widget: &ChatWidget<Arc<GatedService>>) -> Vec<String> {
    widget
        .snapshot()
        .messages
        .iter()
        .map(|m| m.text().to_string())
        .collect()
}

#[tokio::test]
async fn test_allow_keeps_thinking_until_last_reply() {
    let service = Arc::new(GatedService::new());
    let release_first = service.gate("first");
    let release_second = service.gate("second");
    let widget = ChatWidget::new(service.clone(), settings(OverlapPolicy::Allow));

    let Submission::Sent(first) = widget.start_submission("first") else {
        panic!("first submission should be sent");
    };
    let Submission::Sent(second) = widget.start_submission("second") else {
        panic!("overlapping submission should be sent");
    };
    assert_eq!(widget.snapshot().in_flight, 2);

    let first = tokio::spawn(first.resolve());
    let second = tokio::spawn(second.resolve());
    wait_for_requests(&service, 2).await;

    release_second
        .send(Ok(AnswerResponse::new("second reply").with_session("s-second")))
        .expect("second exchange waiting");
    second.await.expect("second exchange");
    let state = widget.snapshot();
    assert!(state.is_awaiting_reply);
    assert_eq!(state.in_flight, 1);

    release_first
        .send(Ok(AnswerResponse::new("first reply").with_session("s-first")))
        .expect("first exchange waiting");
    first.await.expect("first exchange");
    let state = widget.snapshot();
    assert!(!state.is_awaiting_reply);
    assert_eq!(state.in_flight, 0);
    // Last reply to arrive decides the token.
    assert_eq!(state.session_token.as_deref(), Some("s-first"));

    assert_eq!(
        texts(&widget),
        vec!["first", "second", "second reply", "first reply"]
    );
}

#[tokio::test]
async fn test_reject_refuses_while_pending() {
    let service = Arc::new(GatedService::new());
    let release = service.gate("first");
    let widget = ChatWidget::new(service.clone(), settings(OverlapPolicy::Reject));

    let Submission::Sent(first) = widget.start_submission("first") else {
        panic!("first submission should be sent");
    };
    let first = tokio::spawn(first.resolve());

    widget.set_input("second", 40);
    assert_eq!(widget.submit_message("second").await, SubmitOutcome::Busy);
    let state = widget.snapshot();
    assert_eq!(state.pending_input, "second");
    assert_eq!(state.messages.len(), 1);

    release
        .send(Ok(AnswerResponse::new("done")))
        .expect("first exchange waiting");
    first.await.expect("first exchange");

    let _ = service.gate("second");
    assert!(matches!(
        widget.start_submission("second"),
        Submission::Sent(_)
    ));
    assert_eq!(texts(&widget), vec!["first", "done", "second"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_submission_releases_reject_policy() {
    let service = Arc::new(GatedService::new());
    let _held = service.gate("first");
    let widget = ChatWidget::new(service.clone(), settings(OverlapPolicy::Reject));

    let cancelled = tokio::time::timeout(
        std::time::Duration::from_millis(20),
        widget.submit_message("first"),
    )
    .await;
    assert!(cancelled.is_err());

    let state = widget.snapshot();
    assert!(!state.is_awaiting_reply);
    assert_eq!(state.in_flight, 0);
    assert_eq!(texts(&widget), vec!["first"]);

    let release = service.gate("second");
    let Submission::Sent(second) = widget.start_submission("second") else {
        panic!("submission after a cancelled one should be sent");
    };
    let second = tokio::spawn(second.resolve());
    release
        .send(Ok(AnswerResponse::new("back again")))
        .expect("second exchange waiting");
    second.await.expect("second exchange");

    assert_eq!(texts(&widget), vec!["first", "second", "back again"]);
    assert!(!widget.snapshot().is_awaiting_reply);
}

#[tokio::test]
async fn test_dropping_one_overlapping_exchange_keeps_the_other_pending() {
    let service = Arc::new(GatedService::new());
    let release = service.gate("kept");
    let widget = ChatWidget::new(service.clone(), settings(OverlapPolicy::Allow));

    let Submission::Sent(dropped) = widget.start_submission("dropped") else {
        panic!("first submission should be sent");
    };
    let Submission::Sent(kept) = widget.start_submission("kept") else {
        panic!("second submission should be sent");
    };
    drop(dropped);

    let state = widget.snapshot();
    assert!(state.is_awaiting_reply);
    assert_eq!(state.in_flight, 1);

    let kept = tokio::spawn(kept.resolve());
    release
        .send(Ok(AnswerResponse::new("reply")))
        .expect("kept exchange waiting");
    kept.await.expect("kept exchange");

    let state = widget.snapshot();
    assert!(!state.is_awaiting_reply);
    assert_eq!(state.in_flight, 0);
}
