use crate::{ConsolePermissions, config::ConsentSetting};

use record_sample_core::{PermissionService, PermissionStatus};
use tokio::sync::mpsc;

/// WHAT: Without an input device access is reported as denied
/// WHY: Recording cannot work, whatever the stored consent says
#[tokio::test]
async fn given_no_input_device_when_checking_then_denied() {
    // Given: Granted consent but no microphone
    let (prompt_tx, _prompt_rx) = mpsc::channel(1);
    let permissions =
        ConsolePermissions::with_device_probe(ConsentSetting::Granted, prompt_tx, || false);

    // When: Checking the status
    let status = permissions.check_status().await;

    // Then: Denied
    assert_eq!(status, PermissionStatus::Denied);
}

/// WHAT: Stored consent answers requests without prompting
/// WHY: Users are asked at most once
#[tokio::test]
async fn given_stored_consent_when_requesting_then_no_prompt() {
    // Given: Consent granted in the config
    let (prompt_tx, mut prompt_rx) = mpsc::channel(1);
    let permissions =
        ConsolePermissions::with_device_probe(ConsentSetting::Granted, prompt_tx, || true);

    // When: Checking and requesting
    let status = permissions.check_status().await;
    let granted = permissions.request_permission().await;

    // Then: Granted, nothing prompted
    assert_eq!(status, PermissionStatus::Granted);
    assert!(granted);
    assert!(prompt_rx.try_recv().is_err());
}

/// WHAT: An undetermined request prompts and remembers the answer
/// WHY: Later checks must report what the user chose
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_undetermined_when_user_refuses_then_denied_from_then_on() {
    // Given: No consent yet and a console that refuses
    let (prompt_tx, mut prompt_rx) = mpsc::channel(1);
    let permissions =
        ConsolePermissions::with_device_probe(ConsentSetting::NotDetermined, prompt_tx, || true);
    assert_eq!(
        permissions.check_status().await,
        PermissionStatus::NotDetermined
    );
    let console = tokio::spawn(async move {
        let prompt = prompt_rx.recv().await.unwrap();
        prompt.responder.send(false).unwrap();
    });

    // When: Requesting access
    let granted = permissions.request_permission().await;
    console.await.unwrap();

    // Then: Refused, and the status now says so
    assert!(!granted);
    assert_eq!(permissions.check_status().await, PermissionStatus::Denied);
}

/// WHAT: A prompt dropped without an answer counts as a refusal
/// WHY: Shutting down mid-prompt must not hang or grant access
#[tokio::test]
async fn given_undetermined_when_prompt_dropped_then_not_granted() {
    // Given: A console that drops the prompt
    let (prompt_tx, mut prompt_rx) = mpsc::channel(1);
    let permissions =
        ConsolePermissions::with_device_probe(ConsentSetting::NotDetermined, prompt_tx, || true);
    let console = tokio::spawn(async move {
        drop(prompt_rx.recv().await);
    });

    // When: Requesting access
    let granted = permissions.request_permission().await;
    let _ = console.await;

    // Then: Not granted, still undetermined
    assert!(!granted);
    assert_eq!(
        permissions.check_status().await,
        PermissionStatus::NotDetermined
    );
}

/// WHAT: Without an input device a request is refused without prompting
/// WHY: Granting access here would make the next press fail fatally
#[tokio::test]
async fn given_no_input_device_when_requesting_then_refused_without_prompt() {
    // Given: No consent yet and no microphone
    let (prompt_tx, mut prompt_rx) = mpsc::channel(1);
    let permissions =
        ConsolePermissions::with_device_probe(ConsentSetting::NotDetermined, prompt_tx, || false);

    // When: Requesting access
    let granted = permissions.request_permission().await;

    // Then: Refused, nothing prompted
    assert!(!granted);
    assert!(prompt_rx.try_recv().is_err());
    assert_eq!(permissions.check_status().await, PermissionStatus::Denied);
}

/// WHAT: Concurrent requests share a single prompt
/// WHY: A second prompt would replace the first and drop its answer
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_concurrent_requests_when_answered_once_then_both_granted() {
    // Given: No consent yet and a console that answers one prompt
    let (prompt_tx, mut prompt_rx) = mpsc::channel(4);
    let permissions =
        ConsolePermissions::with_device_probe(ConsentSetting::NotDetermined, prompt_tx, || true);
    let console = async {
        let prompt = prompt_rx.recv().await.unwrap();
        prompt.responder.send(true).unwrap();
    };

    // When: Two requests race
    let (first, second, ()) = tokio::join!(
        permissions.request_permission(),
        permissions.request_permission(),
        console
    );

    // Then: Both granted from the one answer
    assert!(first);
    assert!(second);
    assert!(prompt_rx.try_recv().is_err());
}
