//! Tests to verify that the service layer emits expected tracing spans

mod common;

use accounts::contract::model::UserPatch;
use tracing_test::traced_test;
use uuid::Uuid;

use common::{counting_service, new_user};

#[traced_test]
#[tokio::test]
async fn create_user_emits_spans() {
    let (_repo, service) = counting_service();

    let created = service
        .create_user(new_user("Ana", "ana@x.cl"))
        .await
        .unwrap();

    assert!(logs_contain("accounts.service.create_user"));
    assert!(logs_contain("ana@x.cl"));
    assert!(logs_contain("Successfully created user"));
    assert!(logs_contain(&created.id.to_string()));
    // Plaintext password never reaches the logs.
    assert!(!logs_contain("AnaPass12"));
}

#[traced_test]
#[tokio::test]
async fn update_and_delete_emit_spans() {
    let (_repo, service) = counting_service();
    let created = service
        .create_user(new_user("Ana", "ana@x.cl"))
        .await
        .unwrap();

    service
        .patch_user(
            created.id,
            UserPatch {
                password: Some("Other99Pass".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    service
        .replace_user(created.id, new_user("Ana", "ana@x.cl"))
        .await
        .unwrap();
    service.delete_user(created.id).await.unwrap();

    assert!(logs_contain("accounts.service.patch_user"));
    assert!(logs_contain("accounts.service.replace_user"));
    assert!(logs_contain("accounts.service.delete_user"));
    assert!(logs_contain("Successfully deactivated user"));
    assert!(!logs_contain("Other99Pass"));
}

#[traced_test]
#[tokio::test]
async fn empty_patch_logs_skipped_write() {
    let (_repo, service) = counting_service();
    let created = service
        .create_user(new_user("Ana", "ana@x.cl"))
        .await
        .unwrap();

    service
        .patch_user(created.id, UserPatch::default())
        .await
        .unwrap();

    assert!(logs_contain("No fields supplied, skipping write"));
}

#[traced_test]
#[tokio::test]
async fn read_paths_emit_spans() {
    let (_repo, service) = counting_service();

    let missing = service.get_user(Uuid::new_v4()).await;
    assert!(missing.is_err());
    service.list_users().await.unwrap();

    assert!(logs_contain("accounts.service.get_user"));
    assert!(logs_contain("accounts.service.list_users"));
}
