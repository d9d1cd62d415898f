//! Service-level tests for note lifecycle, authorization, and the deletion
//! cascade.

use notehub_core::{NoteId, UserId};
use notehub_store::{NoteService, StoreError};

async fn service_with_two_users() -> (NoteService, UserId, UserId) {
    let service = NoteService::new();
    let owner = service.create_user("owner@example.com", "h1").await.unwrap().id;
    let reader = service.create_user("reader@example.com", "h2").await.unwrap().id;
    (service, owner, reader)
}

#[tokio::test]
async fn create_note_requires_existing_user() {
    let service = NoteService::new();
    let err = service
        .create_note(UserId(1), "hello", &[])
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::UserNotFound(UserId(1)));
}

#[tokio::test]
async fn owner_reads_own_note_stranger_is_forbidden() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service
        .create_note(owner, "secret plans", &["plans".to_string()])
        .await
        .unwrap();

    let fetched = service.get_note(owner, note.id).await.unwrap();
    assert_eq!(fetched, note);

    let err = service.get_note(reader, note.id).await.unwrap_err();
    assert!(matches!(err, StoreError::Forbidden { .. }));
}

#[tokio::test]
async fn missing_note_reports_not_found_before_authorization() {
    let (service, _owner, reader) = service_with_two_users().await;
    let err = service.get_note(reader, NoteId(42)).await.unwrap_err();
    assert_eq!(err, StoreError::NoteNotFound(NoteId(42)));
}

#[tokio::test]
async fn share_makes_note_readable_with_identical_content() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service
        .create_note(owner, "shared wisdom", &["wisdom".to_string()])
        .await
        .unwrap();

    service.share_note(owner, reader, note.id).await.unwrap();

    let fetched = service.get_note(reader, note.id).await.unwrap();
    assert_eq!(fetched.content, "shared wisdom");
    assert_eq!(fetched.keywords, note.keywords);
}

#[tokio::test]
async fn self_share_is_invalid() {
    let (service, owner, _reader) = service_with_two_users().await;
    let note = service.create_note(owner, "mine", &[]).await.unwrap();

    let err = service.share_note(owner, owner, note.id).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidOperation(_)));
}

#[tokio::test]
async fn share_requires_existing_recipient_and_ownership() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service.create_note(owner, "mine", &[]).await.unwrap();

    let err = service
        .share_note(owner, UserId(99), note.id)
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::UserNotFound(UserId(99)));

    // A non-owner cannot hand out grants, even to a real user.
    let err = service.share_note(reader, owner, note.id).await.unwrap_err();
    assert!(matches!(err, StoreError::Forbidden { .. }));
}

#[tokio::test]
async fn resharing_is_idempotent() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service.create_note(owner, "mine", &[]).await.unwrap();

    service.share_note(owner, reader, note.id).await.unwrap();
    service.share_note(owner, reader, note.id).await.unwrap();

    assert!(service.get_note(reader, note.id).await.is_ok());
}

#[tokio::test]
async fn update_changes_content_only() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service
        .create_note(owner, "draft", &["rust".to_string(), "notes".to_string()])
        .await
        .unwrap();

    let updated = service.update_note(owner, note.id, "final").await.unwrap();
    assert_eq!(updated.content, "final");
    assert_eq!(updated.keywords, note.keywords);

    // Keywords were untouched, so the note is still searchable as before.
    let hits = service.search_notes("rust", owner).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "final");

    // Ownership did not move: the other user still cannot touch it.
    let err = service
        .update_note(reader, note.id, "hijack")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Forbidden { .. }));
}

#[tokio::test]
async fn update_unknown_note_reports_not_found() {
    let (service, owner, _reader) = service_with_two_users().await;
    let err = service
        .update_note(owner, NoteId(7), "x")
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::NoteNotFound(NoteId(7)));
}

#[tokio::test]
async fn delete_cascades_index_and_grants() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service
        .create_note(owner, "ephemeral", &["ephemeral".to_string()])
        .await
        .unwrap();
    service.share_note(owner, reader, note.id).await.unwrap();

    let deleted = service.delete_note(owner, note.id).await.unwrap();
    assert_eq!(deleted.id, note.id);

    // Gone via direct fetch.
    let err = service.get_note(owner, note.id).await.unwrap_err();
    assert_eq!(err, StoreError::NoteNotFound(note.id));

    // Gone via search.
    assert!(service.search_notes("ephemeral", owner).await.is_empty());

    // The old grant authorizes nothing, and a new note never inherits it.
    let fresh = service
        .create_note(owner, "fresh", &["ephemeral".to_string()])
        .await
        .unwrap();
    assert_ne!(fresh.id, note.id);
    let err = service.get_note(reader, fresh.id).await.unwrap_err();
    assert!(matches!(err, StoreError::Forbidden { .. }));
}

#[tokio::test]
async fn delete_is_owner_only() {
    let (service, owner, reader) = service_with_two_users().await;
    let note = service.create_note(owner, "keep out", &[]).await.unwrap();

    let err = service.delete_note(reader, note.id).await.unwrap_err();
    assert!(matches!(err, StoreError::Forbidden { .. }));
    assert!(service.get_note(owner, note.id).await.is_ok());
}

#[tokio::test]
async fn listing_is_owner_scoped() {
    let (service, owner, reader) = service_with_two_users().await;
    let first = service.create_note(owner, "one", &[]).await.unwrap();
    let second = service.create_note(owner, "two", &[]).await.unwrap();
    service.share_note(owner, reader, first.id).await.unwrap();

    let owned = service.list_notes(owner).await.unwrap();
    assert_eq!(
        owned.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    // Shared notes never appear in the recipient's listing.
    assert!(service.list_notes(reader).await.unwrap().is_empty());

    let err = service.list_notes(UserId(99)).await.unwrap_err();
    assert_eq!(err, StoreError::UserNotFound(UserId(99)));
}

#[tokio::test]
async fn duplicate_signup_email_propagates_already_exists() {
    let service = NoteService::new();
    service.create_user("dup@example.com", "h").await.unwrap();
    let err = service
        .create_user("Dup@Example.com", "h")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(_)));
}
