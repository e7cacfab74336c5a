//! Unit tests for mock token repository

use uuid::Uuid;

use crate::domain::entities::token::{TokenClass, TokenRecord};
use crate::repositories::token::{MockTokenRepository, TokenRepository};

fn record(token: &str, user_id: Uuid) -> TokenRecord {
    TokenRecord::new(token.to_string(), TokenClass::Access, user_id)
}

#[tokio::test]
async fn test_save_and_find_by_token() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    let saved = repo.save(record("a.b.c", user_id)).await.unwrap();
    let found = repo.find_by_token("a.b.c").await.unwrap().unwrap();

    assert_eq!(found, saved);
    assert!(found.is_active());
    assert!(repo.find_by_token("x.y.z").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_token_rejected() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save(record("a.b.c", user_id)).await.unwrap();
    assert!(repo.save(record("a.b.c", user_id)).await.is_err());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_revoke_and_expire_remove_from_active_set() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save(record("t1", user_id)).await.unwrap();
    repo.save(record("t2", user_id)).await.unwrap();
    repo.save(record("t3", user_id)).await.unwrap();

    assert!(repo.revoke("t1").await.unwrap());
    assert!(repo.expire("t2").await.unwrap());
    assert!(!repo.revoke("missing").await.unwrap());

    let active = repo.find_active_by_user(user_id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].token, "t3");

    let revoked = repo.find_by_token("t1").await.unwrap().unwrap();
    assert!(revoked.is_revoked());
    assert!(!revoked.is_expired());
}

#[tokio::test]
async fn test_revoke_all_for_user_only_touches_that_user() {
    let repo = MockTokenRepository::new();
    let ann = Uuid::new_v4();
    let bob = Uuid::new_v4();

    repo.save(record("ann-1", ann)).await.unwrap();
    repo.save(record("ann-2", ann)).await.unwrap();
    repo.save(record("bob-1", bob)).await.unwrap();
    repo.expire("ann-2").await.unwrap();

    assert_eq!(repo.revoke_all_for_user(ann).await.unwrap(), 1);
    assert!(repo.find_active_by_user(ann).await.unwrap().is_empty());
    assert_eq!(repo.find_active_by_user(bob).await.unwrap().len(), 1);

    // Flags stay set on a second pass
    assert_eq!(repo.revoke_all_for_user(ann).await.unwrap(), 0);
    let ann_2 = repo.find_by_token("ann-2").await.unwrap().unwrap();
    assert!(ann_2.is_expired());
    assert!(!ann_2.is_revoked());
}
