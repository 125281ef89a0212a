//! Integration tests for `MongoUserRepository` against a running MongoDB.
//!
//! Set `MONGODB_TEST_URI` (for example `mongodb://localhost:27017`) to run
//! them. Each test works in its own throwaway database, dropped on success.
//! Without the variable the tests print a skip marker and return; with it,
//! an unreachable server fails the test so CI breakage is not masked.

use std::future::Future;

use mongodb::bson::oid::ObjectId;
use rstest::rstest;

use users_backend::domain::ports::UserRepository;
use users_backend::domain::{UserChanges, UserDraft, UserId};
use users_backend::outbound::persistence::{MongoUserRepository, StoreClient};

const TEST_URI_VAR: &str = "MONGODB_TEST_URI";

fn draft(name: &str, email: &str) -> UserDraft {
    UserDraft {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
    }
}

/// Run `test` against a repository over a fresh database, or skip.
async fn with_repository<F, Fut>(test_name: &str, test: F)
where
    F: FnOnce(MongoUserRepository) -> Fut,
    Fut: Future<Output = ()>,
{
    let Ok(uri) = std::env::var(TEST_URI_VAR) else {
        eprintln!("SKIP-TEST-STORE: {test_name} skipped; {TEST_URI_VAR} is unset");
        return;
    };
    let database = format!("users_backend_test_{}", ObjectId::new().to_hex());
    let store = StoreClient::from_uri(&uri, &database)
        .await
        .expect("driver accepts the test uri");
    store
        .ping()
        .await
        .unwrap_or_else(|err| panic!("MongoDB at {TEST_URI_VAR} is unreachable: {err}"));

    test(MongoUserRepository::new(&store)).await;

    store.drop_database().await.expect("test database drops");
}

#[rstest]
#[tokio::test]
async fn lists_nothing_from_an_empty_collection() {
    with_repository("lists_nothing_from_an_empty_collection", |repo| async move {
        let users = repo.list_all().await.expect("list succeeds");
        assert!(users.is_empty());
    })
    .await;
}

#[rstest]
#[tokio::test]
async fn inserted_users_are_listed_with_generated_ids() {
    with_repository("inserted_users_are_listed_with_generated_ids", |repo| async move {
        let ann = repo
            .insert(&draft("Ann", "ann@example.com"))
            .await
            .expect("insert succeeds");
        let bob = repo
            .insert(&UserDraft {
                name: Some("Bob".to_owned()),
                email: None,
            })
            .await
            .expect("insert succeeds");

        assert_ne!(ann.id(), bob.id());
        let mut users = repo.list_all().await.expect("list succeeds");
        users.sort_by(|a, b| a.name().cmp(&b.name()));
        assert_eq!(users, vec![ann, bob]);
        assert!(users[1].email().is_none());
    })
    .await;
}

#[rstest]
#[tokio::test]
async fn update_sets_only_the_supplied_fields() {
    with_repository("update_sets_only_the_supplied_fields", |repo| async move {
        let created = repo
            .insert(&draft("Ann", "ann@example.com"))
            .await
            .expect("insert succeeds");
        let changes = UserChanges {
            name: Some("Ann2".to_owned()),
            email: None,
        };

        let updated = repo
            .update(created.id(), &changes)
            .await
            .expect("update succeeds")
            .expect("user exists");

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), Some("Ann2"));
        assert_eq!(updated.email(), Some("ann@example.com"));
        let stored = repo.list_all().await.expect("list succeeds");
        assert_eq!(stored, vec![updated]);
    })
    .await;
}

#[rstest]
#[tokio::test]
async fn empty_changes_return_the_current_document() {
    with_repository("empty_changes_return_the_current_document", |repo| async move {
        let created = repo
            .insert(&draft("Ann", "ann@example.com"))
            .await
            .expect("insert succeeds");

        let unchanged = repo
            .update(created.id(), &UserChanges::default())
            .await
            .expect("update succeeds");

        assert_eq!(unchanged, Some(created));
    })
    .await;
}

#[rstest]
#[tokio::test]
async fn updating_a_missing_user_yields_none() {
    with_repository("updating_a_missing_user_yields_none", |repo| async move {
        let missing = UserId::new(ObjectId::new().to_hex()).expect("valid id");
        let changes = UserChanges {
            name: Some("Nobody".to_owned()),
            email: None,
        };

        let outcome = repo.update(&missing, &changes).await.expect("update succeeds");

        assert!(outcome.is_none());
        assert!(repo.list_all().await.expect("list succeeds").is_empty());
    })
    .await;
}

#[rstest]
#[tokio::test]
async fn delete_returns_the_removed_user_once() {
    with_repository("delete_returns_the_removed_user_once", |repo| async move {
        let created = repo
            .insert(&draft("Ann", "ann@example.com"))
            .await
            .expect("insert succeeds");

        let first = repo.delete(created.id()).await.expect("delete succeeds");
        let second = repo.delete(created.id()).await.expect("delete succeeds");

        assert_eq!(first, Some(created));
        assert_eq!(second, None);
        assert!(repo.list_all().await.expect("list succeeds").is_empty());
    })
    .await;
}
