use std::sync::Arc;

use async_trait::async_trait;
use rosary_core::model::{Intention, IntentionId, Section, UserId};
use storage::local_store::{LocalStore, USER_KEY};
use storage::repository::{IntentionRepository, NewIntentionRecord, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_intentions};

struct FailingIntentions;

#[async_trait]
impl IntentionRepository for FailingIntentions {
    async fn insert_intention(
        &self,
        _intention: NewIntentionRecord,
    ) -> Result<Intention, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn list_intentions(&self, _user_id: UserId) -> Result<Vec<Intention>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn delete_intention(
        &self,
        _id: IntentionId,
        _user_id: UserId,
    ) -> Result<bool, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn rosary_view_smoke_starts_at_initium() {
    let mut harness = setup_view_harness(ViewKind::Rosary);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Rosarium Virginis Mariae"), "missing header in {html}");
    assert!(html.contains("Offertorium Rosarii"), "missing offertory in {html}");
    assert!(html.contains("Previous Section"), "missing previous label in {html}");
    assert!(html.contains("Next Section"), "missing next label in {html}");
    assert!(html.contains("Navigatio Sacra"), "missing sidebar in {html}");
    // one entry is always the mystery of the day
    assert!(html.contains("Mystery of the day"), "missing badge in {html}");
    assert!(html.contains("Sign in"), "missing sign in button in {html}");
    assert!(!html.contains("Intentiones"), "unexpected intentions card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rosary_view_smoke_hides_empty_intentions() {
    let mut harness = setup_view_harness(ViewKind::Rosary);
    let user = harness
        .services
        .auth()
        .register("clara", "ave")
        .await
        .expect("register");
    harness.services.session().remember(&user).expect("remember");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Welcome, clara"), "missing welcome in {html}");
    assert!(html.contains("Offertorium Rosarii"), "missing offertory in {html}");
    assert!(!html.contains("Intentiones"), "unexpected intentions card in {html}");
    assert!(!html.contains("No personal intentions"), "unexpected placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rosary_view_smoke_renders_mystery_position() {
    let mut harness = setup_view_harness(ViewKind::Rosary);
    let progress = harness.services.progress();
    progress.select(Section::Gaudiosa);
    progress.jump_to(Section::Gaudiosa, 2).expect("jump");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("3 of 5"), "missing position in {html}");
    assert!(html.contains("Nativitas"), "missing mystery title in {html}");
    assert!(!html.contains("Next Section"), "unexpected section label in {html}");
    assert!(!html.contains("Previous Section"), "unexpected section label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rosary_view_smoke_lists_remembered_users_intentions() {
    let mut harness = setup_view_harness(ViewKind::Rosary);
    let user = harness
        .services
        .auth()
        .register("maria", "ave")
        .await
        .expect("register");
    harness
        .services
        .intentions()
        .add(user.id, "For the sick")
        .await
        .expect("add intention");
    harness.services.session().remember(&user).expect("remember");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Welcome, maria"), "missing welcome in {html}");
    assert!(html.contains("Intentiones"), "missing intentions card in {html}");
    assert!(html.contains("For the sick"), "missing intention in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rosary_view_smoke_shows_intentions_error() {
    let mut harness =
        setup_view_harness_with_intentions(ViewKind::Rosary, Arc::new(FailingIntentions));
    let user = harness
        .services
        .auth()
        .register("jose", "ave")
        .await
        .expect("register");
    harness.services.session().remember(&user).expect("remember");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn rosary_view_smoke_ignores_corrupt_remembered_user() {
    let mut harness = setup_view_harness(ViewKind::Rosary);
    harness
        .local
        .set_item(USER_KEY, "{not json")
        .expect("seed blob");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing sign in button in {html}");
    assert_eq!(
        harness.local.get_item(USER_KEY).expect("read"),
        None
    );
}

#[tokio::test(flavor = "current_thread")]
async fn login_dialog_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing title in {html}");
    assert!(html.contains("Username"), "missing username field in {html}");
    assert!(html.contains("Need an account? Register"), "missing toggle in {html}");
    assert!(!html.contains("Confirm password"), "unexpected confirm in {html}");
}
