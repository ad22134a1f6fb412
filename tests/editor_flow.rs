//! Edit/create/delete workflow integration tests

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use common::{api_for, config_for, movie_json, page_json, token_with_role, within};
use movie_catalog::egui_app::{EditorMode, EditorOutcome, ListController, MovieEditor, MovieField, TokenStore};
use movie_catalog::shared::Movie;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::runtime::Handle;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn admin_tokens() -> TokenStore {
    let tokens = TokenStore::in_memory();
    tokens.set(token_with_role("admin")).expect("in-memory set");
    tokens
}

fn editor(server: &MockServer) -> MovieEditor {
    MovieEditor::new(api_for(server, admin_tokens()), Handle::current())
}

fn fill_dune(editor: &mut MovieEditor) {
    editor.set_field(MovieField::Title, "Dune");
    editor.set_field(MovieField::BannerImage, "https://img.example.com/dune.jpg");
    editor.set_field(MovieField::Description, "Spice");
    editor.set_field(MovieField::Year, "2021");
    editor.set_field(MovieField::Rating, "4.5");
    editor.set_field(MovieField::RunTime, "155");
}

fn alien() -> Movie {
    serde_json::from_value(movie_json("1", "Alien", 1979, 4.5)).expect("fixture parses")
}

#[tokio::test]
async fn test_create_then_list_shows_new_movie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/movies/add"))
        .and(body_partial_json(json!({
            "title": "Dune",
            "year": 2021,
            "rating": 4.5,
            "runTime": 155
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(movie_json("9", "Dune", 2021, 4.5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json("1", "Alien", 1979, 4.5), movie_json("9", "Dune", 2021, 4.5)],
            1,
        )))
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    editor.open_for_create();
    fill_dune(&mut editor);
    editor.submit().expect("draft is valid");
    assert!(editor.is_busy());

    let outcome = within(editor.wait()).await;
    assert_matches!(outcome, Some(EditorOutcome::Created(ref movie)) if movie.id == "9");
    assert_eq!(outcome.as_ref().map(EditorOutcome::message), Some("Movie created successfully!"));
    assert_eq!(editor.mode(), &EditorMode::Closed);
    assert!(!editor.is_busy());

    let mut list = ListController::new(api_for(&server, admin_tokens()), Handle::current(), &config_for(&server));
    list.reload();
    within(list.next_event()).await;
    assert!(list.movies().iter().any(|movie| movie.title == "Dune"));
}

#[tokio::test]
async fn test_create_failure_keeps_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/movies/add"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    editor.open_for_create();
    fill_dune(&mut editor);
    editor.submit().expect("draft is valid");

    let outcome = within(editor.wait()).await.expect("outcome");
    assert_matches!(outcome, EditorOutcome::CreateFailed(_));
    assert_eq!(outcome.message(), "Failed to create movie.");
    assert!(!outcome.needs_reload());
    assert_eq!(editor.mode(), &EditorMode::Create);
    assert_eq!(editor.draft().title, "Dune");
}

#[tokio::test]
async fn test_invalid_draft_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/movies/add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    editor.open_for_create();
    fill_dune(&mut editor);
    editor.set_field(MovieField::Rating, "9");

    let error = editor.submit().expect_err("rating out of range");
    assert_eq!(error.field(), Some("rating"));
    assert!(!editor.is_busy());
}

#[tokio::test]
async fn test_update_puts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/movies/update/1"))
        .and(header("authorization", format!("Bearer {}", token_with_role("admin")).as_str()))
        .and(body_partial_json(json!({
            "_id": "1",
            "title": "Alien",
            "description": "Alien description",
            "year": 1979,
            "rating": 3.5,
            "runTime": 120
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_json("1", "Alien", 1979, 3.5)))
        .expect(1)
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    editor.open_for_edit(&alien());
    assert_eq!(editor.mode(), &EditorMode::Edit { id: "1".to_string() });
    editor.set_field(MovieField::Rating, "3.5");
    editor.submit().expect("draft is valid");

    let outcome = within(editor.wait()).await.expect("outcome");
    assert_matches!(outcome, EditorOutcome::Updated(ref movie) if movie.rating == 3.5);
    assert!(outcome.needs_reload());
    assert!(!editor.is_open());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/movies/delete/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    assert!(!editor.confirm_delete());

    editor.request_delete("1");
    editor.cancel_delete();
    assert!(!editor.confirm_delete());

    editor.request_delete("1");
    assert_eq!(editor.pending_confirmation(), Some("1"));
    assert!(editor.confirm_delete());
    assert_eq!(editor.pending_confirmation(), None);

    let outcome = within(editor.wait()).await;
    assert_eq!(outcome, Some(EditorOutcome::Deleted("1".to_string())));
}

#[tokio::test]
async fn test_delete_of_absent_id_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/movies/delete/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    editor.request_delete("missing");
    assert!(editor.confirm_delete());

    let outcome = within(editor.wait()).await.expect("outcome");
    assert_matches!(outcome, EditorOutcome::DeleteFailed { ref id, .. } if id == "missing");
    assert_eq!(outcome.message(), "Failed to delete movie.");
}

#[tokio::test]
async fn test_failed_delete_leaves_list_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/movies/delete/1"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json("1", "Alien", 1979, 4.5), movie_json("2", "Heat", 1995, 4.2)],
            1,
        )))
        .mount(&server)
        .await;

    let mut list = ListController::new(api_for(&server, admin_tokens()), Handle::current(), &config_for(&server));
    list.reload();
    within(list.next_event()).await;
    assert_eq!(list.total_movies(), 2);

    let mut editor = editor(&server);
    editor.request_delete("1");
    editor.confirm_delete();
    let outcome = within(editor.wait()).await.expect("outcome");

    assert!(!outcome.is_success());
    assert!(!outcome.needs_reload());
    assert_eq!(list.total_movies(), 2);
    assert!(!list.is_fetching());
}

#[tokio::test]
async fn test_late_update_does_not_close_next_dialog() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/movies/update/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(movie_json("1", "Alien", 1979, 3.5))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let mut editor = editor(&server);
    editor.open_for_edit(&alien());
    editor.set_field(MovieField::Rating, "3.5");
    editor.submit().expect("draft is valid");

    // Dialog dismissed while the update is in flight, then another movie opened
    editor.close();
    let heat: Movie = serde_json::from_value(movie_json("2", "Heat", 1995, 4.2)).expect("fixture parses");
    editor.open_for_edit(&heat);
    editor.set_field(MovieField::Title, "Heat (1995)");

    let outcome = within(editor.wait()).await.expect("outcome");
    assert_matches!(outcome, EditorOutcome::Updated(_));
    assert_eq!(editor.mode(), &EditorMode::Edit { id: "2".to_string() });
    assert_eq!(editor.draft().title, "Heat (1995)");
}
