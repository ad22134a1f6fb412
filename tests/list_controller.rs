//! List controller integration tests
//!
//! Drives a real `ListController` against a mock movie API and checks which
//! requests reach the server and what ends up on screen.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use common::{api_for, config_for, movie_json, page_json, within};
use movie_catalog::egui_app::{ListController, ListOutcome, TokenStore};
use movie_catalog::shared::{SortField, SortOrder};
use pretty_assertions::assert_eq;
use tokio::runtime::Handle;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(server: &MockServer) -> ListController {
    let api = api_for(server, TokenStore::in_memory());
    ListController::new(api, Handle::current(), &config_for(server))
}

/// Handle events until no search is scheduled and no fetch is outstanding
async fn settle(list: &mut ListController) -> Vec<ListOutcome> {
    let mut outcomes = Vec::new();
    while list.is_fetching() || list.search_pending() {
        match within(list.next_event()).await {
            Some(outcome) => outcomes.push(outcome),
            None => break,
        }
    }
    outcomes
}

async fn list_requests(server: &MockServer) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == "/movies/list")
        .collect()
}

fn query_value(request: &wiremock::Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[tokio::test]
async fn test_initial_load_shows_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .and(query_param("search", ""))
        .and(query_param("order", "desc"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json("1", "Alien", 1979, 4.5), movie_json("2", "Heat", 1995, 4.2)],
            3,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut list = controller(&server);
    let seq = list.reload();
    assert!(list.is_loading());

    let outcomes = settle(&mut list).await;

    assert_eq!(outcomes, vec![ListOutcome::Loaded { seq }]);
    assert_eq!(list.movies().len(), 2);
    assert_eq!(list.movies()[0].title, "Alien");
    assert_eq!(list.total_pages(), 3);
    assert!(list.has_data());
    assert!(!list.is_loading());

    // No sort selected means no sort parameter
    let requests = list_requests(&server).await;
    assert_eq!(query_value(&requests[0], "sort"), None);
}

#[tokio::test]
async fn test_rapid_typing_sends_one_request_with_final_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json("1", "Alien", 1979, 4.5)],
            1,
        )))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    for text in ["a", "al", "ali", "alie", "alien"] {
        list.set_search(text);
        assert_eq!(list.search(), text);
        tokio::task::yield_now().await;
    }

    let outcomes = settle(&mut list).await;

    assert_matches!(outcomes.as_slice(), [ListOutcome::FetchIssued { .. }, ListOutcome::Loaded { .. }]);
    let requests = list_requests(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(query_value(&requests[0], "search").as_deref(), Some("alien"));
    assert_eq!(query_value(&requests[0], "page").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_settled_search_resets_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(Vec::new(), 5)))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    list.set_page(4);
    settle(&mut list).await;

    list.set_search("heat");
    assert_eq!(list.page(), 4);
    settle(&mut list).await;

    assert_eq!(list.page(), 1);
    let requests = list_requests(&server).await;
    let last = requests.last().expect("search request");
    assert_eq!(query_value(last, "search").as_deref(), Some("heat"));
    assert_eq!(query_value(last, "page").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_clearing_search_requests_unfiltered_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(Vec::new(), 1)))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    list.set_search("alien");
    settle(&mut list).await;
    list.set_search("");
    settle(&mut list).await;

    let requests = list_requests(&server).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(query_value(&requests[1], "search").as_deref(), Some(""));
}

#[tokio::test]
async fn test_sort_change_fetches_immediately_from_page_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(Vec::new(), 4)))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    list.toggle_order();
    list.set_page(3);
    settle(&mut list).await;
    assert_eq!(list.order(), SortOrder::Asc);
    assert_eq!(list.page(), 3);

    list.set_sort(SortField::RunTime);
    assert!(list.is_fetching());
    settle(&mut list).await;

    assert_eq!(list.page(), 1);
    assert_eq!(list.order(), SortOrder::Desc);
    let requests = list_requests(&server).await;
    let last = requests.last().expect("sort request");
    assert_eq!(query_value(last, "sort").as_deref(), Some("runTime"));
    assert_eq!(query_value(last, "order").as_deref(), Some("desc"));
    assert_eq!(query_value(last, "page").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_page_change_keeps_search_and_sort() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(Vec::new(), 4)))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    list.set_search("war");
    settle(&mut list).await;
    list.set_sort(SortField::Rating);
    settle(&mut list).await;
    list.set_page(2);
    settle(&mut list).await;

    let requests = list_requests(&server).await;
    let last = requests.last().expect("page request");
    assert_eq!(query_value(last, "search").as_deref(), Some("war"));
    assert_eq!(query_value(last, "sort").as_deref(), Some("rating"));
    assert_eq!(query_value(last, "order").as_deref(), Some("desc"));
    assert_eq!(query_value(last, "page").as_deref(), Some("2"));
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_movies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json("1", "Alien", 1979, 4.5), movie_json("2", "Heat", 1995, 4.2)],
            1,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    list.reload();
    settle(&mut list).await;

    let seq = list.reload();
    assert!(list.is_refreshing());
    assert!(!list.is_loading());
    let outcomes = settle(&mut list).await;

    assert_matches!(outcomes.as_slice(), [ListOutcome::Failed { seq: failed, .. }] if *failed == seq);
    assert_eq!(list.movies().len(), 2);
    assert!(!list.is_loading());
    assert!(list.last_error().is_some_and(|e| e.contains("500")));
}

#[tokio::test]
async fn test_late_response_to_superseded_fetch_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .and(query_param("sort", "rating"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![movie_json("r", "Slow", 2001, 5.0)], 1))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies/list"))
        .and(query_param("sort", "year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![movie_json("y", "Fast", 2020, 3.0)], 1)))
        .mount(&server)
        .await;

    let mut list = controller(&server);
    let slow = list.set_sort(SortField::Rating);
    let fast = list.set_sort(SortField::Year);

    assert_eq!(settle(&mut list).await, vec![ListOutcome::Loaded { seq: fast }]);
    assert_eq!(within(list.next_event()).await, Some(ListOutcome::Discarded { seq: slow }));

    assert_eq!(list.movies().len(), 1);
    assert_eq!(list.movies()[0].title, "Fast");
    assert_eq!(list.sort(), SortField::Year);
}
