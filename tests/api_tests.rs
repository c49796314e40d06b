//! HTTP client tests against a local mock server

use pretty_assertions::assert_eq;
use rickdex::api::{ApiError, CharacterApi, HttpCharacterApi};
use rickdex::filters::{CollectOutcome, collect_filter_options};
use rickdex::state::FilterState;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const LISTING_PATH: &str = "/api/character";

// ============================================================================
// Helper Functions
// ============================================================================

fn character(id: u32, name: &str, species: &str, status: &str, gender: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": species,
        "type": "",
        "gender": gender,
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [],
        "url": "",
        "created": "2017-11-04T18:48:46.250Z"
    })
}

fn page(results: Vec<Value>, next: Option<String>, prev: Option<String>) -> Value {
    json!({
        "info": { "count": results.len(), "pages": 2, "next": next, "prev": prev },
        "results": results
    })
}

fn listing_url(server: &MockServer) -> String {
    format!("{}{LISTING_PATH}", server.uri())
}

// ============================================================================
// Page fetch
// ============================================================================

#[tokio::test]
async fn test_fetch_page_sends_page_and_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", "2"))
        .and(query_param("species", "Human"))
        .and(query_param("status", "Alive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![character(1, "Rick Sanchez", "Human", "Alive", "Male")],
            None,
            Some(format!("{}?page=1", listing_url(&server))),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpCharacterApi::new(listing_url(&server));
    let filters = FilterState {
        species: "Human".into(),
        status: "Alive".into(),
        gender: String::new(),
    };
    let result = api.fetch_page(2, &filters).await.expect("page should load");

    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].name, "Rick Sanchez");
    assert_eq!(result.results[0].origin.name, "Earth (C-137)");
    assert!(result.info.next.is_none());
    assert!(result.info.prev.is_some());
}

#[tokio::test]
async fn test_fetch_page_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "There is nothing here" })),
        )
        .mount(&server)
        .await;

    let api = HttpCharacterApi::new(listing_url(&server));
    let error = api
        .fetch_page(1, &FilterState::default())
        .await
        .expect_err("404 should fail");

    assert!(
        matches!(error, ApiError::Status { status: 404, .. }),
        "unexpected error: {error:?}"
    );
}

#[tokio::test]
async fn test_fetch_page_bad_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = HttpCharacterApi::new(listing_url(&server));
    let error = api
        .fetch_page(1, &FilterState::default())
        .await
        .expect_err("body should not parse");

    assert!(matches!(error, ApiError::Parse(_)), "unexpected error: {error:?}");
}

// ============================================================================
// Filter option walk
// ============================================================================

#[tokio::test]
async fn test_collect_filter_options_follows_next_links() {
    let server = MockServer::start().await;
    let second = format!("{}?page=2", listing_url(&server));

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                character(3, "Summer Smith", "Human", "Alive", "Female"),
                character(4, "Abradolf Lincler", "Humanoid", "unknown", "Male"),
            ],
            None,
            Some(listing_url(&server)),
        )))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                character(1, "Rick Sanchez", "Human", "Alive", "Male"),
                character(2, "Birdperson", "Alien", "Dead", "Male"),
            ],
            Some(second),
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpCharacterApi::new(listing_url(&server));
    let collection = collect_filter_options(&api, 10).await;

    assert_eq!(collection.outcome, CollectOutcome::Complete);
    assert_eq!(collection.pages_fetched, 2);
    assert_eq!(collection.options.species, vec!["Human", "Alien", "Humanoid"]);
    assert_eq!(collection.options.status, vec!["Alive", "Dead", "unknown"]);
    assert_eq!(collection.options.gender, vec!["Male", "Female"]);
}

#[tokio::test]
async fn test_collect_filter_options_stops_at_cap() {
    let server = MockServer::start().await;
    let second = format!("{}?page=2", listing_url(&server));

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![character(1, "Rick Sanchez", "Human", "Alive", "Male")],
            Some(second),
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpCharacterApi::new(listing_url(&server));
    let collection = collect_filter_options(&api, 1).await;

    assert_eq!(collection.outcome, CollectOutcome::Truncated { max_pages: 1 });
    assert_eq!(collection.pages_fetched, 1);
    assert_eq!(collection.options.species, vec!["Human"]);
}

#[tokio::test]
async fn test_collect_filter_options_keeps_partial_on_error() {
    let server = MockServer::start().await;
    let second = format!("{}?page=2", listing_url(&server));

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![character(2, "Birdperson", "Alien", "Dead", "Male")],
            Some(second),
            None,
        )))
        .mount(&server)
        .await;

    let api = HttpCharacterApi::new(listing_url(&server));
    let collection = collect_filter_options(&api, 10).await;

    assert!(matches!(collection.outcome, CollectOutcome::Aborted { .. }));
    assert_eq!(collection.pages_fetched, 1);
    assert_eq!(collection.options.species, vec!["Alien"]);
    assert_eq!(collection.options.status, vec!["Dead"]);
}
