//! End-to-end app flow: fetch → bind → select → detail, driven through the
//! mock HTTP client.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filmreel::adapters::mock::{MockHttpClient, MockResponse};
use filmreel::app::{App, AppMessage, LoadState, Screen};
use filmreel::startup::AppConfig;
use filmreel::traits::HttpError;

const URL: &str = "https://swapi.test/api/films";
const FILMS_PAGE: &str = include_str!("fixtures/films_page.json");

fn app_with(client: &MockHttpClient) -> App {
    let config = AppConfig::default().with_films_url(URL);
    App::with_client(config, Arc::new(client.clone()))
}

/// Wait for the next background message and apply it.
async fn pump(app: &mut App) -> AppMessage {
    let rx = app.message_rx.as_mut().expect("receiver present");
    let message = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("message within timeout")
        .expect("channel open");
    app.handle_message(message.clone());
    message
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_load_binds_all_films_in_order() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    let mut app = app_with(&client);

    app.start_loading();
    assert!(app.load_state.is_loading());
    assert!(app.spinner.is_visible());

    pump(&mut app).await;

    assert_eq!(app.load_state, LoadState::Loaded);
    let titles: Vec<_> = app.presenter.films().iter().map(|f| f.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["A New Hope", "The Empire Strikes Back", "Return of the Jedi"]
    );
    assert_eq!(client.get_requests().len(), 1);
}

#[tokio::test]
async fn test_spinner_hides_exactly_once_on_result() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    client.set_delay(Duration::from_millis(50));
    let mut app = app_with(&client);

    app.start_loading();
    // Ticks while loading never hide the spinner.
    for _ in 0..5 {
        app.tick();
        assert!(app.spinner.is_visible());
    }

    pump(&mut app).await;
    assert!(!app.spinner.is_visible());
    // A second hide is not a transition.
    assert!(!app.spinner.hide());
}

#[tokio::test]
async fn test_activating_each_row_carries_that_film() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    let mut app = app_with(&client);
    app.start_loading();
    pump(&mut app).await;

    let expected: Vec<_> = app
        .presenter
        .films()
        .iter()
        .map(|f| (f.title.clone(), f.opening_crawl.clone()))
        .collect();

    for (i, (title, crawl)) in expected.iter().enumerate() {
        assert!(app.open_position(i));
        match &app.screen {
            Screen::FilmDetail(detail) => {
                assert_eq!(&detail.params().title, title);
                assert_eq!(&detail.params().opening_crawl, crawl);
            }
            other => panic!("row {} opened {:?}", i, other),
        }
        app.navigate_back();
    }
}

#[tokio::test]
async fn test_keyboard_navigation_to_detail_and_back() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    let mut app = app_with(&client);
    app.start_loading();
    pump(&mut app).await;

    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(key(KeyCode::Enter));
    match &app.screen {
        Screen::FilmDetail(detail) => assert_eq!(detail.params().title, "Return of the Jedi"),
        other => panic!("unexpected {:?}", other),
    }

    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.screen, Screen::FilmList);
    assert_eq!(app.presenter.selected(), Some(2));
}

#[tokio::test]
async fn test_empty_listing_is_loaded_with_no_rows() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok("[]"));
    let mut app = app_with(&client);
    app.start_loading();
    pump(&mut app).await;

    assert_eq!(app.load_state, LoadState::Loaded);
    assert!(app.presenter.is_empty());
    assert!(!app.open_selected());
}

#[tokio::test]
async fn test_malformed_body_fails_then_retry_recovers() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok("{ this is not json"));
    let mut app = app_with(&client);
    app.start_loading();
    pump(&mut app).await;

    assert!(app.load_state.is_failed());
    assert!(!app.spinner.is_visible());

    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    app.handle_key(key(KeyCode::Char('r')));
    assert!(app.load_state.is_loading());
    assert!(app.spinner.is_visible());
    assert_eq!(app.generation(), 2);

    pump(&mut app).await;
    assert_eq!(app.load_state, LoadState::Loaded);
    assert_eq!(app.presenter.len(), 3);
    assert_eq!(client.get_requests().len(), 2);
}

#[tokio::test]
async fn test_transport_error_message_shown() {
    let client = MockHttpClient::new();
    client.set_response(
        URL,
        MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
    );
    let mut app = app_with(&client);
    app.start_loading();
    pump(&mut app).await;

    match &app.load_state {
        LoadState::Failed { message, retryable } => {
            assert!(message.contains("Unable to reach"));
            assert!(*retryable);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_quit_before_completion_delivers_nothing() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    client.set_delay(Duration::from_millis(300));
    let mut app = app_with(&client);

    app.start_loading();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(app.has_fetch_in_flight());
    app.quit();
    assert!(!app.has_fetch_in_flight());

    let rx = app.message_rx.as_mut().unwrap();
    let received = tokio::time::timeout(Duration::from_millis(600), rx.recv()).await;
    assert!(received.is_err(), "no result may arrive after teardown");
    assert!(app.presenter.is_empty());
}

#[tokio::test]
async fn test_superseded_fetch_is_ignored() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    client.set_delay(Duration::from_millis(100));
    let mut app = app_with(&client);

    app.start_loading();
    app.start_loading();
    assert_eq!(app.generation(), 2);

    let message = pump(&mut app).await;
    assert_eq!(message.generation(), 2);
    assert_eq!(app.load_state, LoadState::Loaded);

    // A stray late result from the first generation changes nothing.
    let applied = app.handle_message(AppMessage::FilmsLoaded {
        generation: 1,
        films: Vec::new(),
    });
    assert!(!applied);
    assert_eq!(app.presenter.len(), 3);
}
