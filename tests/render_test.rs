//! Rendering tests with ratatui's TestBackend, plus a full run of the event
//! loop fed by a scripted key stream.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use filmreel::adapters::mock::{MockHttpClient, MockResponse};
use filmreel::app::{App, AppMessage, Screen};
use filmreel::error::{FetchError, NetworkError};
use filmreel::event_loop::run_app;
use filmreel::models::{parse_films, Film};
use filmreel::startup::AppConfig;
use filmreel::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const URL: &str = "https://swapi.test/api/films";
const FILMS_PAGE: &str = include_str!("fixtures/films_page.json");

fn app() -> App {
    App::with_client(
        AppConfig::default().with_films_url(URL),
        Arc::new(MockHttpClient::new()),
    )
}

fn fixture_films() -> Vec<Film> {
    parse_films(FILMS_PAGE.as_bytes()).unwrap()
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    buffer_text(&terminal)
}

#[test]
fn test_render_loading() {
    let mut app = app();
    let screen = draw(&mut app, 60, 12);
    assert!(screen.contains("Loading films..."));
}

#[test]
fn test_render_loaded_rows() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: fixture_films(),
    });

    let screen = draw(&mut app, 60, 14);
    assert!(!screen.contains("Loading films..."));
    assert!(screen.contains("A New Hope"));
    assert!(screen.contains("George Lucas · 1977"));
    assert!(screen.contains("The Empire Strikes Back"));
    assert!(screen.contains("Irvin Kershner · 1980"));
    assert!(screen.contains("Return of the Jedi"));
    assert!(screen.contains("Richard Marquand · 1983"));
}

#[test]
fn test_render_updates_viewport_rows() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: fixture_films(),
    });
    // 20 rows: header + hints leave 18, borders leave 16, two lines per film.
    draw(&mut app, 60, 20);
    assert_eq!(app.list_viewport_rows, 8);
}

#[test]
fn test_render_empty() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: Vec::new(),
    });

    let screen = draw(&mut app, 60, 10);
    assert!(screen.contains("No films found."));
    assert!(!screen.contains("Loading films..."));
}

#[test]
fn test_render_failure_with_retry_hint() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsFailed {
        generation: 0,
        error: FetchError::Network(NetworkError::HttpStatus {
            status: 503,
            message: String::new(),
        }),
    });

    let screen = draw(&mut app, 70, 10);
    assert!(screen.contains("HTTP 503"));
    assert!(screen.contains("Press r to retry."));
    assert!(!screen.contains("Loading films..."));
}

#[test]
fn test_render_detail() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: fixture_films(),
    });
    assert!(app.open_position(0));

    let screen = draw(&mut app, 60, 16);
    assert!(screen.contains("A New Hope"));
    assert!(screen.contains("It is a period of civil war."));
    assert!(screen.contains("esc back"));
    // Carriage returns never reach the buffer.
    assert!(!screen.contains('\r'));
}

#[test]
fn test_render_detail_clamps_scroll() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: fixture_films(),
    });
    app.open_position(0);
    if let Screen::FilmDetail(detail) = &mut app.screen {
        detail.scroll_down(500);
    }

    draw(&mut app, 60, 30);
    match &app.screen {
        Screen::FilmDetail(detail) => assert_eq!(detail.scroll, 0),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_render_detail_scrolls_to_end_past_space_runs() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: vec![Film {
            title: "Spaced".to_string(),
            opening_crawl: format!("{}ENDMARK", "y  ".repeat(30)),
            ..Film::default()
        }],
    });
    app.open_position(0);
    if let Screen::FilmDetail(detail) = &mut app.screen {
        detail.scroll_down(u16::MAX);
    }

    let screen = draw(&mut app, 9, 5);
    assert!(screen.contains("ENDMARK"), "last line not reachable:\n{}", screen);
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let mut app = app();
    app.handle_message(AppMessage::FilmsLoaded {
        generation: 0,
        films: fixture_films(),
    });
    draw(&mut app, 4, 3);
    app.open_position(1);
    draw(&mut app, 4, 3);
}

fn press(code: KeyCode) -> std::io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[tokio::test]
async fn test_run_app_end_to_end() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok(FILMS_PAGE));
    let mut app = App::with_client(
        AppConfig::default().with_films_url(URL),
        Arc::new(client.clone()),
    );
    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();

    let (events_tx, events_rx) = futures::channel::mpsc::unbounded();
    let driver = async move {
        // Give the fetch time to land before pressing keys.
        tokio::time::sleep(Duration::from_millis(200)).await;
        for code in [KeyCode::Down, KeyCode::Enter, KeyCode::Char('q')] {
            events_tx.unbounded_send(press(code)).unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    };

    let (result, ()) = tokio::join!(run_app(&mut terminal, &mut app, events_rx), driver);
    result.unwrap();

    assert!(app.should_quit);
    assert!(app.message_rx.is_some());
    match &app.screen {
        Screen::FilmDetail(detail) => {
            assert_eq!(detail.params().title, "The Empire Strikes Back");
        }
        other => panic!("unexpected {:?}", other),
    }
    let screen = buffer_text(&terminal);
    assert!(screen.contains("It is a dark time for the"));
    assert_eq!(client.get_requests().len(), 1);
}

#[tokio::test]
async fn test_run_app_quits_when_input_closes() {
    let client = MockHttpClient::new();
    client.set_response(URL, MockResponse::ok("[]"));
    let mut app = App::with_client(
        AppConfig::default().with_films_url(URL),
        Arc::new(client),
    );
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

    let events = futures::stream::empty::<std::io::Result<Event>>();
    run_app(&mut terminal, &mut app, events).await.unwrap();
    assert!(app.should_quit);
}
