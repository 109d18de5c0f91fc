//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use movie_finder::config::{ApiConfig, CredentialStatus, SecureString};
use movie_finder::tmdb::{Movie, TmdbClient};
use movie_finder::ui::app::App;
use movie_finder::ui::browser::BrowserIntent;
use movie_finder::ui::controller::BrowserController;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::net::TcpListener;

pub const TEST_API_KEY: &str = "test-token";

/// A port nothing is listening on once this returns.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Client pointed at `base_url` with a fixed bearer token.
pub fn client_for(base_url: &str) -> TmdbClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    };
    TmdbClient::with_credential(
        &config,
        CredentialStatus::Configured(SecureString::new(TEST_API_KEY.to_string())),
    )
    .expect("Failed to build client")
}

pub fn movies(titles: &[&str]) -> Vec<Movie> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Movie::new(i as u64 + 1, *title))
        .collect()
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(BrowserController::new())
}

pub fn make_app_with_movies(titles: &[&str]) -> App {
    let app = make_app();
    app.controller().dispatch(BrowserIntent::FetchSucceeded {
        movies: movies(titles),
    });
    app
}

// -- Rendering ----------------------------------------------------------------

/// Draw one frame and return the screen as text, one string per row.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| movie_finder::ui::render::draw(frame, app))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

pub fn render_text(app: &App, width: u16, height: u16) -> String {
    render_rows(app, width, height).join("\n")
}
