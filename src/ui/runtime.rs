use crate::config::UiConfig;
use crate::tmdb::TmdbClient;
use crate::ui::app::App;
use crate::ui::controller::BrowserController;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use tokio::runtime::Handle;

/// Run the browser until the user quits.
///
/// The popular-movies fetch is started once, before the first frame is
/// drawn, and driven on `runtime`.
pub fn run(ui: &UiConfig, runtime: Handle, client: TmdbClient) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = ui.tick_rate();
    let controller = BrowserController::new();
    let mut app = App::new(controller.clone());
    let events = EventHandler::new(tick_rate);

    let notify = events.sender();
    let fetching = controller.fetch_movies(&client);
    let fetch = runtime.spawn(async move {
        fetching.await;
        let _ = notify.send(AppEvent::FetchSettled);
    });

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchSettled) => app.on_fetch_settled(),
            Ok(AppEvent::InputClosed) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    fetch.abort();
    drop(guard);
    Ok(())
}
