use crate::ui::app::App;
use crate::ui::browser::BrowserState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::movie_card::MovieCard;
use crate::ui::search_box::SearchBox;
use crate::ui::spinner::Spinner;
use crate::ui::theme::{ACCENT_LIGHT, ACTIVE_HIGHLIGHT, ERROR_TEXT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(), regions.header);

    app.controller().with_state(|state| {
        let search = SearchBox::new(&state.search_term);
        frame.render_widget(search.widget(), regions.search);
        if let Some(position) = search.cursor(regions.search) {
            frame.set_cursor_position(position);
        }

        frame.render_widget(Clear, regions.body);
        draw_body(frame, regions.body, app, state);

        let footer = Footer::new(state.visible_movies().len(), state.movies.len());
        frame.render_widget(footer.widget(regions.footer), regions.footer);
    });
}

/// Loading, error, or the list. Never more than one of them.
fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App, state: &BrowserState) {
    let block = Block::default()
        .title(Span::styled(
            " All Movies ",
            Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.is_loading {
        let spinner = Spinner::new(app.spinner_frame());
        frame.render_widget(spinner.widget().block(block), area);
        return;
    }

    if state.has_error() {
        let error = Paragraph::new(state.error_message.clone())
            .style(Style::default().fg(ERROR_TEXT))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(error, area);
        return;
    }

    let visible = state.visible_movies();
    if visible.is_empty() {
        let empty = Paragraph::new("No movies found.")
            .style(Style::default().fg(MUTED_TEXT))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'static>> = visible
        .iter()
        .map(|movie| MovieCard::new(movie).item())
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");
    let selected = app.selection_within(visible.len());
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
