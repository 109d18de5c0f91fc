use crate::ui::browser::BrowserIntent;
use crate::ui::controller::BrowserController;
use crate::ui::layout::{layout_regions, visible_cards};
use ratatui::layout::Rect;

/// Terminal-side state around the shared browser state: quit flag,
/// highlighted row, spinner frame and screen size.
pub struct App {
    should_quit: bool,
    controller: BrowserController,
    selection: usize,
    spinner_frame: usize,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(controller: BrowserController) -> Self {
        Self {
            should_quit: false,
            controller,
            selection: 0,
            spinner_frame: 0,
            size: None,
        }
    }

    pub fn controller(&self) -> &BrowserController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if self.controller.with_state(|state| state.is_loading) {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Called once the fetch task has settled.
    pub fn on_fetch_settled(&mut self) {
        self.selection = 0;
    }

    /// Highlighted row, clamped to the currently visible movies.
    pub fn selection(&self) -> usize {
        self.selection_within(self.visible_len())
    }

    /// Highlighted row for a list of `len` entries. Does not touch the
    /// shared state, so it is safe to call while the state is borrowed.
    pub fn selection_within(&self, len: usize) -> usize {
        self.selection.min(len.saturating_sub(1))
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection_within(len) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selection = next as usize;
    }

    pub fn page_size(&self) -> usize {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        visible_cards(layout_regions(Rect::new(0, 0, cols, rows)).body)
    }

    pub fn select_first(&mut self) {
        self.selection = 0;
    }

    pub fn select_last(&mut self) {
        self.selection = self.visible_len().saturating_sub(1);
    }

    pub fn search_push(&mut self, ch: char) {
        self.controller.dispatch(BrowserIntent::SearchInput(ch));
        self.selection = 0;
    }

    pub fn search_backspace(&mut self) {
        self.controller.dispatch(BrowserIntent::SearchBackspace);
        self.selection = 0;
    }

    pub fn search_clear(&mut self) {
        self.controller.dispatch(BrowserIntent::SearchClear);
        self.selection = 0;
    }

    fn visible_len(&self) -> usize {
        self.controller.with_state(|state| state.visible_movies().len())
    }
}
