pub mod app;
pub mod browser;
pub mod controller;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod movie_card;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search_box;
pub mod spinner;
pub mod terminal_guard;
pub mod theme;
