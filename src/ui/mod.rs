//! UI modules for the joke window

mod card;
mod components;
mod favorites;
pub mod theme;

pub use card::render_joke_card;
pub use favorites::render_favorites;
