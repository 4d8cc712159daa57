//! Rendering: terminal lifecycle, inline markup and widgets.
pub mod markup;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use ui::{Body, Header, Overlay, Screen};
