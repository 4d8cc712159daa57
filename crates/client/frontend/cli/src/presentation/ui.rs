//! Composes widgets into full screens.
//!
//! A [`Screen`] is a borrowed description of one frame: an optional status
//! bar, a body and an optional popup on top. Screens are `Copy`, so a menu
//! can be drawn over whatever the caller was showing.

use game_core::{Combatant, Position, TileMap};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

pub use crate::presentation::widgets::header::Header;
use crate::presentation::widgets::{
    self, header, map_view, menu::Menu, narration, notice, roster, text_input::TextInput, title,
};

#[derive(Clone, Copy, Debug)]
pub enum Body<'a> {
    Title,
    Narration {
        line: &'a str,
        revealed: usize,
        waiting: bool,
    },
    Map {
        map: &'a TileMap,
        player: Position,
    },
    Battle {
        roster: &'a [Combatant],
    },
    Notice(&'a str),
}

#[derive(Clone, Copy, Debug)]
pub enum Overlay<'a> {
    Menu(&'a Menu),
    Input(&'a TextInput),
}

#[derive(Clone, Copy, Debug)]
pub struct Screen<'a> {
    pub header: Option<Header>,
    pub body: Body<'a>,
    pub overlay: Option<Overlay<'a>>,
}

impl<'a> Screen<'a> {
    pub fn new(header: Option<Header>, body: Body<'a>) -> Self {
        Self {
            header,
            body,
            overlay: None,
        }
    }

    /// The same screen with `overlay` drawn on top.
    pub fn with_overlay(self, overlay: Overlay<'a>) -> Self {
        Self {
            overlay: Some(overlay),
            ..self
        }
    }
}

pub fn render(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    let body_area = match &screen.header {
        Some(stats) => {
            let [top, rest] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
            header::render(frame, top, stats);
            rest
        }
        None => area,
    };

    render_body(frame, body_area, &screen.body);

    match screen.overlay {
        Some(Overlay::Menu(menu)) => widgets::menu::render(frame, area, menu),
        Some(Overlay::Input(input)) => widgets::text_input::render(frame, area, input),
        None => {}
    }
}

fn render_body(frame: &mut Frame, area: Rect, body: &Body) {
    match *body {
        Body::Title => title::render(frame, area),
        Body::Narration {
            line,
            revealed,
            waiting,
        } => narration::render(frame, area, line, revealed, waiting),
        Body::Map { map, player } => map_view::render(frame, area, map, player),
        Body::Battle { roster: enemies } => {
            let height = u16::try_from(enemies.len() + 2).unwrap_or(u16::MAX);
            let [list, _] =
                Layout::vertical([Constraint::Length(height), Constraint::Min(0)]).areas(area);
            roster::render(frame, list, enemies);
        }
        Body::Notice(message) => notice::render(frame, area, message),
    }
}
