use crate::key_handler::*;
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::Quit),
        (X, Char('q')) | (X, Esc) => Some(Action::Quit),

        (X, Char(' ')) | (X, Enter) | (X, Char('p')) | (S, Char('P')) => {
            Some(Action::TogglePlay)
        }

        _ => None,
    }
}

/// Wait at most `timeout` for terminal input.
pub fn next_event(timeout: Duration) -> Result<Option<Event>> {
    match event::poll(timeout)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
