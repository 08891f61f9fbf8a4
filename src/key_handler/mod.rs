mod action;

pub use action::{handle_key_event, next_event};
use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    Quit,
}
