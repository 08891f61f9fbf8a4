mod snapshot;
mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    widgets::{Block, StatefulWidget, Widget},
};

pub use snapshot::PlayerSnapshot;
pub use widgets::PlayerWidget;

const BG: ratatui::style::Color = ratatui::style::Color::Rgb(25, 25, 25);
const PLAYER_WIDTH: u16 = 48;

pub fn render(f: &mut Frame, state: &mut PlayerSnapshot) {
    Block::new().bg(BG).render(f.area(), f.buffer_mut());

    let area = centered_rect(
        PLAYER_WIDTH,
        PlayerWidget::height(state, PLAYER_WIDTH),
        f.area(),
    );
    PlayerWidget.render(area, f.buffer_mut(), state);
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(r);

    let [_, area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);

    area
}
