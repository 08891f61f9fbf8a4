use super::{PADDING, PAUSE_ICON, PLAY_ICON};
use crate::tui::PlayerSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};

const GOLD: Color = Color::Rgb(220, 220, 100);
const DARK_WHITE: Color = Color::Rgb(210, 210, 210);
const MID_GRAY: Color = Color::Rgb(100, 100, 100);
const GOOD_RED: Color = Color::Rgb(255, 70, 70);

/// Title in the border, then `icon  elapsed/duration`, then any error.
pub struct PlayerWidget;

impl PlayerWidget {
    /// Rows needed to draw `state` at `width` columns, borders included.
    /// Long errors wrap, so the height grows with them.
    pub fn height(state: &PlayerSnapshot, width: u16) -> u16 {
        let inner = width.saturating_sub(2 + PADDING.left + PADDING.right);
        let rows = body(state).line_count(inner.max(1));

        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }
}

fn body(state: &PlayerSnapshot) -> Paragraph<'_> {
    let icon = match state.is_playing {
        true => PAUSE_ICON,
        false => PLAY_ICON,
    };

    let mut lines = vec![Line::from_iter([
        Span::from(icon).fg(GOLD),
        Span::from("  "),
        Span::from(state.time.as_str()).fg(DARK_WHITE),
    ])];

    if let Some(err) = &state.error {
        lines.push(Line::default());
        lines.push(Line::from(err.as_str()).fg(GOOD_RED));
    }

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

impl StatefulWidget for PlayerWidget {
    type State = PlayerSnapshot;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border = match state.is_playing {
            true => GOLD,
            false => MID_GRAY,
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .fg(border)
            .title(format!(" {} ", state.title).fg(DARK_WHITE))
            .padding(PADDING);

        body(state).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        let width = buf.area.width as usize;
        buf.content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn draw(state: &mut PlayerSnapshot) -> Vec<String> {
        draw_at(state, 30)
    }

    fn draw_at(state: &mut PlayerSnapshot, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, PlayerWidget::height(state, width));
        let mut buf = Buffer::empty(area);
        PlayerWidget.render(area, &mut buf, state);
        rows(&buf)
    }

    #[test]
    fn renders_title_icon_and_time() {
        let mut state = PlayerSnapshot {
            title: String::from("Morning"),
            is_playing: false,
            time: String::from("0:00/3:00"),
            error: None,
        };

        let rows = draw(&mut state);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(" Morning "));
        assert!(rows[1].contains(PLAY_ICON));
        assert!(rows[1].contains("0:00/3:00"));
    }

    #[test]
    fn playing_shows_pause_icon() {
        let mut state = PlayerSnapshot {
            title: String::from("Morning"),
            is_playing: true,
            time: String::from("0:12/3:00"),
            error: None,
        };

        let rows = draw(&mut state);

        assert!(rows[1].contains(PAUSE_ICON));
        assert!(!rows[1].contains(PLAY_ICON));
    }

    #[test]
    fn renders_error_line() {
        let mut state = PlayerSnapshot {
            title: String::from("Morning"),
            is_playing: false,
            time: String::from("0:00/0:00"),
            error: Some(String::from("Playback was rejected")),
        };

        let rows = draw(&mut state);

        assert_eq!(rows.len(), 5);
        assert!(rows[3].contains("Playback was rejected"));
    }

    #[test]
    fn long_errors_wrap_without_losing_text() {
        let reason = "end of stream reached before any audio frame";
        let mut state = PlayerSnapshot {
            title: String::from("Opening Theme"),
            is_playing: false,
            time: String::from("0:00/0:00"),
            error: Some(format!(
                "Could not load `/home/user/Music/Some Album/01 Opening Theme.flac`: {reason}"
            )),
        };

        let rows = draw_at(&mut state, 48);
        let text = rows[1..rows.len() - 1]
            .iter()
            .map(|row| row.trim_matches(|c| c == '│' || c == ' '))
            .collect::<Vec<_>>()
            .join(" ");

        assert!(rows.len() > 5);
        assert!(rows.last().unwrap().starts_with('╰'));
        for word in reason.split(' ') {
            assert!(text.contains(word), "{word} missing from {text}");
        }
        assert!(text.contains("Opening Theme.flac`:"));
    }
}
