mod player;

pub use player::PlayerWidget;

const PLAY_ICON: &str = "󰐊";
const PAUSE_ICON: &str = "󰏤";

static PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 0,
    bottom: 0,
};
