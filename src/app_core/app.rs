use crate::{
    FrameClock, PlaybackController, PlayerConfig, RodioEngine,
    key_handler::{self, Action},
    tui::{self, PlayerSnapshot},
};
use anyhow::{Context, Result};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event, KeyEventKind},
};
use std::rc::Rc;
use tracing::info;

pub struct Sonatina {
    control: PlaybackController<RodioEngine, Rc<FrameClock>>,
    clock: Rc<FrameClock>,
    quit: bool,
}

impl Sonatina {
    pub fn new(config: PlayerConfig) -> Result<Self> {
        let engine = RodioEngine::new()
            .context("This system does not support audio playback")?;
        let clock = Rc::new(FrameClock::new());
        let control = PlaybackController::new(config, engine, Rc::clone(&clock));

        Ok(Sonatina {
            control,
            clock,
            quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        self.control.teardown();
        ratatui::restore();

        info!("shutdown");
        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.quit {
            self.control.pump_events();

            for token in self.clock.poll() {
                self.control.on_frame(token);
            }

            let mut snapshot = PlayerSnapshot::from(&self.control);
            terminal.draw(|f| tui::render(f, &mut snapshot))?;

            // Check for user input until the next frame is due
            match key_handler::next_event(self.clock.until_next_frame())? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key) {
                        self.handle_action(action);
                    }
                }
                _ => (),
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::TogglePlay => self.control.toggle_play(),
            Action::Quit => self.quit = true,
        }
    }
}
