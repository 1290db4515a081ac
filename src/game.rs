/// Top-level state machine: main menu, in-game, and back to the menu when a
/// lost session's banner times out. Owns the high score for the lifetime of
/// the process.

use rand::Rng;
use tracing::info;

use crate::assets::Assets;
use crate::compute::{new_session, tick, TickOutcome};
use crate::entities::Session;
use crate::platform::{Audio, InputFrame, Track};

#[derive(Clone, Debug)]
pub enum Screen {
    MainMenu,
    InGame(Session),
}

pub struct Game {
    assets: Assets,
    high_score: u32,
    screen: Screen,
}

impl Game {
    pub fn new(assets: Assets) -> Game {
        Game {
            assets,
            high_score: 0,
            screen: Screen::MainMenu,
        }
    }

    /// Best level reached by any session so far.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The running session, if any.
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::InGame(session) => Some(session),
            Screen::MainMenu => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.screen {
            Screen::InGame(session) => Some(session),
            Screen::MainMenu => None,
        }
    }

    /// Advance one frame. Quitting is the caller's business: it is checked
    /// before this is called.
    pub fn step(&mut self, input: &InputFrame, rng: &mut impl Rng, audio: &mut dyn Audio) {
        match &mut self.screen {
            Screen::MainMenu => {
                if input.confirm {
                    info!(high_score = self.high_score, "session started");
                    audio.play_looping(Track::Background);
                    self.screen = Screen::InGame(new_session(&self.assets));
                }
            }
            Screen::InGame(session) => {
                let outcome = tick(session, &self.assets, input, rng, audio, &mut self.high_score);
                if outcome == TickOutcome::Finished {
                    info!(level = session.level, "back to main menu");
                    self.screen = Screen::MainMenu;
                }
            }
        }
    }
}
