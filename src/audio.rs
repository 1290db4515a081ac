/// Terminal "audio": explosions ring the bell, everything else is only logged.

use std::io::{self, Write};

use asteroid_shooter::platform::{Audio, Clip, Track};

pub struct TerminalAudio {
    bell: bool,
    looping: Option<Track>,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        TerminalAudio { bell, looping: None }
    }

    fn ring(&self) {
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::warn!(%err, "terminal bell failed");
        }
    }
}

impl Audio for TerminalAudio {
    fn play_once(&mut self, clip: Clip) {
        tracing::trace!(?clip, "play");
        if self.bell && clip == Clip::Explosion {
            self.ring();
        }
    }

    fn play_looping(&mut self, track: Track) {
        // Already playing: keep going rather than restart
        if self.looping == Some(track) {
            return;
        }
        tracing::debug!(?track, "loop started");
        self.looping = Some(track);
    }
}
