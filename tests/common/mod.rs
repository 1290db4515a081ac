//! Shared test helpers: deterministic RNG, built-in assets, and recording
//! stand-ins for the audio and renderer collaborators.
#![allow(dead_code)]

use std::io;

use asteroid_shooter::assets::{Assets, Font, Sprite};
use asteroid_shooter::platform::{Audio, Clip, Rect, Renderer, Track};
use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn assets() -> Assets {
    Assets::load().expect("built-in sprites are valid")
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingAudio {
    pub clips: Vec<Clip>,
    pub tracks: Vec<Track>,
}

impl Audio for RecordingAudio {
    fn play_once(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    fn play_looping(&mut self, track: Track) {
        self.tracks.push(track);
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Every glyph is this many logical units wide.
pub const GLYPH_WIDTH: i32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Begin,
    Blit(&'static str, i32, i32),
    Fill(Rect, Color),
    Text(String, i32, i32),
    Present,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub cmds: Vec<Cmd>,
}

impl RecordingRenderer {
    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Text(t, x, y) => Some((t.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Fill(r, color) => Some((*r, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self, name: &str) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, Cmd::Blit(n, _, _) if *n == name))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) -> io::Result<()> {
        self.cmds.push(Cmd::Begin);
        Ok(())
    }

    fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) -> io::Result<()> {
        self.cmds.push(Cmd::Blit(sprite.name, x, y));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        self.cmds.push(Cmd::Fill(rect, color));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _font: Font, _color: Color, x: i32, y: i32) -> io::Result<()> {
        self.cmds.push(Cmd::Text(text.to_string(), x, y));
        Ok(())
    }

    fn text_width(&self, text: &str, _font: Font) -> i32 {
        text.chars().count() as i32 * GLYPH_WIDTH
    }

    fn present(&mut self) -> io::Result<()> {
        self.cmds.push(Cmd::Present);
        Ok(())
    }
}
