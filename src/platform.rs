/// Contracts the game needs from its surroundings: somewhere to draw,
/// somewhere to read input from, and something to play sounds.

use std::io;

use crossterm::style::Color;

use crate::assets::{Font, Sprite};

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Draw target for one 800×800 logical canvas.
pub trait Renderer {
    /// Start a frame by painting the background.
    fn begin_frame(&mut self) -> io::Result<()>;
    fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, font: Font, color: Color, x: i32, y: i32) -> io::Result<()>;
    /// Logical width `text` would occupy, for centring and right alignment.
    fn text_width(&self, text: &str, font: Font) -> i32;
    fn present(&mut self) -> io::Result<()>;
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Input state sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Process-level quit request.
    pub quit: bool,
    /// Discrete "start" event (pointer press).
    pub confirm: bool,
}

pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    Laser,
    Explosion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    Background,
}

/// Fire-and-forget sound playback. Nothing flows back into the game.
pub trait Audio {
    fn play_once(&mut self, clip: Clip);
    fn play_looping(&mut self, track: Track);
}

/// Audio sink that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play_once(&mut self, _clip: Clip) {}
    fn play_looping(&mut self, _track: Track) {}
}
