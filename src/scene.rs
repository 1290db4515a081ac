/// Draw orchestration.
///
/// Translates game state into `Renderer` calls. No game logic is performed
/// here; the renderer decides how the 800×800 canvas reaches a screen.

use std::io;

use crossterm::style::Color;

use crate::assets::{HUD_FONT, LOST_FONT, TITLE_FONT};
use crate::combat::Actor;
use crate::entities::{GameStatus, Player, Session, Ship};
use crate::game::{Game, Screen};
use crate::platform::{Rect, Renderer};
use crate::WIDTH;

// ── Palette ───────────────────────────────────────────────────────────────────

const C_TEXT: Color = Color::White;
const C_HEALTH_BACK: Color = Color::Red;
const C_HEALTH_FRONT: Color = Color::Green;

pub const MENU_PROMPT: &str = "Press the mouse button to begin.";
pub const LOST_BANNER: &str = "WASTED";

/// Vertical position of centred banners.
const BANNER_Y: i32 = 350;
const HEALTH_BAR_GAP: i32 = 10;
const HEALTH_BAR_HEIGHT: i32 = 10;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<R: Renderer + ?Sized>(r: &mut R, game: &Game) -> io::Result<()> {
    r.begin_frame()?;

    match game.screen() {
        Screen::MainMenu => draw_menu(r)?,
        Screen::InGame(session) => draw_session(r, session, game.high_score())?,
    }

    r.present()
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<R: Renderer + ?Sized>(r: &mut R) -> io::Result<()> {
    let x = WIDTH / 2 - r.text_width(MENU_PROMPT, TITLE_FONT) / 2;
    r.draw_text(MENU_PROMPT, TITLE_FONT, C_TEXT, x, BANNER_Y)
}

// ── Session ───────────────────────────────────────────────────────────────────

fn draw_session<R: Renderer + ?Sized>(r: &mut R, session: &Session, high_score: u32) -> io::Result<()> {
    draw_hud(r, session, high_score)?;

    for enemy in &session.enemies {
        draw_ship(r, &enemy.ship)?;
    }
    draw_ship(r, &session.player.ship)?;
    draw_health_bar(r, &session.player)?;

    if session.status == GameStatus::Lost {
        let x = WIDTH / 2 - r.text_width(LOST_BANNER, LOST_FONT) / 2;
        r.draw_text(LOST_BANNER, LOST_FONT, C_TEXT, x, BANNER_Y)?;
    }
    Ok(())
}

fn draw_hud<R: Renderer + ?Sized>(r: &mut R, session: &Session, high_score: u32) -> io::Result<()> {
    let lives = format!("Lives: {}", session.lives);
    let level = format!("Level: {}", session.level);
    let best = format!("High score: {}", high_score);

    r.draw_text(&lives, HUD_FONT, C_TEXT, 10, 10)?;
    let level_x = WIDTH - r.text_width(&level, HUD_FONT) - 10;
    r.draw_text(&level, HUD_FONT, C_TEXT, level_x, 10)?;
    r.draw_text(&best, HUD_FONT, C_TEXT, 10, 50)?;
    Ok(())
}

fn draw_ship<R: Renderer + ?Sized>(r: &mut R, ship: &Ship) -> io::Result<()> {
    r.blit(&ship.sprite, ship.x, ship.y)?;
    for laser in &ship.lasers {
        r.blit(&laser.sprite, laser.x, laser.y)?;
    }
    Ok(())
}

/// Red bar under the ship, overdrawn in green by the remaining health.
fn draw_health_bar<R: Renderer + ?Sized>(r: &mut R, player: &Player) -> io::Result<()> {
    let ship = &player.ship;
    let back = Rect {
        x: ship.x,
        y: ship.y + player.height() + HEALTH_BAR_GAP,
        w: player.width(),
        h: HEALTH_BAR_HEIGHT,
    };
    let front = Rect {
        w: (back.w as f32 * player.health_fraction()) as i32,
        ..back
    };

    r.fill_rect(back, C_HEALTH_BACK)?;
    r.fill_rect(front, C_HEALTH_FRONT)
}
