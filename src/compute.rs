/// Per-frame game logic.
///
/// Every function takes the session by mutable reference and applies one
/// step of the frame. Side effects are limited to the injected RNG and the
/// injected audio sink, so tests can drive the whole loop deterministically.

use rand::Rng;
use tracing::{debug, info};

use crate::assets::Assets;
use crate::collision::overlaps;
use crate::combat::Actor;
use crate::entities::{Enemy, GameStatus, Player, Session};
use crate::platform::{Audio, Clip, InputFrame};
use crate::{HEIGHT, WIDTH};

// ── Tuning ───────────────────────────────────────────────────────────────────

pub const FPS: u32 = 60;
pub const START_LIVES: i32 = 3;
pub const START_WAVE_LENGTH: u32 = 5;
pub const WAVE_INCREMENT: u32 = 5;
pub const PLAYER_START: (i32, i32) = (400, 700);

/// Pixels per tick.
pub const PLAYER_VEL: i32 = 7;
pub const ENEMY_VEL: i32 = 3;
pub const LASER_VEL: i32 = 9;

/// Health lost per enemy laser hit and per body collision.
pub const DAMAGE: i32 = 15;

/// Room kept under the player for the health bar.
pub const HEALTH_BAR_SLACK: i32 = 15;

/// Ticks the loss banner stays up before returning to the menu.
pub const LOST_DISPLAY_TICKS: u32 = FPS * 3;

// Spawn ranges, half-open.
pub const SPAWN_X: (i32, i32) = (50, WIDTH - 100);
pub const SPAWN_Y: (i32, i32) = (-1500, -100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The loss banner has timed out; the session is over.
    Finished,
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_session(assets: &Assets) -> Session {
    Session {
        player: Player::new(PLAYER_START.0, PLAYER_START.1, assets),
        enemies: Vec::new(),
        lives: START_LIVES,
        level: 0,
        wave_length: START_WAVE_LENGTH,
        status: GameStatus::Playing,
        lost_timer: 0,
    }
}

// ── Frame steps ──────────────────────────────────────────────────────────────

/// Flip to `Lost` once lives or health run out, recording the high score.
/// Returns true on the tick the session is lost.
pub fn check_loss(session: &mut Session, high_score: &mut u32) -> bool {
    if session.status == GameStatus::Lost {
        return false;
    }
    if session.lives > 0 && session.player.health() > 0 {
        return false;
    }

    session.status = GameStatus::Lost;
    if session.level > *high_score {
        *high_score = session.level;
        info!(high_score = *high_score, "new high score");
    }
    info!(
        level = session.level,
        lives = session.lives,
        health = session.player.health(),
        "session lost"
    );
    true
}

/// Start the next level with a bigger wave, scattered above the screen.
pub fn spawn_wave(session: &mut Session, assets: &Assets, rng: &mut impl Rng) {
    session.level += 1;
    session.wave_length += WAVE_INCREMENT;
    for _ in 0..session.wave_length {
        let x = rng.gen_range(SPAWN_X.0..SPAWN_X.1);
        let y = rng.gen_range(SPAWN_Y.0..SPAWN_Y.1);
        session.enemies.push(Enemy::new(x, y, assets));
    }
    info!(level = session.level, enemies = session.wave_length, "wave spawned");
}

/// Move the player one step per held direction. A step is only taken when
/// the ship stays inside the canvas; the bottom edge keeps room for the
/// health bar.
pub fn move_player(player: &mut Player, input: &InputFrame) {
    let (w, h) = (player.width(), player.height());
    let ship = &mut player.ship;

    if input.left && ship.x - PLAYER_VEL > 0 {
        ship.x -= PLAYER_VEL;
    }
    if input.right && ship.x + PLAYER_VEL + w < WIDTH {
        ship.x += PLAYER_VEL;
    }
    if input.up && ship.y - PLAYER_VEL > 0 {
        ship.y -= PLAYER_VEL;
    }
    if input.down && ship.y + PLAYER_VEL + h + HEALTH_BAR_SLACK < HEIGHT {
        ship.y += PLAYER_VEL;
    }
}

/// Descend every enemy, resolve its lasers and its body against the player,
/// and drop the ones that rammed the player or escaped past the bottom.
pub fn update_enemies(session: &mut Session, audio: &mut dyn Audio) {
    let Session {
        player,
        enemies,
        lives,
        ..
    } = session;

    let mut gone = Vec::with_capacity(enemies.len());
    for enemy in enemies.iter_mut() {
        enemy.descend(ENEMY_VEL);
        enemy.advance_lasers(LASER_VEL, DAMAGE, player);

        if overlaps(&*enemy, &*player) {
            player.ship.health -= DAMAGE;
            audio.play_once(Clip::Explosion);
            debug!(health = player.ship.health, "asteroid hit the player");
            gone.push(true);
        } else if enemy.ship.y + enemy.height() > HEIGHT {
            *lives -= 1;
            debug!(lives = *lives, "asteroid escaped");
            gone.push(true);
        } else {
            gone.push(false);
        }
    }

    let mut flags = gone.into_iter();
    enemies.retain(|_| !flags.next().unwrap_or(false));
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the session by one frame.
///
/// Order: loss check, loss banner countdown, wave spawn, player input,
/// enemies, player lasers. While the session is lost only the countdown runs.
pub fn tick(
    session: &mut Session,
    assets: &Assets,
    input: &InputFrame,
    rng: &mut impl Rng,
    audio: &mut dyn Audio,
    high_score: &mut u32,
) -> TickOutcome {
    // ── 1. Loss check ────────────────────────────────────────────────────────
    check_loss(session, high_score);

    // ── 2. Loss banner ───────────────────────────────────────────────────────
    if session.status == GameStatus::Lost {
        session.lost_timer += 1;
        if session.lost_timer > LOST_DISPLAY_TICKS {
            return TickOutcome::Finished;
        }
        return TickOutcome::Running;
    }

    // ── 3. Next wave ─────────────────────────────────────────────────────────
    if session.enemies.is_empty() {
        spawn_wave(session, assets, rng);
    }

    // ── 4. Player input ──────────────────────────────────────────────────────
    move_player(&mut session.player, input);
    if input.fire {
        session.player.fire();
        audio.play_once(Clip::Laser);
    }

    // ── 5. Enemies ───────────────────────────────────────────────────────────
    update_enemies(session, audio);

    // ── 6. Player lasers ─────────────────────────────────────────────────────
    session.player.advance_lasers(-LASER_VEL, &mut session.enemies);

    TickOutcome::Running
}
