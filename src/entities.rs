/// Game entity types: data and constructors. Behaviour lives in `combat`
/// and `compute`.

use crate::assets::{Assets, Sprite};
use crate::collision::{Collider, CollisionMask};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Lost,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Laser {
    pub x: i32,
    pub y: i32,
    pub sprite: Sprite,
}

impl Laser {
    pub fn new(x: i32, y: i32, sprite: Sprite) -> Laser {
        Laser { x, y, sprite }
    }
}

// ── Ships ─────────────────────────────────────────────────────────────────────

/// State shared by every actor: where it is, how hurt it is, and the lasers
/// it has fired (oldest first).
#[derive(Clone, Debug)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
    /// Not clamped; anything `<= 0` counts as destroyed.
    pub health: i32,
    pub sprite: Sprite,
    pub laser_sprite: Sprite,
    pub lasers: Vec<Laser>,
    /// 0 = ready to fire, otherwise frames since the last shot.
    pub cooldown: u32,
}

impl Ship {
    pub fn new(x: i32, y: i32, health: i32, sprite: Sprite, laser_sprite: Sprite) -> Ship {
        Ship {
            x,
            y,
            health,
            sprite,
            laser_sprite,
            lasers: Vec::new(),
            cooldown: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub ship: Ship,
    pub max_health: i32,
}

impl Player {
    pub const START_HEALTH: i32 = 100;

    pub fn new(x: i32, y: i32, assets: &Assets) -> Player {
        Player {
            ship: Ship::new(
                x,
                y,
                Self::START_HEALTH,
                assets.ship.clone(),
                assets.laser.clone(),
            ),
            max_health: Self::START_HEALTH,
        }
    }
}

/// A descending asteroid.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub ship: Ship,
}

impl Enemy {
    pub fn new(x: i32, y: i32, assets: &Assets) -> Enemy {
        Enemy {
            ship: Ship::new(x, y, 100, assets.asteroid.clone(), assets.laser.clone()),
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One play-through, from leaving the menu until the loss banner times out.
#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub lives: i32,
    pub level: u32,
    /// Enemies in the next wave, before the increment applied at spawn.
    pub wave_length: u32,
    pub status: GameStatus,
    /// Ticks spent in `GameStatus::Lost`.
    pub lost_timer: u32,
}

// ── Collider impls ────────────────────────────────────────────────────────────

impl Collider for Laser {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn mask(&self) -> &CollisionMask {
        self.sprite.mask()
    }
}

impl Collider for Ship {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn mask(&self) -> &CollisionMask {
        self.sprite.mask()
    }
}

impl Collider for Player {
    fn position(&self) -> (i32, i32) {
        self.ship.position()
    }

    fn mask(&self) -> &CollisionMask {
        self.ship.mask()
    }
}

impl Collider for Enemy {
    fn position(&self) -> (i32, i32) {
        self.ship.position()
    }

    fn mask(&self) -> &CollisionMask {
        self.ship.mask()
    }
}
