/// Firing, cooldowns and laser resolution.
///
/// Nothing here removes from a list while iterating it: lasers are compacted
/// with `retain_mut`, enemies are flagged first and dropped afterwards.

use crate::collision::{overlaps, Collider};
use crate::entities::{Enemy, Laser, Player, Ship};
use crate::HEIGHT;

/// Frames a ship waits between shots.
pub const COOLDOWN: u32 = 15;

// ── Laser ─────────────────────────────────────────────────────────────────────

impl Laser {
    /// Positive velocity moves down the screen, negative moves up.
    pub fn advance(&mut self, velocity: i32) {
        self.y += velocity;
    }

    pub fn is_out_of_bounds(&self, screen_height: i32) -> bool {
        self.y < 0 || self.y > screen_height
    }

    pub fn collides_with<T: Collider + ?Sized>(&self, target: &T) -> bool {
        overlaps(self, target)
    }
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// Behaviour shared by the player and the enemies.
pub trait Actor: Collider {
    fn ship(&self) -> &Ship;
    fn ship_mut(&mut self) -> &mut Ship;

    /// Fire a laser from the ship's position if the cooldown allows it.
    fn fire(&mut self) -> Option<&Laser> {
        let ship = self.ship_mut();
        if ship.cooldown != 0 {
            return None;
        }
        let laser = Laser::new(ship.x, ship.y, ship.laser_sprite.clone());
        ship.lasers.push(laser);
        ship.cooldown = 1;
        ship.lasers.last()
    }

    fn tick_cooldown(&mut self) {
        let ship = self.ship_mut();
        if ship.cooldown >= COOLDOWN {
            ship.cooldown = 0;
        } else if ship.cooldown > 0 {
            ship.cooldown += 1;
        }
    }

    fn width(&self) -> i32 {
        self.ship().sprite.width()
    }

    fn height(&self) -> i32 {
        self.ship().sprite.height()
    }

    fn health(&self) -> i32 {
        self.ship().health
    }
}

impl Actor for Player {
    fn ship(&self) -> &Ship {
        &self.ship
    }

    fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }
}

impl Actor for Enemy {
    fn ship(&self) -> &Ship {
        &self.ship
    }

    fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    /// Health as a fraction of max health, clamped to `[0, 1]` for the health bar.
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.ship.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// Move every player laser and resolve hits against `enemies`.
    ///
    /// A hit destroys both the laser and the enemy. Each laser destroys at
    /// most one enemy: the first, in list order, it overlaps that has not
    /// already been destroyed this frame. Returns the number of kills.
    pub fn advance_lasers(&mut self, velocity: i32, enemies: &mut Vec<Enemy>) -> usize {
        self.tick_cooldown();

        let mut destroyed = vec![false; enemies.len()];
        let mut kills = 0;
        self.ship.lasers.retain_mut(|laser| {
            laser.advance(velocity);
            if laser.is_out_of_bounds(HEIGHT) {
                return false;
            }
            let hit = (0..enemies.len()).find(|&i| !destroyed[i] && laser.collides_with(&enemies[i]));
            match hit {
                Some(i) => {
                    destroyed[i] = true;
                    kills += 1;
                    false
                }
                None => true,
            }
        });

        if kills > 0 {
            let mut flags = destroyed.into_iter();
            enemies.retain(|_| !flags.next().unwrap_or(false));
            tracing::debug!(kills, remaining = enemies.len(), "asteroids destroyed");
        }
        kills
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

impl Enemy {
    /// Unconditional downward drift.
    pub fn descend(&mut self, velocity: i32) {
        self.ship.y += velocity;
    }

    /// Move every enemy laser and resolve hits against the player. Each hit
    /// costs the player `damage` health and consumes the laser. Returns the
    /// number of hits.
    pub fn advance_lasers(&mut self, velocity: i32, damage: i32, player: &mut Player) -> u32 {
        self.tick_cooldown();

        let mut hits = 0;
        self.ship.lasers.retain_mut(|laser| {
            laser.advance(velocity);
            if laser.is_out_of_bounds(HEIGHT) {
                return false;
            }
            if laser.collides_with(&*player) {
                player.ship.health -= damage;
                hits += 1;
                return false;
            }
            true
        });
        hits
    }
}
