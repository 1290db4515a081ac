/// Built-in sprites and fonts.
///
/// Sprite images are character art: every non-blank cell is solid, every
/// space is transparent. The art is stretched over the sprite's logical
/// width and height, and the collision mask is derived from it once, at load.

use std::rc::Rc;

use anyhow::{bail, Result};
use crossterm::style::Color;

use crate::collision::CollisionMask;

// ── Fonts ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    pub family: &'static str,
    pub size: u16,
}

pub const HUD_FONT: Font = Font { family: "Arial", size: 45 };
pub const TITLE_FONT: Font = Font { family: "Arial", size: 55 };
pub const LOST_FONT: Font = Font { family: "Arial", size: 100 };

// ── Sprite art ───────────────────────────────────────────────────────────────

const SHIP_ART: &[&str] = &[
    "   /\\   ",
    "  /██\\  ",
    " /████\\ ",
    "/_/  \\_\\",
];

const ASTEROID_ART: &[&str] = &[
    "  ▄██▄  ",
    " ██▓▓██ ",
    "██▓██▓██",
    " ██▓▓██ ",
    "  ▀██▀  ",
];

// Lasers spawn at the ship's top-left corner, so the beam sits in the
// columns under the ship's nose.
const LASER_ART: &[&str] = &[
    "   ││   ",
    "   ││   ",
    "   ││   ",
];

// ── Sprite ───────────────────────────────────────────────────────────────────

/// An image plus its derived collision mask. Cloning is cheap: the mask is shared.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub name: &'static str,
    pub art: &'static [&'static str],
    pub color: Color,
    width: i32,
    height: i32,
    mask: Rc<CollisionMask>,
}

impl Sprite {
    pub fn new(
        name: &'static str,
        art: &'static [&'static str],
        color: Color,
        width: i32,
        height: i32,
    ) -> Result<Sprite> {
        if width <= 0 || height <= 0 {
            bail!("sprite `{name}` has non-positive size {width}x{height}");
        }
        let Some(first) = art.first() else {
            bail!("sprite `{name}` has no art");
        };
        let cols = first.chars().count();
        if cols == 0 {
            bail!("sprite `{name}` has empty art rows");
        }
        if let Some(row) = art.iter().position(|r| r.chars().count() != cols) {
            bail!("sprite `{name}` row {row} is not {cols} cells wide");
        }

        let cells: Vec<Vec<bool>> = art
            .iter()
            .map(|row| row.chars().map(|c| c != ' ').collect())
            .collect();
        let rows = cells.len();
        let (w, h) = (width as usize, height as usize);
        let mask = CollisionMask::from_fn(w, h, |x, y| cells[y * rows / h][x * cols / w]);

        Ok(Sprite {
            name,
            art,
            color,
            width,
            height,
            mask: Rc::new(mask),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn mask(&self) -> &CollisionMask {
        &self.mask
    }

    /// Number of art cells across and down.
    pub fn art_size(&self) -> (usize, usize) {
        (self.art[0].chars().count(), self.art.len())
    }
}

// ── Asset provider ───────────────────────────────────────────────────────────

/// Everything the game draws, loaded once at start-up.
#[derive(Clone, Debug)]
pub struct Assets {
    pub ship: Sprite,
    pub asteroid: Sprite,
    pub laser: Sprite,
}

impl Assets {
    pub fn load() -> Result<Assets> {
        Ok(Assets {
            ship: Sprite::new("spaceship", SHIP_ART, Color::White, 64, 64)?,
            asteroid: Sprite::new("asteroid", ASTEROID_ART, Color::DarkYellow, 80, 80)?,
            laser: Sprite::new("laser", LASER_ART, Color::Red, 64, 48)?,
        })
    }
}
