/// Pixel-mask collision.
///
/// A mask records which logical pixels of a sprite's bounding box are solid.
/// Two entities collide only when their solid pixels overlap, so the blank
/// corners of a sprite never register hits.

#[derive(Clone, Debug, PartialEq)]
pub struct CollisionMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl CollisionMask {
    /// Build a mask by asking `solid(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, solid: impl Fn(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                bits.push(solid(x, y));
            }
        }
        CollisionMask { width, height, bits }
    }

    /// A fully solid rectangle.
    pub fn filled(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True if `other`, placed at `offset` relative to this mask's origin,
    /// shares at least one solid pixel with this mask.
    pub fn overlap(&self, other: &CollisionMask, offset: (i32, i32)) -> bool {
        let (ox, oy) = (offset.0 as i64, offset.1 as i64);

        // Intersection of the two boxes, in this mask's coordinates
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (self.width as i64).min(ox + other.width as i64);
        let y1 = (self.height as i64).min(oy + other.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        (y0..y1).any(|y| {
            (x0..x1).any(|x| {
                self.get(x as usize, y as usize) && other.get((x - ox) as usize, (y - oy) as usize)
            })
        })
    }
}

/// Anything with a position and a mask can take part in collision checks.
pub trait Collider {
    fn position(&self) -> (i32, i32);
    fn mask(&self) -> &CollisionMask;
}

/// Mask overlap between two positioned entities. Symmetric in its arguments.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    let (ax, ay) = a.position();
    let (bx, by) = b.position();
    a.mask().overlap(b.mask(), (bx - ax, by - ay))
}
