//! Cell coordinates and the per-cell ownership record

use crate::physics::collider::Collider;
use crate::scene::SceneObjectId;

slotmap::new_key_type! {
    /// Arena key for a generated content item
    pub struct ContentKey;
}

/// Coordinate of one square world cell
///
/// Obtained from a world position by flooring `position / cell_size` on each
/// axis. A structural key with value equality; lookups never go through
/// string keys or per-lookup allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    /// Cell index along world X
    pub x: i32,
    /// Cell index along world Z
    pub z: i32,
}

impl CellCoord {
    /// Cell containing the given planar world position
    #[must_use]
    pub fn from_world(x: f32, z: f32, cell_size: f32) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self {
            x: (x / cell_size).floor() as i32,
            z: (z / cell_size).floor() as i32,
        }
    }

    /// Chebyshev distance to another cell; the retention ring is a ball
    /// under this metric
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// All coordinates within `radius` of this cell (Chebyshev ball),
    /// row-major. `ring(1)` is the 3x3 collision neighborhood.
    pub fn ring(self, radius: i32) -> impl Iterator<Item = Self> {
        let (cx, cz) = (self.x, self.z);
        (cx - radius..=cx + radius)
            .flat_map(move |x| (cz - radius..=cz + radius).map(move |z| Self { x, z }))
    }
}

/// One active cell and everything it owns
///
/// Content items and colliders live exactly as long as their cell; eviction
/// releases them and deregisters the cell's scene objects. Shared templates
/// are not owned here and survive eviction.
#[derive(Debug)]
pub struct Cell {
    /// This cell's coordinate
    pub coord: CellCoord,
    /// Scene handle of the floor tile
    pub floor_id: SceneObjectId,
    /// Arena keys of the cell's content items
    pub items: Vec<ContentKey>,
    /// Colliders derived from content items tagged as blocking
    pub colliders: Vec<Collider>,
    /// Scene handles of the content items, deregistered on eviction
    pub scene_ids: Vec<SceneObjectId>,
}
