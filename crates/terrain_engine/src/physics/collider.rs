//! Disc colliders and collision layer filtering

use crate::worldgen::templates::ContentKind;

/// Collision layer constants for filtering queries
///
/// Layers are a bitmask; a query carries a mask and only considers colliders
/// whose layer intersects it.
pub mod layers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Static generated obstacles (trees, rocks)
    pub const OBSTACLE: u32 = 1 << 0;

    /// Check whether a collider on `layer` is visible to a query `mask`
    #[must_use]
    pub fn matches(layer: u32, mask: u32) -> bool {
        (layer & mask) != 0
    }
}

/// Planar circular obstruction attached to one generated content item
///
/// Height is informational only; resolution happens on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Kind of the content item this collider belongs to
    pub kind: ContentKind,
    /// Collider center, world X
    pub center_x: f32,
    /// Collider center, world Z
    pub center_z: f32,
    /// Disc radius in world units (scaled per item)
    pub radius: f32,
    /// Item height in world units; not used for resolution
    pub height: f32,
    /// Collision layer this collider occupies
    pub layer: u32,
}

impl Collider {
    /// Planar Euclidean distance from the collider center to a point
    #[must_use]
    pub fn distance_to(&self, x: f32, z: f32) -> f32 {
        let dx = x - self.center_x;
        let dz = z - self.center_z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Whether a query circle at (x, z) overlaps this collider
    ///
    /// Touching exactly (`d == query_radius + radius`) does not count as an
    /// overlap; the boundary is consistently outside.
    #[must_use]
    pub fn overlaps(&self, x: f32, z: f32, query_radius: f32) -> bool {
        let dx = x - self.center_x;
        let dz = z - self.center_z;
        let reach = query_radius + self.radius;
        dx * dx + dz * dz < reach * reach
    }

    /// Overlap depth of a query circle, 0.0 when not overlapping
    #[must_use]
    pub fn penetration_depth(&self, x: f32, z: f32, query_radius: f32) -> f32 {
        let distance = self.distance_to(x, z);
        let reach = query_radius + self.radius;
        if distance < reach {
            reach - distance
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rock_at(x: f32, z: f32, radius: f32) -> Collider {
        Collider {
            kind: ContentKind::Rock,
            center_x: x,
            center_z: z,
            radius,
            height: 1.0,
            layer: layers::OBSTACLE,
        }
    }

    #[test]
    fn overlap_is_strict_at_the_boundary() {
        let collider = rock_at(0.0, 0.0, 1.0);
        assert!(collider.overlaps(1.9, 0.0, 1.0));
        assert!(!collider.overlaps(2.0, 0.0, 1.0));
        assert!(!collider.overlaps(2.1, 0.0, 1.0));
    }

    #[test]
    fn penetration_depth_matches_overlap() {
        let collider = rock_at(0.0, 0.0, 1.0);
        assert_relative_eq!(collider.penetration_depth(1.5, 0.0, 1.0), 0.5);
        assert_relative_eq!(collider.penetration_depth(3.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn layer_mask_filtering() {
        assert!(layers::matches(layers::OBSTACLE, layers::ALL));
        assert!(layers::matches(layers::OBSTACLE, layers::OBSTACLE));
        assert!(!layers::matches(layers::OBSTACLE, layers::NONE));
        assert!(!layers::matches(layers::NONE, layers::ALL));
    }
}
