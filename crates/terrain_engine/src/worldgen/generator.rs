//! Deterministic content generator
//!
//! A pure mapping from (world seed, cell coordinate, draw index) to a value
//! in `[0, 1)`. The scramble combines fixed odd multipliers with a
//! trigonometric mixing step (`fract(sin(s) * 10000)`), chosen for speed and
//! avalanche behavior, not cryptographic strength. Identical inputs always
//! produce identical outputs, including across process restarts, which is
//! what makes eviction-and-recreate reproducible without persistence.

use crate::foundation::math::{Vec3, TAU};
use crate::world::cell::CellCoord;
use crate::worldgen::templates::{ContentKind, TemplateSet};

/// Fixed odd multipliers decorrelating the three seed components
const MUL_X: i64 = 374_761_393;
const MUL_Z: i64 = 668_265_263;
const MUL_INDEX: i64 = 982_451_653;

/// Largest f32 strictly below 1.0; keeps the f64 -> f32 rounding at the top
/// of the unit interval from producing exactly 1.0
const ONE_BELOW: f32 = 0.999_999_94;

/// Draws consumed per placed object (offset x, offset z, kind, yaw, scale)
const DRAWS_PER_OBJECT: u32 = 5;

/// Pure seeded value in `[0, 1)` for a (cell, index) pair
#[must_use]
pub fn seeded_value(world_seed: i64, cell_x: i32, cell_z: i32, index: u32) -> f32 {
    let s = world_seed
        .wrapping_add(i64::from(cell_x).wrapping_mul(MUL_X))
        .wrapping_add(i64::from(cell_z).wrapping_mul(MUL_Z))
        .wrapping_add(i64::from(index).wrapping_mul(MUL_INDEX));

    // Mixing in f64 keeps the avalanche usable for large coordinates
    let scrambled = (s as f64).sin() * 10_000.0;
    let unit = scrambled - scrambled.floor();
    (unit as f32).min(ONE_BELOW)
}

/// A generated decoration placed within a cell; immutable after creation
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// What was placed
    pub kind: ContentKind,
    /// World position (y is the item's center height above the floor)
    pub position: Vec3,
    /// Yaw rotation in radians
    pub yaw: f32,
    /// Uniform scale jitter
    pub scale: f32,
}

/// Generate the full content list for one cell
///
/// Object count derives from cell area times density; each object then
/// consumes a fixed number of draws for its offset within the cell, its kind
/// (cumulative thresholds: < 0.45 tree, < 0.8 rock, else bush), its yaw, and
/// its scale jitter in `[0.8, 1.2)`. Total over its numeric domain: there is
/// no failure mode.
#[must_use]
pub fn generate_cell_content(
    world_seed: i64,
    coord: CellCoord,
    cell_size: f32,
    object_density: f32,
    templates: &TemplateSet,
) -> Vec<ContentItem> {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let count = (cell_size * cell_size * object_density).round().max(0.0) as usize;

    let origin_x = coord.x as f32 * cell_size;
    let origin_z = coord.z as f32 * cell_size;

    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        #[allow(clippy::cast_possible_truncation)]
        let base = i as u32 * DRAWS_PER_OBJECT;
        let draw = |offset: u32| seeded_value(world_seed, coord.x, coord.z, base + offset);

        let x = origin_x + draw(0) * cell_size;
        let z = origin_z + draw(1) * cell_size;

        let kind_roll = draw(2);
        let kind = if kind_roll < 0.45 {
            ContentKind::Tree
        } else if kind_roll < 0.8 {
            ContentKind::Rock
        } else {
            ContentKind::Bush
        };

        let yaw = draw(3) * TAU;
        let scale = 0.8 + draw(4) * 0.4;

        let height = templates.content(kind).height;
        items.push(ContentItem {
            kind,
            position: Vec3::new(x, 0.5 * height * scale, z),
            yaw,
            scale,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worldgen::templates::TemplateSet;

    #[test]
    fn seeded_value_is_deterministic() {
        for cx in -3..3 {
            for cz in -3..3 {
                for index in 0..32 {
                    let a = seeded_value(1337, cx, cz, index);
                    let b = seeded_value(1337, cx, cz, index);
                    assert_eq!(a.to_bits(), b.to_bits(), "({cx}, {cz}, {index})");
                }
            }
        }
    }

    #[test]
    fn seeded_value_stays_in_unit_interval() {
        for cx in [-100_000, -7, 0, 3, 99_999] {
            for index in 0..256 {
                let v = seeded_value(42, cx, -cx, index);
                assert!((0.0..1.0).contains(&v), "out of range: {v}");
            }
        }
    }

    #[test]
    fn different_cells_and_seeds_decorrelate() {
        let a = seeded_value(1337, 0, 0, 0);
        let b = seeded_value(1337, 1, 0, 0);
        let c = seeded_value(1337, 0, 1, 0);
        let d = seeded_value(7331, 0, 0, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn cell_content_is_reproducible() {
        let templates = TemplateSet::shared();
        let coord = CellCoord { x: -4, z: 17 };
        let first = generate_cell_content(1337, coord, 100.0, 0.002, &templates);
        let second = generate_cell_content(1337, coord, 100.0, 0.002, &templates);
        assert_eq!(first, second);
    }

    #[test]
    fn object_count_follows_area_density() {
        let templates = TemplateSet::shared();
        let coord = CellCoord { x: 0, z: 0 };
        let items = generate_cell_content(1337, coord, 100.0, 0.002, &templates);
        assert_eq!(items.len(), 20);

        let none = generate_cell_content(1337, coord, 100.0, 0.0, &templates);
        assert!(none.is_empty());
    }

    #[test]
    fn placements_stay_inside_their_cell() {
        let templates = TemplateSet::shared();
        let cell_size = 100.0;
        for coord in [CellCoord { x: 0, z: 0 }, CellCoord { x: -2, z: 5 }] {
            let items = generate_cell_content(99, coord, cell_size, 0.002, &templates);
            for item in &items {
                let origin_x = coord.x as f32 * cell_size;
                let origin_z = coord.z as f32 * cell_size;
                assert!(item.position.x >= origin_x && item.position.x < origin_x + cell_size);
                assert!(item.position.z >= origin_z && item.position.z < origin_z + cell_size);
                assert!((0.8..1.2).contains(&item.scale));
            }
        }
    }
}
