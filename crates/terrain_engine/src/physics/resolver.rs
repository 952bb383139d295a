//! Penetration-based collision resolution
//!
//! `check_collision` is a read-only query: it scans the collider lists of
//! the query point's cell and its 8 neighbors, reports the nearest
//! penetrating collider, and computes a bounded corrective push. It never
//! mutates cell or collider state.
//!
//! Movement integration is the caller's policy, captured here as [`slide`]:
//! the candidate displacement is tested along X only and Z only as two
//! independent queries, any clear axis applies, and the remaining corrective
//! push is blended toward the adjusted position rather than snapped. This is
//! what lets an observer skim along an obstacle instead of stopping dead.

use crate::foundation::math::Vec2;
use crate::physics::collider::{layers, Collider};
use crate::world::streaming::CellStreamer;
use crate::worldgen::templates::ContentKind;

/// Denominator clamp for push normalization when the query point sits on a
/// collider center
pub const DISTANCE_EPSILON: f32 = 1e-4;

/// Fraction of the corrective push applied per slide step
pub const PUSH_BLEND: f32 = 0.35;

/// A reported collision: the nearest penetrating collider and its push
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Kind of the obstructing content item
    pub kind: ContentKind,
    /// Corrective push, world X component
    pub push_x: f32,
    /// Corrective push, world Z component
    pub push_z: f32,
    /// Planar distance from the query point to the collider center
    pub distance: f32,
    /// Overlap depth `(query_radius + collider.radius) - distance`
    pub penetration: f32,
}

/// Narrow-phase step: nearest penetrating collider among candidates
///
/// A candidate penetrates when its center distance is strictly less than
/// `query_radius + collider.radius`; among candidates the smallest distance
/// (the deepest contact) wins. The push points from the collider center
/// through the query point and is scaled by
/// `min(penetration * push_gain, push_cap)`.
pub fn nearest_contact<'a>(
    colliders: impl IntoIterator<Item = &'a Collider>,
    x: f32,
    z: f32,
    query_radius: f32,
    mask: u32,
    push_gain: f32,
    push_cap: f32,
) -> Option<Contact> {
    let mut nearest: Option<(f32, &Collider)> = None;
    for collider in colliders {
        if !layers::matches(collider.layer, mask) || !collider.overlaps(x, z, query_radius) {
            continue;
        }
        let distance = collider.distance_to(x, z);
        if nearest.map_or(true, |(best, _)| distance < best) {
            nearest = Some((distance, collider));
        }
    }

    nearest.map(|(distance, collider)| {
        let penetration = collider.penetration_depth(x, z, query_radius);
        let inv = 1.0 / distance.max(DISTANCE_EPSILON);
        let dir_x = (x - collider.center_x) * inv;
        let dir_z = (z - collider.center_z) * inv;
        let magnitude = (penetration * push_gain).min(push_cap);
        Contact {
            kind: collider.kind,
            push_x: dir_x * magnitude,
            push_z: dir_z * magnitude,
            distance,
            penetration,
        }
    })
}

/// Collision query against the streamed world
///
/// Scans the cell containing (x, z) and its 8 neighbors; absent or empty
/// neighbor cells simply contribute no candidates.
pub fn check_collision(
    streamer: &CellStreamer,
    x: f32,
    z: f32,
    query_radius: f32,
    mask: u32,
) -> Option<Contact> {
    let config = streamer.config();
    nearest_contact(
        streamer.colliders_near(x, z),
        x,
        z,
        query_radius,
        mask,
        config.push_gain,
        config.push_cap,
    )
}

/// Axis-separated sliding movement
///
/// Returns the position after applying the clear components of `desired`
/// and a blended corrective push for any residual overlap. `position.y`
/// carries world Z.
pub fn slide(streamer: &CellStreamer, position: Vec2, desired: Vec2, query_radius: f32) -> Vec2 {
    let mut next = position;
    if check_collision(
        streamer,
        position.x + desired.x,
        position.y,
        query_radius,
        layers::OBSTACLE,
    )
    .is_none()
    {
        next.x += desired.x;
    }
    if check_collision(
        streamer,
        position.x,
        position.y + desired.y,
        query_radius,
        layers::OBSTACLE,
    )
    .is_none()
    {
        next.y += desired.y;
    }

    if let Some(contact) = check_collision(streamer, next.x, next.y, query_radius, layers::OBSTACLE)
    {
        next.x += contact.push_x * PUSH_BLEND;
        next.y += contact.push_z * PUSH_BLEND;
    }
    next
}
