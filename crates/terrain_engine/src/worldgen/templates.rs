//! Shared shape/material templates for generated content
//!
//! Templates are process-wide, immutable, and shared by reference across all
//! cells: they are created once at engine initialization and dropped once at
//! teardown. Per-cell state (placements, colliders) is owned by each cell;
//! only these descriptors are shared.

use crate::physics::collider::layers;
use std::sync::Arc;

/// Kind of a generated content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Tall conifer-like obstacle
    Tree,
    /// Low boulder obstacle
    Rock,
    /// Decorative shrub; does not obstruct movement
    Bush,
}

/// Identifies the template behind a scene object handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    /// The ground tile of a cell
    Floor,
    /// A generated content item of the given kind
    Content(ContentKind),
}

/// Immutable per-kind shape and material descriptor
#[derive(Debug, Clone)]
pub struct Template {
    /// Base collider radius in world units, before per-item scale
    pub base_radius: f32,

    /// Full height in world units, before per-item scale
    pub height: f32,

    /// Display color (linear RGB), consumed by the rendering collaborator
    pub color: [f32; 3],

    /// Whether items of this template obstruct movement. Collidability is
    /// an explicit tag here; it is never inferred from placement order.
    pub blocks_movement: bool,

    /// Collision layer items of this template occupy
    pub layer: u32,
}

/// The full set of templates the generator can place
#[derive(Debug)]
pub struct TemplateSet {
    /// Ground tile template
    pub floor: Template,
    tree: Template,
    rock: Template,
    bush: Template,
}

impl TemplateSet {
    /// Build the standard template set, shared across all cells
    pub fn shared() -> Arc<Self> {
        Arc::new(Self {
            floor: Template {
                base_radius: 0.0,
                height: 0.0,
                color: [0.29, 0.36, 0.14],
                blocks_movement: false,
                layer: layers::NONE,
            },
            tree: Template {
                base_radius: 1.2,
                height: 4.0,
                color: [0.13, 0.55, 0.13],
                blocks_movement: true,
                layer: layers::OBSTACLE,
            },
            rock: Template {
                base_radius: 1.0,
                height: 1.0,
                color: [0.41, 0.41, 0.41],
                blocks_movement: true,
                layer: layers::OBSTACLE,
            },
            bush: Template {
                base_radius: 0.8,
                height: 1.5,
                color: [0.33, 0.42, 0.18],
                blocks_movement: false,
                layer: layers::NONE,
            },
        })
    }

    /// Template for a content kind
    pub fn content(&self, kind: ContentKind) -> &Template {
        match kind {
            ContentKind::Tree => &self.tree,
            ContentKind::Rock => &self.rock,
            ContentKind::Bush => &self.bush,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacles_carry_the_obstacle_layer() {
        let templates = TemplateSet::shared();
        for kind in [ContentKind::Tree, ContentKind::Rock] {
            let template = templates.content(kind);
            assert!(template.blocks_movement);
            assert_eq!(template.layer, layers::OBSTACLE);
        }
    }

    #[test]
    fn floor_and_bush_never_obstruct() {
        let templates = TemplateSet::shared();
        assert!(!templates.floor.blocks_movement);
        assert!(!templates.content(ContentKind::Bush).blocks_movement);
    }
}
