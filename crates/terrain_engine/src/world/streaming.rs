//! Cell lifecycle management
//!
//! Owns the active-cell set and keeps it equal to the retention ring around
//! the observer's current cell: every coordinate within `render_distance`
//! (Chebyshev) is materialized, everything outside is released. The ring is
//! recomputed in full from the observer's coordinate rather than patched
//! incrementally, so a teleport-sized jump settles in a single update.
//!
//! Generation is pure arithmetic and runs synchronously on the frame that
//! crosses a cell boundary. A budgeted create queue could be inserted
//! between ring computation and cell construction without touching the
//! steady-state invariant; the current driver does not need one.

use crate::config::WorldConfig;
use crate::foundation::math::Vec3;
use crate::physics::collider::Collider;
use crate::scene::{SceneObject, SceneSink};
use crate::world::cell::{Cell, CellCoord, ContentKey};
use crate::worldgen::generator::{generate_cell_content, ContentItem};
use crate::worldgen::templates::{TemplateId, TemplateSet};
use slotmap::SlotMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Streams cells around a single moving observer
///
/// Single-threaded and tick-driven: one `update` per simulation frame from
/// one caller. Nothing here suspends, blocks, or performs I/O.
pub struct CellStreamer {
    config: WorldConfig,

    /// Shared template handle; dropped on teardown, reacquired lazily if
    /// streaming resumes
    templates: Option<Arc<TemplateSet>>,
    sink: Box<dyn SceneSink>,

    /// Active cells, keyed by coordinate
    cells: HashMap<CellCoord, Cell>,

    /// Arena of content items; cells hold keys into it and eviction frees
    /// the slots in bulk
    contents: SlotMap<ContentKey, ContentItem>,

    /// Observer cell at the previous update, for the idle short-circuit
    last_observer_cell: Option<CellCoord>,
}

impl CellStreamer {
    /// Create an empty streamer. The configuration must already be
    /// validated; see [`WorldConfig::validate`].
    pub fn new(config: WorldConfig, templates: Arc<TemplateSet>, sink: Box<dyn SceneSink>) -> Self {
        Self {
            config,
            templates: Some(templates),
            sink,
            cells: HashMap::new(),
            contents: SlotMap::with_key(),
            last_observer_cell: None,
        }
    }

    /// Advance the cell lifecycle for the observer's current position
    ///
    /// No-op when the observer has not changed cell and cells exist; this is
    /// an optimization, not a correctness requirement, since recomputing the
    /// ring is idempotent.
    pub fn update(&mut self, observer: Vec3) {
        let center = CellCoord::from_world(observer.x, observer.z, self.config.cell_size);
        if self.last_observer_cell == Some(center) && !self.cells.is_empty() {
            return;
        }

        let radius = self.config.render_distance;
        for coord in center.ring(radius) {
            if !self.cells.contains_key(&coord) {
                let cell = self.build_cell(coord);
                self.cells.insert(coord, cell);
            }
        }

        let stale: Vec<CellCoord> = self
            .cells
            .keys()
            .filter(|coord| coord.chebyshev(center) > radius)
            .copied()
            .collect();
        for coord in stale {
            self.release_cell(coord);
        }

        self.last_observer_cell = Some(center);
    }

    /// Release every active cell, drop the shared template handle, and
    /// forget the observer
    ///
    /// Idempotent. This is teardown: the template set is freed once every
    /// other holder has released its handle.
    pub fn release_all(&mut self) {
        let coords: Vec<CellCoord> = self.cells.keys().copied().collect();
        for coord in coords {
            self.release_cell(coord);
        }
        self.templates = None;
        self.last_observer_cell = None;
        debug_assert!(self.contents.is_empty(), "content arena leaked on release");
    }

    /// Colliders of the cell containing (x, z) and its 8 neighbors
    pub fn colliders_near(&self, x: f32, z: f32) -> impl Iterator<Item = &Collider> {
        CellCoord::from_world(x, z, self.config.cell_size)
            .ring(1)
            .filter_map(|coord| self.cells.get(&coord))
            .flat_map(|cell| cell.colliders.iter())
    }

    /// The streamer's configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of currently active cells
    pub fn active_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Coordinates of all currently active cells
    pub fn active_coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.keys().copied()
    }

    /// Whether a cell is currently active
    pub fn contains_cell(&self, coord: CellCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Snapshot of a cell's content items, in generation order
    pub fn cell_items(&self, coord: CellCoord) -> Option<Vec<ContentItem>> {
        let cell = self.cells.get(&coord)?;
        Some(
            cell.items
                .iter()
                .filter_map(|key| self.contents.get(*key))
                .cloned()
                .collect(),
        )
    }

    fn build_cell(&mut self, coord: CellCoord) -> Cell {
        debug_assert!(!self.cells.contains_key(&coord), "duplicate cell at {coord:?}");

        let templates = Arc::clone(self.templates.get_or_insert_with(TemplateSet::shared));
        let cell_size = self.config.cell_size;
        let half = cell_size * 0.5;
        let floor_id = self.sink.add_object(&SceneObject {
            template: TemplateId::Floor,
            position: Vec3::new(
                coord.x as f32 * cell_size + half,
                0.0,
                coord.z as f32 * cell_size + half,
            ),
            yaw: 0.0,
            scale: cell_size,
        });

        let generated = generate_cell_content(
            self.config.world_seed,
            coord,
            cell_size,
            self.config.object_density,
            &templates,
        );

        let mut items = Vec::with_capacity(generated.len());
        let mut colliders = Vec::new();
        let mut scene_ids = Vec::with_capacity(generated.len());
        for item in generated {
            let template = templates.content(item.kind);
            if template.blocks_movement {
                colliders.push(Collider {
                    kind: item.kind,
                    center_x: item.position.x,
                    center_z: item.position.z,
                    radius: template.base_radius * item.scale,
                    height: template.height * item.scale,
                    layer: template.layer,
                });
            }
            scene_ids.push(self.sink.add_object(&SceneObject {
                template: TemplateId::Content(item.kind),
                position: item.position,
                yaw: item.yaw,
                scale: item.scale,
            }));
            items.push(self.contents.insert(item));
        }

        log::debug!(
            "created cell ({}, {}): {} items, {} colliders",
            coord.x,
            coord.z,
            items.len(),
            colliders.len()
        );

        Cell {
            coord,
            floor_id,
            items,
            colliders,
            scene_ids,
        }
    }

    fn release_cell(&mut self, coord: CellCoord) {
        let Some(cell) = self.cells.remove(&coord) else {
            // Evicting a non-existent cell is a programming error, but must
            // stay harmless in release builds
            debug_assert!(false, "evicting cell that is not active: {coord:?}");
            return;
        };

        self.sink.remove_object(cell.floor_id);
        for id in cell.scene_ids {
            self.sink.remove_object(id);
        }
        for key in cell.items {
            self.contents.remove(key);
        }

        log::debug!("released cell ({}, {})", coord.x, coord.z);
    }

    #[cfg(test)]
    pub(crate) fn holds_templates(&self) -> bool {
        self.templates.is_some()
    }

    #[cfg(test)]
    pub(crate) fn inject_collider(&mut self, collider: Collider) {
        let coord =
            CellCoord::from_world(collider.center_x, collider.center_z, self.config.cell_size);
        if !self.cells.contains_key(&coord) {
            let floor_id = self.sink.add_object(&SceneObject {
                template: TemplateId::Floor,
                position: Vec3::new(collider.center_x, 0.0, collider.center_z),
                yaw: 0.0,
                scale: self.config.cell_size,
            });
            self.cells.insert(
                coord,
                Cell {
                    coord,
                    floor_id,
                    items: Vec::new(),
                    colliders: Vec::new(),
                    scene_ids: Vec::new(),
                },
            );
        }
        self.cells
            .get_mut(&coord)
            .expect("cell inserted above")
            .colliders
            .push(collider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CountingSink, NullSink};

    fn streamer_with_counters(render_distance: i32) -> (CellStreamer, crate::scene::SinkCounters) {
        let config = WorldConfig {
            render_distance,
            ..WorldConfig::default()
        };
        let (sink, counters) = CountingSink::new();
        let streamer = CellStreamer::new(config, TemplateSet::shared(), Box::new(sink));
        (streamer, counters)
    }

    fn streamer(render_distance: i32) -> CellStreamer {
        let config = WorldConfig {
            render_distance,
            ..WorldConfig::default()
        };
        CellStreamer::new(config, TemplateSet::shared(), Box::new(NullSink::default()))
    }

    #[test]
    fn first_update_builds_the_exact_ring() {
        let mut streamer = streamer(2);
        streamer.update(Vec3::new(50.0, 1.7, 50.0));

        assert_eq!(streamer.active_cell_count(), 25);
        let center = CellCoord { x: 0, z: 0 };
        for coord in streamer.active_coords().collect::<Vec<_>>() {
            assert!(coord.chebyshev(center) <= 2, "cell outside ring: {coord:?}");
        }
        for coord in center.ring(2) {
            assert!(streamer.contains_cell(coord), "missing cell: {coord:?}");
        }
    }

    #[test]
    fn second_update_in_same_cell_is_a_no_op() {
        let (mut streamer, counters) = streamer_with_counters(1);
        streamer.update(Vec3::new(10.0, 0.0, 10.0));
        let added = counters.added();
        let removed = counters.removed();

        streamer.update(Vec3::new(90.0, 0.0, 90.0)); // same cell, different position
        assert_eq!(counters.added(), added);
        assert_eq!(counters.removed(), removed);
    }

    #[test]
    fn crossing_a_boundary_creates_and_evicts_one_column() {
        let (mut streamer, counters) = streamer_with_counters(1);
        streamer.update(Vec3::new(50.0, 0.0, 50.0));
        assert_eq!(streamer.active_cell_count(), 9);

        streamer.update(Vec3::new(150.0, 0.0, 50.0)); // one cell east
        assert_eq!(streamer.active_cell_count(), 9);
        assert!(streamer.contains_cell(CellCoord { x: 2, z: 0 }));
        assert!(!streamer.contains_cell(CellCoord { x: -1, z: 0 }));

        // The three west-column cells were deregistered in full
        assert!(counters.live_objects() > 0);
        assert_ne!(counters.removed(), 0);
    }

    #[test]
    fn recreated_cell_reproduces_identical_content() {
        let mut streamer = streamer(1);
        streamer.update(Vec3::new(50.0, 0.0, 50.0));
        let coord = CellCoord { x: 0, z: 0 };
        let original = streamer.cell_items(coord).expect("cell active");

        // Walk far enough that the cell is evicted, then come back
        streamer.update(Vec3::new(1050.0, 0.0, 50.0));
        assert!(!streamer.contains_cell(coord));
        streamer.update(Vec3::new(50.0, 0.0, 50.0));

        let recreated = streamer.cell_items(coord).expect("cell recreated");
        assert_eq!(original, recreated);
    }

    #[test]
    fn release_all_returns_every_scene_object_and_is_idempotent() {
        let (mut streamer, counters) = streamer_with_counters(2);
        streamer.update(Vec3::new(0.0, 0.0, 0.0));
        assert!(counters.live_objects() > 0);

        streamer.release_all();
        assert_eq!(streamer.active_cell_count(), 0);
        assert_eq!(counters.live_objects(), 0);

        streamer.release_all();
        assert_eq!(counters.live_objects(), 0);
    }

    #[test]
    fn release_all_drops_the_shared_template_handle() {
        let templates = TemplateSet::shared();
        let config = WorldConfig::default();
        let mut streamer =
            CellStreamer::new(config, Arc::clone(&templates), Box::new(NullSink::default()));
        streamer.update(Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Arc::strong_count(&templates), 2);

        streamer.release_all();
        assert!(!streamer.holds_templates());
        assert_eq!(Arc::strong_count(&templates), 1);

        // Resuming acquires a fresh set without touching the old handle
        streamer.update(Vec3::new(0.0, 0.0, 0.0));
        assert!(streamer.holds_templates());
        assert_eq!(Arc::strong_count(&templates), 1);
    }

    #[test]
    fn update_after_release_rebuilds_the_ring() {
        let mut streamer = streamer(1);
        streamer.update(Vec3::new(50.0, 0.0, 50.0));
        streamer.release_all();

        // Same observer cell as before the release; the empty active set
        // must defeat the short-circuit
        streamer.update(Vec3::new(50.0, 0.0, 50.0));
        assert_eq!(streamer.active_cell_count(), 9);
    }

    #[test]
    fn zero_render_distance_keeps_a_single_cell() {
        let mut streamer = streamer(0);
        streamer.update(Vec3::new(-250.0, 0.0, 310.0));
        assert_eq!(streamer.active_cell_count(), 1);
        assert!(streamer.contains_cell(CellCoord { x: -3, z: 3 }));
    }
}
