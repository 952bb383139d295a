//! Headless Exploration Demo
//!
//! Drives the world-streaming core the way the game's frame loop would,
//! without a renderer:
//! - A scripted observer wanders across cell boundaries with jittered heading
//! - Movement goes through the axis-separated slide query each tick
//! - A mid-run teleport exercises full-ring recomputation
//! - Scene registration is logged instead of drawn

use rand::Rng;
use terrain_engine::prelude::*;

/// Simulated ticks to run
const TICKS: u32 = 2_000;

/// Tick at which the observer teleports far across the world
const TELEPORT_TICK: u32 = 1_200;

/// Observer movement speed in world units per tick
const MOVE_SPEED: f32 = 0.15;

/// Observer collision radius
const OBSERVER_RADIUS: f32 = 1.0;

/// Observer eye height, carried through to `update` but irrelevant to the
/// planar collision query
const EYE_HEIGHT: f32 = 1.7;

/// Scene sink that logs registrations instead of rendering them
#[derive(Default)]
struct LogSink {
    next_id: u64,
    live: u64,
}

impl SceneSink for LogSink {
    fn add_object(&mut self, object: &SceneObject) -> SceneObjectId {
        self.next_id += 1;
        self.live += 1;
        log::trace!(
            "scene add #{}: {:?} at ({:.1}, {:.1})",
            self.next_id,
            object.template,
            object.position.x,
            object.position.z
        );
        SceneObjectId(self.next_id)
    }

    fn remove_object(&mut self, id: SceneObjectId) {
        self.live -= 1;
        log::trace!("scene remove #{}", id.0);
    }
}

fn main() -> Result<(), EngineError> {
    env_logger::init();

    // Optional config file path; defaults match the shipped world
    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::load_from_file(&path)?,
        None => WorldConfig::default(),
    };
    log::info!(
        "walk demo: {} ticks, render_distance={}, seed={}",
        TICKS,
        config.render_distance,
        config.world_seed
    );

    let mut core = WorldCore::new(config, Box::new(LogSink::default()))?;
    let mut rng = rand::thread_rng();

    let mut position = Vec2::new(0.0, 0.0);
    let mut heading: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let mut contacts: u32 = 0;

    for tick in 0..TICKS {
        if tick == TELEPORT_TICK {
            position = Vec2::new(25_000.0, -25_000.0);
            log::info!("teleporting observer to ({:.0}, {:.0})", position.x, position.y);
        }

        core.update(Vec3::new(position.x, EYE_HEIGHT, position.y));

        heading += rng.gen_range(-0.08..0.08);
        let desired = Vec2::new(heading.cos(), heading.sin()) * MOVE_SPEED;
        let next = core.slide(position, desired, OBSERVER_RADIUS);

        if let Some(contact) = core.check_collision(next.x, next.y, OBSERVER_RADIUS) {
            contacts += 1;
            log::debug!(
                "tick {tick}: brushing a {:?} (penetration {:.3})",
                contact.kind,
                contact.penetration
            );
        }
        position = next;

        if tick % 200 == 0 {
            log::info!(
                "tick {tick}: pos=({:.1}, {:.1}), active cells={}",
                position.x,
                position.y,
                core.active_cell_count()
            );
        }
    }

    log::info!(
        "walked to ({:.1}, {:.1}) with {} contact ticks; disposing",
        position.x,
        position.y,
        contacts
    );
    core.dispose();
    Ok(())
}
