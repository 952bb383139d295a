//! The opaque "add object / remove object" interface of the renderer

use crate::foundation::math::Vec3;
use crate::worldgen::templates::TemplateId;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Opaque handle to an object registered with the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneObjectId(pub u64);

/// Everything the renderer needs to display one streamed object
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Which shared template to instance
    pub template: TemplateId,
    /// World position
    pub position: Vec3,
    /// Yaw rotation in radians
    pub yaw: f32,
    /// Uniform scale
    pub scale: f32,
}

/// Interface the rendering collaborator exposes to the streaming core
///
/// Implementations assign the handle; the streaming core only stores it so
/// eviction can deregister exactly what creation registered.
pub trait SceneSink {
    /// Register an object for display, returning its handle
    fn add_object(&mut self, object: &SceneObject) -> SceneObjectId;

    /// Deregister a previously added object
    fn remove_object(&mut self, id: SceneObjectId);
}

/// Sink that discards everything; for headless use
#[derive(Debug, Default)]
pub struct NullSink {
    next_id: u64,
}

impl SceneSink for NullSink {
    fn add_object(&mut self, _object: &SceneObject) -> SceneObjectId {
        self.next_id += 1;
        SceneObjectId(self.next_id)
    }

    fn remove_object(&mut self, _id: SceneObjectId) {}
}

/// Shared view into a [`CountingSink`]'s bookkeeping
#[derive(Debug, Clone, Default)]
pub struct SinkCounters {
    state: Arc<Mutex<CounterState>>,
}

#[derive(Debug, Default)]
struct CounterState {
    added: u64,
    removed: u64,
    live: HashSet<SceneObjectId>,
}

impl SinkCounters {
    /// Total objects ever added
    pub fn added(&self) -> u64 {
        self.state.lock().expect("sink counters poisoned").added
    }

    /// Total objects ever removed
    pub fn removed(&self) -> u64 {
        self.state.lock().expect("sink counters poisoned").removed
    }

    /// Objects currently registered
    pub fn live_objects(&self) -> usize {
        self.state.lock().expect("sink counters poisoned").live.len()
    }
}

/// Sink that tallies registrations; for assertions in tests and soak drivers
#[derive(Debug, Default)]
pub struct CountingSink {
    counters: SinkCounters,
    next_id: u64,
}

impl CountingSink {
    /// Create a counting sink together with its shared counters handle
    pub fn new() -> (Self, SinkCounters) {
        let sink = Self::default();
        let counters = sink.counters.clone();
        (sink, counters)
    }
}

impl SceneSink for CountingSink {
    fn add_object(&mut self, _object: &SceneObject) -> SceneObjectId {
        self.next_id += 1;
        let id = SceneObjectId(self.next_id);
        let mut state = self.counters.state.lock().expect("sink counters poisoned");
        state.added += 1;
        state.live.insert(id);
        id
    }

    fn remove_object(&mut self, id: SceneObjectId) {
        let mut state = self.counters.state.lock().expect("sink counters poisoned");
        state.removed += 1;
        state.live.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_object() -> SceneObject {
        SceneObject {
            template: TemplateId::Floor,
            position: Vec3::zeros(),
            yaw: 0.0,
            scale: 1.0,
        }
    }

    #[test]
    fn counting_sink_tracks_live_objects() {
        let (mut sink, counters) = CountingSink::new();
        let a = sink.add_object(&some_object());
        let b = sink.add_object(&some_object());
        assert_eq!(counters.added(), 2);
        assert_eq!(counters.live_objects(), 2);

        sink.remove_object(a);
        assert_eq!(counters.removed(), 1);
        assert_eq!(counters.live_objects(), 1);

        sink.remove_object(b);
        assert_eq!(counters.live_objects(), 0);
    }

    #[test]
    fn null_sink_hands_out_distinct_ids() {
        let mut sink = NullSink::default();
        let a = sink.add_object(&some_object());
        let b = sink.add_object(&some_object());
        assert_ne!(a, b);
    }
}
